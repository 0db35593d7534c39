use crate::error::{Result, SnipzError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard through the platform tool.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(&mut spawn_piped("pbcopy", &[])?, "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        run_first_working(LINUX_TOOLS, text)
            .map_err(|e| SnipzError::Api(format!("{}. Install xclip or xsel.", e)))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(&mut spawn_piped("clip", &[])?, "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(SnipzError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
const LINUX_TOOLS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Tries each tool in order, moving on when one can't start or exits
/// non-zero. The last failure is returned.
#[cfg(any(target_os = "linux", test))]
fn run_first_working(tools: &[(&str, &[&str])], text: &str) -> Result<()> {
    let mut last = SnipzError::Api("No clipboard tool configured".to_string());
    for (program, args) in tools {
        let attempt =
            spawn_piped(program, args).and_then(|mut child| pipe_to(&mut child, program, text));
        match attempt {
            Ok(()) => return Ok(()),
            Err(e) => last = e,
        }
    }
    Err(last)
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows", test))]
fn spawn_piped(program: &str, args: &[&str]) -> Result<std::process::Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SnipzError::Api(format!("Failed to spawn {}: {}", program, e)))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows", test))]
fn pipe_to(child: &mut std::process::Child, name: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SnipzError::Api(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SnipzError::Api(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SnipzError::Api(format!("{} exited with error", name)))
    }
}
