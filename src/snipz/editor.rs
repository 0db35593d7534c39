//! External editor integration.
//!
//! Code is written in the user's own editor: the initial text goes to a temp
//! file named after the snippet's language (so the editor picks a syntax
//! mode), the editor runs to completion, and the file is read back.

use crate::error::{Result, SnipzError};
use crate::lang::file_ext_for;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(SnipzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor.as_str());

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| SnipzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(SnipzError::Io)
}

/// Temp file the editor is opened on, named for the language's extension.
pub fn scratch_path(lang: &str) -> PathBuf {
    env::temp_dir().join(format!("snipz-{}{}", Uuid::new_v4().simple(), file_ext_for(lang)))
}

/// Opens an editor on `initial` code and returns the edited code.
pub fn edit_code(initial: &str, lang: &str) -> Result<String> {
    let temp_file = scratch_path(lang);
    fs::write(&temp_file, initial).map_err(SnipzError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_path_uses_language_extension() {
        let path = scratch_path("python");
        assert_eq!(path.extension().unwrap(), "py");

        let path = scratch_path("something-else");
        assert_eq!(path.extension().unwrap(), "txt");
    }

    #[test]
    fn scratch_paths_are_unique() {
        assert_ne!(scratch_path("css"), scratch_path("css"));
    }
}
