//! # CLI Layer
//!
//! This module is **one possible UI client** for snipz. Each subcommand is
//! one user action on the page:
//!
//! 1. Build the [`UiState`] the action reads (editor fields, browse query,
//!    address)
//! 2. Call the matching `SnipzApi` method
//! 3. Apply the returned `CmdResult` to the state
//! 4. Run side effects (clipboard) and print notifications
//! 5. Render whichever panel ended up visible
//!
//! Rejections (code too short, unknown language, snippet not found) come
//! back as errors so the process exits non-zero.

use super::render::{print_messages, render_editor, render_listing, render_listing_html};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use snipz::api::{CmdResult, MessageLevel, SnipzApi};
use snipz::clipboard::copy_to_clipboard;
use snipz::config::{SnipzConfig, KEYS};
use snipz::editor::edit_code;
use snipz::error::{Result, SnipzError};
use snipz::link::Location;
use snipz::store::fs::FileKv;
use snipz::store::SnippetStore;
use snipz::view::{BrowseQuery, EditorState, Panel, UiState};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (store and config).
pub const HOME_ENV: &str = "SNIPZ_HOME";

struct AppContext {
    api: SnipzApi<FileKv>,
    config: SnipzConfig,
    data_dir: PathBuf,
}

impl AppContext {
    fn ui(&self) -> UiState {
        UiState::new(self.api.base().clone())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Save {
            title,
            lang,
            private,
            code,
            file,
        }) => handle_save(&ctx, title, lang, private, code, file),
        Some(Commands::List { search, lang, html }) => handle_list(&ctx, search, lang, html),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Link { id }) => handle_link(&ctx, &id),
        Some(Commands::Open { link }) => handle_open(&ctx, &link),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None, false),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("Could not determine data dir".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(data_dir = %data_dir.display(), "using data dir");

    let config = SnipzConfig::load(&data_dir)?;
    let store = SnippetStore::new(FileKv::new(data_dir.clone()));
    let api = SnipzApi::new(store, config.base_location());

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

/// Prints notifications, or turns the first error notification into an Err.
fn finish(result: &CmdResult) -> Result<()> {
    if let Some(err) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(SnipzError::Api(err.content.clone()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn render_panel(ui: &UiState, result: &CmdResult, html: bool) -> Result<()> {
    match ui.panel {
        Panel::Browse => {
            if let Some(listing) = &ui.listing {
                let out = if html {
                    render_listing_html(listing)?
                } else {
                    render_listing(listing)?
                };
                print!("{}", out);
            }
        }
        Panel::Editor => {
            if ui.editor.code.is_empty() && ui.editor.title.is_empty() {
                return Ok(());
            }
            let link = result
                .affected_snippets
                .first()
                .map(|s| ui.location.link_to(&s.id));
            print!("{}", render_editor(&ui.editor, link.as_deref())?);
        }
    }
    Ok(())
}

fn read_code(code: Option<String>, file: Option<PathBuf>, lang: &str) -> Result<String> {
    if let Some(code) = code {
        return Ok(code);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(SnipzError::Io);
    }

    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer).map_err(SnipzError::Io)?;
        return Ok(buffer);
    }

    edit_code("", lang)
}

fn handle_save(
    ctx: &AppContext,
    title: Option<String>,
    lang: Option<String>,
    private: bool,
    code: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let lang = lang.unwrap_or_else(|| ctx.config.default_lang.clone());
    let code = read_code(code, file, &lang)?;

    let mut ui = ctx.ui();
    ui.editor = EditorState::new(title.unwrap_or_default(), lang, code).with_private(private);

    let result = ctx.api.save_snippet(&ui.editor, &ui.browse)?;
    finish(&result)?;
    ui.apply(&result);

    if let Some(fragment) = &result.fragment {
        debug!(fragment = %fragment, "address updated");
    }
    render_panel(&ui, &result, false)
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    lang: Option<String>,
    html: bool,
) -> Result<()> {
    let mut ui = ctx.ui();
    ui.browse = BrowseQuery::new(search.unwrap_or_default(), lang);

    let result = ctx.api.switch_panel(Panel::Browse, &ui.browse);
    ui.apply(&result);
    finish(&result)?;
    render_panel(&ui, &result, html)
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let mut ui = ctx.ui();
    let result = ctx.api.view_snippet(id);
    finish(&result)?;
    ui.apply(&result);
    render_panel(&ui, &result, false)
}

fn handle_link(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.copy_link(id);
    let link = result.link.clone().unwrap_or_default();

    if let Some(text) = &result.clipboard {
        if let Err(e) = copy_to_clipboard(text) {
            eprintln!("Warning: Failed to copy to clipboard: {}", e);
            println!("{}", link);
            return Ok(());
        }
    }

    finish(&result)?;
    println!("{}", link);
    Ok(())
}

fn handle_open(ctx: &AppContext, link: &str) -> Result<()> {
    let mut location = Location::parse(link);
    if location.snippet_id().is_none() {
        return Err(SnipzError::Api(format!("Not a snippet link: {}", link)));
    }
    if location.origin.is_empty() {
        let base = ctx.api.base();
        location.origin = base.origin.clone();
        location.path = base.path.clone();
    }

    let mut ui = UiState::new(location);
    let result = ctx.api.startup(&ui.location, &ui.browse);
    finish(&result)?;
    ui.apply(&result);
    render_panel(&ui, &result, false)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => {
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[snipz::api::CmdMessage::success(format!(
                "Set {} = {}",
                key,
                ctx.config.get(&key)?
            ))]);
        }
    }
    Ok(())
}
