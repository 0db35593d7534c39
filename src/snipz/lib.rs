//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet library**: code snippets tagged with a
//! language, saved either public (listed, searchable) or private (reachable
//! only through a direct link carrying the snippet id). The CLI is one client
//! of it; a browser front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs side effects, renders panels      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and base location  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pure function per user action                        │
//! │  - Explicit UI state in, CmdResult out                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, FileKv (production), MemoryKv       │
//! │  - SnippetStore: load / save / add / find / list public     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands return intents
//!
//! A command never shows a notification or switches a panel itself. It
//! returns a [`commands::CmdResult`] saying what should happen, and
//! [`view::UiState::apply`] performs the panel/editor/fragment transitions.
//! That keeps every operation testable against a [`store::memory::MemoryKv`]
//! without a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Save, list, view, copy link, startup, panel switch
//! - [`store`]: Key-value abstraction and the snippet collection
//! - [`model`]: The `Snippet` record
//! - [`lang`]: Supported languages and editor modes
//! - [`link`]: Direct links and address parsing
//! - [`view`]: Panels, editor state, snippet cards
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod lang;
pub mod link;
pub mod model;
pub mod store;
pub mod view;
