//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all snipz operations, whatever UI drives them.
//!
//! `SnipzApi<S: KeyValueStore>` owns the [`SnippetStore`] and the base
//! [`Location`] direct links are built from:
//! - Production: `SnipzApi<FileKv>`
//! - Testing: `SnipzApi<MemoryKv>`
//!
//! It does no business logic and no I/O beyond the store. Tests here only
//! check dispatch; behaviour is tested in `commands/*.rs`.

use crate::commands;
use crate::error::Result;
use crate::link::Location;
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::{BrowseQuery, EditorState, Panel};

pub struct SnipzApi<S: KeyValueStore> {
    store: SnippetStore<S>,
    base: Location,
}

impl<S: KeyValueStore> SnipzApi<S> {
    pub fn new(store: SnippetStore<S>, base: Location) -> Self {
        Self { store, base }
    }

    pub fn switch_panel(&self, target: Panel, query: &BrowseQuery) -> commands::CmdResult {
        commands::panel::switch(&self.store, target, query)
    }

    pub fn save_snippet(
        &self,
        editor: &EditorState,
        query: &BrowseQuery,
    ) -> Result<commands::CmdResult> {
        commands::save::run(&self.store, &self.base, editor, query)
    }

    pub fn list_snippets(&self, query: &BrowseQuery) -> commands::CmdResult {
        commands::list::run(&self.store, query)
    }

    pub fn view_snippet(&self, id: &str) -> commands::CmdResult {
        commands::view::run(&self.store, id)
    }

    pub fn copy_link(&self, id: &str) -> commands::CmdResult {
        commands::copy_link::run(&self.base, id)
    }

    pub fn startup(&self, location: &Location, query: &BrowseQuery) -> commands::CmdResult {
        commands::startup::run(&self.store, location, query)
    }

    pub fn store(&self) -> &SnippetStore<S> {
        &self.store
    }

    pub fn base(&self) -> &Location {
        &self.base
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
