use crate::commands::{list, view, CmdResult};
use crate::link::Location;
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::BrowseQuery;

/// Initial page load: resolve a direct link in the fragment, then render the
/// browse list so it's ready when shown.
pub fn run<S: KeyValueStore>(
    store: &SnippetStore<S>,
    location: &Location,
    query: &BrowseQuery,
) -> CmdResult {
    let resolved = match location.snippet_id() {
        Some(id) => view::run(store, id),
        None => CmdResult::default(),
    };
    resolved.merge(list::run(store, query))
}
