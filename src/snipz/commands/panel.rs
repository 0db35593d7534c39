use crate::commands::{list, CmdResult};
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::{BrowseQuery, Panel};

/// Shows `target`. The browse list is re-rendered every time it is shown so
/// it reflects saves made in the meantime.
pub fn switch<S: KeyValueStore>(
    store: &SnippetStore<S>,
    target: Panel,
    query: &BrowseQuery,
) -> CmdResult {
    let result = CmdResult::default().with_panel(target);
    match target {
        Panel::Browse => result.with_listing(list::render(store, query)),
        Panel::Editor => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Snippet;
    use crate::store::memory::MemoryKv;
    use crate::view::Listing;

    #[test]
    fn browse_renders_listing() {
        let store = SnippetStore::new(MemoryKv::new());
        store
            .add(Snippet::new("A", "python", "pass".into(), false))
            .unwrap();

        let result = switch(&store, Panel::Browse, &BrowseQuery::default());
        assert_eq!(result.panel, Some(Panel::Browse));
        assert_eq!(result.listing.unwrap().cards().len(), 1);
    }

    #[test]
    fn editor_does_not_render() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = switch(&store, Panel::Editor, &BrowseQuery::default());
        assert_eq!(result.panel, Some(Panel::Editor));
        assert!(result.listing.is_none());
    }

    #[test]
    fn browse_on_empty_store_is_no_results() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = switch(&store, Panel::Browse, &BrowseQuery::default());
        assert_eq!(result.listing, Some(Listing::NoResults));
    }
}
