use crate::commands::CmdResult;
use crate::model::Snippet;
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::{BrowseQuery, Listing, SnippetCard};

/// Public snippets matching the query, in store order.
pub fn matching<S: KeyValueStore>(store: &SnippetStore<S>, query: &BrowseQuery) -> Vec<Snippet> {
    let term = query.search.trim().to_lowercase();
    let lang = query.lang.as_deref().filter(|l| !l.is_empty());

    store
        .list_public()
        .into_iter()
        .filter(|s| {
            term.is_empty()
                || s.title.to_lowercase().contains(&term)
                || s.code.to_lowercase().contains(&term)
        })
        .filter(|s| lang.map_or(true, |l| s.lang == l))
        .collect()
}

pub fn render<S: KeyValueStore>(store: &SnippetStore<S>, query: &BrowseQuery) -> Listing {
    let cards = matching(store, query)
        .iter()
        .map(SnippetCard::from_snippet)
        .collect();
    Listing::from_cards(cards)
}

pub fn run<S: KeyValueStore>(store: &SnippetStore<S>, query: &BrowseQuery) -> CmdResult {
    CmdResult::default().with_listing(render(store, query))
}
