use crate::commands::{
    list, CmdMessage, CmdResult, MIN_CODE_CHARS, MSG_EMPTY_CODE, MSG_SAVED_PUBLIC,
};
use crate::error::Result;
use crate::lang::Language;
use crate::link::{fragment_for, Location};
use crate::model::Snippet;
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::{BrowseQuery, EditorState, Panel};
use tracing::info;

/// Saves the editor's content as a brand-new snippet.
///
/// Private snippets come back with their direct link and the fragment to
/// navigate to; public ones switch to the browse panel. Either way the
/// editor is cleared.
pub fn run<S: KeyValueStore>(
    store: &SnippetStore<S>,
    base: &Location,
    editor: &EditorState,
    query: &BrowseQuery,
) -> Result<CmdResult> {
    if editor.code.chars().count() < MIN_CODE_CHARS {
        return Ok(CmdResult::default().with_message(CmdMessage::error(MSG_EMPTY_CODE)));
    }
    let lang = match editor.lang.parse::<Language>() {
        Ok(lang) => lang,
        Err(e) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
        }
    };

    let snippet = store.add(Snippet::new(
        &editor.title,
        lang.tag(),
        editor.code.clone(),
        editor.private,
    ))?;
    info!(id = %snippet.id, private = snippet.private, "saved snippet");

    let mut result = if snippet.private {
        let link = base.link_to(&snippet.id);
        CmdResult::default()
            .with_message(CmdMessage::success(format!("Saved! Private link: {}", link)))
            .with_fragment(fragment_for(&snippet.id))
            .with_link(link)
    } else {
        CmdResult::default()
            .with_message(CmdMessage::success(MSG_SAVED_PUBLIC))
            .with_panel(Panel::Browse)
            .with_listing(list::render(store, query))
    };

    result.editor = Some(editor.cleared());
    Ok(result.with_affected_snippets(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemoryKv;
    use crate::view::Listing;

    fn base() -> Location {
        Location::new("http://localhost", "/")
    }

    fn save(store: &SnippetStore<MemoryKv>, editor: &EditorState) -> CmdResult {
        run(store, &base(), editor, &BrowseQuery::default()).unwrap()
    }

    #[test]
    fn rejects_code_shorter_than_three_chars() {
        let store = SnippetStore::new(MemoryKv::new());
        for code in ["", "a", "ab"] {
            let editor = EditorState::new("T", "python", code);
            let result = save(&store, &editor);
            assert!(result.is_rejected());
            assert_eq!(result.messages[0].content, MSG_EMPTY_CODE);
            assert!(result.editor.is_none());
            assert!(result.panel.is_none());
        }
        assert!(store.load().is_empty());
    }

    #[test]
    fn accepts_exactly_three_chars() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = save(&store, &EditorState::new("T", "python", "abc"));
        assert!(!result.is_rejected());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = save(&store, &EditorState::new("T", "python", "éé"));
        assert!(result.is_rejected());
    }

    #[test]
    fn rejects_unknown_language() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = save(&store, &EditorState::new("T", "cobol", "MOVE A TO B"));
        assert!(result.is_rejected());
        assert_eq!(result.messages[0].content, "Unknown language: cobol");
        assert!(store.load().is_empty());
    }

    #[test]
    fn htmlmixed_is_stored_as_html() {
        let store = SnippetStore::new(MemoryKv::new());
        save(&store, &EditorState::new("Page", "htmlmixed", "<p>hi</p>"));

        assert_eq!(store.load()[0].lang, "html");
        let listing = list::render(&store, &BrowseQuery::new("", Some("html".into())));
        assert_eq!(listing.cards().len(), 1);
        assert_eq!(listing.cards()[0].lang, "HTML");
    }

    #[test]
    fn public_save_switches_to_browse_with_fresh_listing() {
        let store = SnippetStore::new(MemoryKv::new());
        let result = save(&store, &EditorState::new("Hi", "python", "print(1)"));

        assert_eq!(result.panel, Some(Panel::Browse));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, MSG_SAVED_PUBLIC);
        assert!(result.fragment.is_none());

        let listing = result.listing.unwrap();
        let cards = listing.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Hi");
        assert_eq!(cards[0].lang, "PYTHON");
        assert!(cards[0].preview.contains("print(1)"));
    }

    #[test]
    fn private_save_returns_link_and_fragment() {
        let store = SnippetStore::new(MemoryKv::new());
        let editor = EditorState::new("Secret", "python", "token = 42").with_private(true);
        let result = save(&store, &editor);

        let id = result.affected_snippets[0].id.clone();
        let link = format!("http://localhost/#s-{}", id);
        assert_eq!(result.link.as_deref(), Some(link.as_str()));
        assert_eq!(result.fragment, Some(format!("#s-{}", id)));
        assert_eq!(
            result.messages[0].content,
            format!("Saved! Private link: {}", link)
        );
        assert!(result.panel.is_none());
        assert!(result.listing.is_none());
        assert!(store.list_public().is_empty());
    }

    #[test]
    fn success_always_clears_editor() {
        let store = SnippetStore::new(MemoryKv::new());
        for private in [true, false] {
            let editor = EditorState::new("T", "css", "a {}").with_private(private);
            let result = save(&store, &editor);
            let cleared = result.editor.unwrap();
            assert_eq!(cleared.title, "");
            assert_eq!(cleared.code, "");
            assert!(!cleared.private);
            assert_eq!(cleared.lang, "css");
        }
    }

    #[test]
    fn blank_title_saved_as_untitled() {
        let store = SnippetStore::new(MemoryKv::new());
        save(&store, &EditorState::new("  ", "python", "pass"));
        assert_eq!(store.load()[0].title, "Untitled");
    }

    #[test]
    fn round_trip_keeps_fields() {
        let store = SnippetStore::new(MemoryKv::new());
        let editor = EditorState::new("Title", "java", "class A {}").with_private(true);
        save(&store, &editor);

        let stored = &store.load()[0];
        assert_eq!(EditorState::from_snippet(stored), editor);
    }

    #[test]
    fn saving_again_creates_new_record() {
        let store = SnippetStore::new(MemoryKv::new());
        let editor = EditorState::new("Same", "python", "x = 1");
        let first = save(&store, &editor).affected_snippets[0].clone();
        let second = save(&store, &editor).affected_snippets[0].clone();

        assert_ne!(first.id, second.id);
        let ids: Vec<_> = store.load().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn listing_after_public_save_honours_query() {
        let store = SnippetStore::new(MemoryKv::new());
        save(&store, &EditorState::new("Css", "css", "a {}"));
        let query = BrowseQuery::new("", Some("css".into()));
        let result = run(
            &store,
            &base(),
            &EditorState::new("Py", "python", "pass"),
            &query,
        )
        .unwrap();

        let listing = result.listing.unwrap();
        assert!(matches!(listing, Listing::Cards(_)));
        assert_eq!(listing.cards()[0].title, "Css");
    }
}
