use crate::commands::{CmdMessage, CmdResult, MSG_NOT_FOUND};
use crate::store::{KeyValueStore, SnippetStore};
use crate::view::{EditorState, Panel};
use tracing::debug;

/// Loads a snippet into the editor for display.
///
/// Nothing marks the snippet as being edited; saving afterwards creates an
/// unrelated record.
pub fn run<S: KeyValueStore>(store: &SnippetStore<S>, id: &str) -> CmdResult {
    match store.find_by_id(id) {
        Some(snippet) => CmdResult::default()
            .with_panel(Panel::Editor)
            .with_editor(EditorState::from_snippet(&snippet))
            .with_affected_snippets(vec![snippet]),
        None => {
            debug!(id, "snippet lookup failed");
            CmdResult::default().with_message(CmdMessage::error(MSG_NOT_FOUND))
        }
    }
}
