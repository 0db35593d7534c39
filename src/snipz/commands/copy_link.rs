use crate::commands::{CmdMessage, CmdResult, MSG_LINK_COPIED};
use crate::link::Location;

/// Direct link for `id`, destined for the clipboard. The id is not checked
/// against the store.
pub fn run(base: &Location, id: &str) -> CmdResult {
    let link = base.link_to(id);
    CmdResult::default()
        .with_clipboard(link.clone())
        .with_link(link)
        .with_message(CmdMessage::success(MSG_LINK_COPIED))
}
