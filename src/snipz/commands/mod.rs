//! # Command Layer
//!
//! One module per user action. Each `run` takes the store plus the explicit
//! UI input it needs and returns a [`CmdResult`] describing what should
//! happen: notifications to show, a panel to switch to, editor fields to
//! populate, a fragment to navigate to, text to put on the clipboard.
//!
//! Validation and lookup failures are not errors here. They come back as
//! [`MessageLevel::Error`] messages with nothing else set, so the caller
//! shows the notification and leaves its state untouched. `Err` is reserved
//! for storage failures.

use crate::model::Snippet;
use crate::view::{EditorState, Listing, Panel};

pub mod copy_link;
pub mod list;
pub mod panel;
pub mod save;
pub mod startup;
pub mod view;

pub const MIN_CODE_CHARS: usize = 3;

pub const MSG_EMPTY_CODE: &str = "Write some code first!";
pub const MSG_SAVED_PUBLIC: &str = "Saved to public!";
pub const MSG_NOT_FOUND: &str = "Snippet not found";
pub const MSG_LINK_COPIED: &str = "Link copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listing: Option<Listing>,
    pub panel: Option<Panel>,
    pub editor: Option<EditorState>,
    /// New address fragment, e.g. `#s-<id>`.
    pub fragment: Option<String>,
    pub link: Option<String>,
    /// Text to place on the system clipboard.
    pub clipboard: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn with_editor(mut self, editor: EditorState) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn with_fragment(mut self, fragment: String) -> Self {
        self.fragment = Some(fragment);
        self
    }

    pub fn with_link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_clipboard(mut self, text: String) -> Self {
        self.clipboard = Some(text);
        self
    }

    /// True when an error notification was raised.
    pub fn is_rejected(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Folds another result into this one; later values win.
    pub fn merge(mut self, other: CmdResult) -> Self {
        self.affected_snippets.extend(other.affected_snippets);
        self.messages.extend(other.messages);
        self.listing = other.listing.or(self.listing);
        self.panel = other.panel.or(self.panel);
        self.editor = other.editor.or(self.editor);
        self.fragment = other.fragment.or(self.fragment);
        self.link = other.link.or(self.link);
        self.clipboard = other.clipboard.or(self.clipboard);
        self
    }
}
