//! # UI State
//!
//! The page has exactly two panels, an editor and a browse list. Commands
//! never touch this state directly: they take the pieces they need as
//! arguments ([`EditorState`], [`BrowseQuery`]) and describe the outcome in a
//! [`CmdResult`]. [`UiState::apply`] then performs the transition, which keeps
//! the panel state machine in one place:
//!
//! ```text
//!            switch(Browse) / public save
//!   Editor ───────────────────────────────▶ Browse
//!          ◀───────────────────────────────
//!            switch(Editor) / view / direct link
//! ```
//!
//! Initial state is `Editor`.

use crate::commands::CmdResult;
use crate::lang::{display_label, Language};
use crate::link::Location;
use crate::model::Snippet;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Length of the code preview on a snippet card, in characters.
pub const PREVIEW_CHARS: usize = 220;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Editor,
    Browse,
}

/// The editor's transient fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    pub title: String,
    pub lang: String,
    pub code: String,
    pub private: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: Language::default().tag().to_string(),
            code: String::new(),
            private: false,
        }
    }
}

impl EditorState {
    pub fn new(title: impl Into<String>, lang: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            code: code.into(),
            private: false,
        }
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            title: snippet.title.clone(),
            lang: snippet.lang.clone(),
            code: snippet.code.clone(),
            private: snippet.private,
        }
    }

    /// Same language selection, everything else reset.
    pub fn cleared(&self) -> Self {
        Self {
            lang: self.lang.clone(),
            ..Self::default()
        }
    }
}

/// Search text and language filter from the browse panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseQuery {
    pub search: String,
    pub lang: Option<String>,
}

impl BrowseQuery {
    pub fn new(search: impl Into<String>, lang: Option<String>) -> Self {
        Self {
            search: search.into(),
            lang,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardAction {
    View,
    CopyLink,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::View => "View",
            CardAction::CopyLink => "Copy Link",
        }
    }
}

/// Summary of a public snippet as shown in the browse list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetCard {
    pub id: String,
    pub title: String,
    /// Upper-cased language tag.
    pub lang: String,
    /// Local, human-readable creation time.
    pub created: String,
    pub created_ago: String,
    /// First [`PREVIEW_CHARS`] characters of the code, `…` appended if cut.
    pub preview: String,
    pub truncated: bool,
    pub actions: [CardAction; 2],
}

impl SnippetCard {
    pub fn from_snippet(snippet: &Snippet) -> Self {
        let (preview, truncated) = ellipsis(&snippet.code, PREVIEW_CHARS);
        Self {
            id: snippet.id.clone(),
            title: snippet.title.clone(),
            lang: display_label(&snippet.lang),
            created: format_created(snippet.created),
            created_ago: format_time_ago(snippet.created),
            preview,
            truncated,
            actions: [CardAction::View, CardAction::CopyLink],
        }
    }

    pub fn title_html(&self) -> String {
        escape_html(&self.title)
    }

    pub fn preview_html(&self) -> String {
        escape_html(&self.preview)
    }
}

/// Result of rendering the browse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Cards(Vec<SnippetCard>),
    NoResults,
}

impl Listing {
    pub fn from_cards(cards: Vec<SnippetCard>) -> Self {
        if cards.is_empty() {
            Listing::NoResults
        } else {
            Listing::Cards(cards)
        }
    }

    pub fn cards(&self) -> &[SnippetCard] {
        match self {
            Listing::Cards(cards) => cards,
            Listing::NoResults => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoResults)
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Cuts `s` to `max_chars` characters, appending `…` when anything was cut.
pub fn ellipsis(s: &str, max_chars: usize) -> (String, bool) {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (format!("{}…", &s[..byte_idx]), true),
        None => (s.to_string(), false),
    }
}

pub fn format_created(created: DateTime<Utc>) -> String {
    created
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn format_time_ago(created: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(created);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

/// Everything the page shows, driven by [`CmdResult`]s.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub panel: Panel,
    pub editor: EditorState,
    pub browse: BrowseQuery,
    pub location: Location,
    pub listing: Option<Listing>,
}

impl UiState {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, result: &CmdResult) {
        if let Some(panel) = result.panel {
            self.panel = panel;
        }
        if let Some(editor) = &result.editor {
            self.editor = editor.clone();
        }
        if let Some(fragment) = &result.fragment {
            self.location.fragment = fragment.clone();
        }
        if let Some(listing) = &result.listing {
            self.listing = Some(listing.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn escapes_html_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_html("it's fine"), "it's fine");
    }

    #[test]
    fn ellipsis_keeps_short_strings() {
        assert_eq!(ellipsis("abc", 3), ("abc".to_string(), false));
    }

    #[test]
    fn ellipsis_cuts_on_char_boundaries() {
        let (cut, truncated) = ellipsis("héllo wörld", 4);
        assert_eq!(cut, "héll…");
        assert!(truncated);
    }

    #[test]
    fn card_preview_is_220_chars() {
        let code = "x".repeat(300);
        let snip = Snippet::new("Long", "python", code, false);
        let card = SnippetCard::from_snippet(&snip);
        assert!(card.truncated);
        assert_eq!(card.preview.chars().count(), PREVIEW_CHARS + 1);
        assert!(card.preview.ends_with('…'));
    }

    #[test]
    fn card_escapes_for_html() {
        let snip = Snippet::new("<b>", "html", "<p>\"hi\"</p>".into(), false);
        let card = SnippetCard::from_snippet(&snip);
        assert_eq!(card.title_html(), "&lt;b&gt;");
        assert_eq!(card.preview_html(), "&lt;p&gt;&quot;hi&quot;&lt;/p&gt;");
        assert_eq!(card.lang, "HTML");
        assert_eq!(card.actions, [CardAction::View, CardAction::CopyLink]);
    }

    #[test]
    fn created_is_human_readable() {
        let created = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let shown = format_created(created);
        assert!(shown.starts_with("2024-06-1"), "got {}", shown);
    }

    #[test]
    fn cleared_editor_keeps_language() {
        let editor = EditorState::new("T", "python", "print(1)").with_private(true);
        assert_eq!(
            editor.cleared(),
            EditorState {
                title: String::new(),
                lang: "python".into(),
                code: String::new(),
                private: false,
            }
        );
    }

    #[test]
    fn empty_cards_become_no_results() {
        assert_eq!(Listing::from_cards(vec![]), Listing::NoResults);
    }

    #[test]
    fn initial_panel_is_editor() {
        assert_eq!(UiState::default().panel, Panel::Editor);
    }

    #[test]
    fn apply_only_touches_what_the_result_names() {
        let mut ui = UiState::new(Location::new("http://x", "/"));
        ui.editor = EditorState::new("keep", "css", "a{}");

        let mut result = CmdResult::default();
        result.panel = Some(Panel::Browse);
        result.listing = Some(Listing::NoResults);
        ui.apply(&result);

        assert_eq!(ui.panel, Panel::Browse);
        assert_eq!(ui.editor.title, "keep");
        assert_eq!(ui.listing, Some(Listing::NoResults));
        assert_eq!(ui.location.fragment, "");
    }
}
