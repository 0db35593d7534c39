//! Supported languages and their editor modes.
//!
//! The same closed set drives the language selector, the editor's syntax
//! mode and the browse filter. Stored snippets may still carry tags outside
//! this set (the collection is plain JSON), so display helpers work on raw
//! tags and fall back to [`DEFAULT_MODE`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mode used for any tag we don't recognize.
pub const DEFAULT_MODE: &str = "javascript";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Html,
    Css,
    Markdown,
    Cpp,
    Java,
    Xml,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::Javascript,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::Markdown,
        Language::Cpp,
        Language::Java,
        Language::Xml,
    ];

    /// The tag stored on snippets and used by the browse filter.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Markdown => "markdown",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Xml => "xml",
        }
    }

    /// Syntax mode identifier understood by the editor.
    pub fn mode(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Html => "htmlmixed",
            Language::Css => "css",
            Language::Markdown => "markdown",
            Language::Cpp => "text/x-c++src",
            Language::Java => "text/x-java",
            Language::Xml => "xml",
        }
    }

    pub fn file_ext(&self) -> &'static str {
        match self {
            Language::Javascript => ".js",
            Language::Python => ".py",
            Language::Html => ".html",
            Language::Css => ".css",
            Language::Markdown => ".md",
            Language::Cpp => ".cpp",
            Language::Java => ".java",
            Language::Xml => ".xml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "htmlmixed" {
            return Ok(Language::Html);
        }
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Editor mode for a raw tag, [`DEFAULT_MODE`] when unrecognized.
pub fn editor_mode_for(tag: &str) -> &'static str {
    tag.parse::<Language>()
        .map(|lang| lang.mode())
        .unwrap_or(DEFAULT_MODE)
}

/// File extension for a raw tag, `.txt` when unrecognized.
pub fn file_ext_for(tag: &str) -> &'static str {
    tag.parse::<Language>()
        .map(|lang| lang.file_ext())
        .unwrap_or(".txt")
}

/// Upper-cased tag as shown on snippet cards.
pub fn display_label(tag: &str) -> String {
    tag.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag_back() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn htmlmixed_is_an_alias_for_html() {
        assert_eq!("htmlmixed".parse::<Language>(), Ok(Language::Html));
        assert_eq!(Language::Html.mode(), "htmlmixed");
    }

    #[test]
    fn unknown_language_message_names_the_tag() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown language: cobol");
    }

    #[test]
    fn rejects_unknown_and_mixed_case_tags() {
        assert!("rust".parse::<Language>().is_err());
        assert!("Python".parse::<Language>().is_err());
    }

    #[test]
    fn unknown_tags_fall_back_to_default_mode() {
        assert_eq!(editor_mode_for("cpp"), "text/x-c++src");
        assert_eq!(editor_mode_for("brainfuck"), DEFAULT_MODE);
        assert_eq!(editor_mode_for(""), DEFAULT_MODE);
    }

    #[test]
    fn display_label_upper_cases_any_tag() {
        assert_eq!(display_label("python"), "PYTHON");
        assert_eq!(display_label("rust"), "RUST");
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&Language::Cpp).unwrap();
        assert_eq!(json, "\"cpp\"");
    }
}
