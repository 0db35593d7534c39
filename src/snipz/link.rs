//! Direct links: `<origin><path>#s-<id>`.
//!
//! The identifier only ever lives in the address fragment, so a link can be
//! resolved entirely locally.

pub const LINK_PREFIX: &str = "#s-";

/// The navigational address of the page: origin, path and fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub origin: String,
    pub path: String,
    /// Includes the leading `#`, or is empty.
    pub fragment: String,
}

impl Location {
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
            fragment: String::new(),
        }
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    /// Splits a URL into origin, path and fragment.
    ///
    /// Anything without a `scheme://` part is treated as origin-less; a bare
    /// fragment like `#s-abc` parses into a location with only a fragment.
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.find('#') {
            Some(pos) => (&url[..pos], url[pos..].to_string()),
            None => (url, String::new()),
        };

        let (origin, path) = match rest.find("://") {
            Some(scheme_end) => {
                let after_scheme = scheme_end + 3;
                match rest[after_scheme..].find('/') {
                    Some(slash) => rest.split_at(after_scheme + slash),
                    None => (rest, ""),
                }
            }
            None => ("", rest),
        };

        let path = if path.is_empty() && !origin.is_empty() {
            "/"
        } else {
            path
        };

        Self {
            origin: origin.to_string(),
            path: path.to_string(),
            fragment,
        }
    }

    /// Origin plus path, without fragment.
    pub fn base(&self) -> String {
        format!("{}{}", self.origin, self.path)
    }

    pub fn link_to(&self, id: &str) -> String {
        format!("{}{}", self.base(), fragment_for(id))
    }

    /// Identifier carried by the fragment, if it is a direct link.
    pub fn snippet_id(&self) -> Option<&str> {
        self.fragment.strip_prefix(LINK_PREFIX)
    }
}

pub fn fragment_for(id: &str) -> String {
    format!("{}{}", LINK_PREFIX, id)
}
