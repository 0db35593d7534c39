use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNTITLED: &str = "Untitled";

/// A saved piece of code plus its metadata.
///
/// Field names match the persisted JSON records exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub lang: String,
    pub code: String,
    pub private: bool,
    pub created: DateTime<Utc>,
}

impl Snippet {
    pub fn new(title: &str, lang: &str, code: String, private: bool) -> Self {
        let title = title.trim();
        Self {
            id: generate_id(),
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            },
            lang: lang.to_string(),
            code,
            private,
            created: Utc::now(),
        }
    }

    pub fn is_public(&self) -> bool {
        !self.private
    }
}

/// Opaque identifier for a new snippet. Private snippets rely on it being
/// unguessable.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
