//! # Storage Layer
//!
//! Snippets live under a single key of a local key-value store, as one JSON
//! array ordered most-recent-first. The [`KeyValueStore`] trait is the raw
//! "how" (filesystem or memory); [`SnippetStore`] is the "what" (load, add,
//! lookup, public listing).
//!
//! ## Implementations
//!
//! - [`fs::FileKv`]: one JSON file per key under a root directory
//! - [`memory::MemoryKv`]: in-memory map for testing
//!
//! ## Fail-soft loading
//!
//! [`SnippetStore::load`] never fails. A missing key, an unreadable file, or
//! content that doesn't parse all read as an empty collection, so a corrupted
//! store degrades to "no snippets" instead of blocking every command.
//!
//! ## Single writer
//!
//! [`SnippetStore::add`] is a plain read-modify-write. Two processes adding at
//! the same time can lose one of the records.

use crate::error::Result;
use crate::model::Snippet;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Storage key holding the snippet collection.
pub const SNIPPET_KEY: &str = "snippets_v2";

/// Abstract interface for a string key-value store.
pub trait KeyValueStore {
    /// Read a value. Returns Ok(None) if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a value in one shot.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub struct SnippetStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SnippetStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: SNIPPET_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// The persisted collection, most-recent-first. Empty on any failure.
    pub fn load(&self) -> Vec<Snippet> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read snippet store");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Snippet>>>(&raw) {
            Ok(snippets) => snippets.unwrap_or_default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "snippet store is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the whole collection.
    pub fn save(&self, snippets: &[Snippet]) -> Result<()> {
        let content = serde_json::to_string(snippets)?;
        self.backend.set(&self.key, &content)?;
        debug!(key = %self.key, count = snippets.len(), "saved snippets");
        Ok(())
    }

    /// Prepend a snippet and persist. Returns the snippet unchanged.
    pub fn add(&self, snippet: Snippet) -> Result<Snippet> {
        let mut snippets = self.load();
        snippets.insert(0, snippet.clone());
        self.save(&snippets)?;
        Ok(snippet)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Snippet> {
        self.load().into_iter().find(|s| s.id == id)
    }

    pub fn list_public(&self) -> Vec<Snippet> {
        self.load().into_iter().filter(Snippet::is_public).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryKv;
    use super::*;

    fn snippet(title: &str, private: bool) -> Snippet {
        Snippet::new(title, "python", format!("print('{}')", title), private)
    }

    #[test]
    fn empty_store_loads_empty() {
        let store = SnippetStore::new(MemoryKv::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_prepends_most_recent_first() {
        let store = SnippetStore::new(MemoryKv::new());
        let a = store.add(snippet("A", false)).unwrap();
        let b = store.add(snippet("B", false)).unwrap();
        let c = store.add(snippet("C", true)).unwrap();

        let ids: Vec<_> = store.load().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[test]
    fn add_returns_snippet_unchanged() {
        let store = SnippetStore::new(MemoryKv::new());
        let snip = snippet("A", true);
        let returned = store.add(snip.clone()).unwrap();
        assert_eq!(returned, snip);
    }

    #[test]
    fn round_trips_all_fields() {
        let store = SnippetStore::new(MemoryKv::new());
        let snip = store.add(snippet("A", true)).unwrap();
        assert_eq!(store.load(), vec![snip]);
    }

    #[test]
    fn find_by_id_includes_private() {
        let store = SnippetStore::new(MemoryKv::new());
        let private = store.add(snippet("secret", true)).unwrap();
        store.add(snippet("open", false)).unwrap();

        assert_eq!(store.find_by_id(&private.id), Some(private));
        assert_eq!(store.find_by_id("nope"), None);
    }

    #[test]
    fn list_public_excludes_private_and_keeps_order() {
        let store = SnippetStore::new(MemoryKv::new());
        let a = store.add(snippet("A", false)).unwrap();
        store.add(snippet("B", true)).unwrap();
        let c = store.add(snippet("C", false)).unwrap();

        let public = store.list_public();
        assert_eq!(public, vec![c, a]);
        assert!(public.iter().all(|s| !s.private));
    }

    #[test]
    fn corrupt_content_loads_empty() {
        let kv = MemoryKv::new();
        kv.seed(SNIPPET_KEY, "this is { not json");
        let store = SnippetStore::new(kv);
        assert!(store.load().is_empty());
        assert!(store.list_public().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let kv = MemoryKv::new();
        kv.seed(SNIPPET_KEY, r#"{"id": "x"}"#);
        let store = SnippetStore::new(kv);
        assert!(store.load().is_empty());
    }

    #[test]
    fn json_null_loads_empty() {
        let kv = MemoryKv::new();
        kv.seed(SNIPPET_KEY, "null");
        let store = SnippetStore::new(kv);
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_over_corrupt_content_starts_fresh() {
        let kv = MemoryKv::new();
        kv.seed(SNIPPET_KEY, "garbage");
        let store = SnippetStore::new(kv);
        let snip = store.add(snippet("A", false)).unwrap();
        assert_eq!(store.load(), vec![snip]);
    }

    #[test]
    fn write_errors_propagate_from_add() {
        let kv = MemoryKv::new();
        kv.set_simulate_write_error(true);
        let store = SnippetStore::new(kv);
        assert!(store.add(snippet("A", false)).is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn custom_key_is_isolated() {
        let store = SnippetStore::new(MemoryKv::new()).with_key("other");
        store.add(snippet("A", false)).unwrap();
        assert_eq!(store.key(), "other");
        assert!(store.backend().get(SNIPPET_KEY).unwrap().is_none());
    }
}
