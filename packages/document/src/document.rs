//! The document handle: a paragraph store plus the render-time state.
//!
//! Choice and insertion keys are canonicalized (trimmed, ASCII-lowercased) on
//! both write and read, so `"  Assets "` and `"assets"` address the same
//! entry. The maps stay private to keep that invariant airtight.

use std::collections::HashMap;

use crate::numbering::NumberingConfig;
use crate::paragraph::{Paragraph, ParagraphId};
use crate::store::{MemoryStore, ParagraphStore};

/// One editable document.
///
/// Structural mutation goes through `&mut self`, rendering through `&self`;
/// the borrow checker is the per-document exclusive section.
#[derive(Debug, Clone)]
pub struct Document<S: ParagraphStore = MemoryStore> {
    pub store: S,
    pub numbering: NumberingConfig,
    insertions: HashMap<String, String>,
    choices: HashMap<String, bool>,
}

fn canonical_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

impl Document<MemoryStore> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for Document<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ParagraphStore> Document<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            numbering: NumberingConfig::default(),
            insertions: HashMap::new(),
            choices: HashMap::new(),
        }
    }

    pub fn paragraph(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.store.get(id)
    }

    /// Top-level paragraphs in position order.
    pub fn top_level(&self) -> Vec<ParagraphId> {
        self.store.children_of(None)
    }

    pub fn set_choice(&mut self, key: &str, value: bool) {
        self.choices.insert(canonical_key(key), value);
    }

    /// Whether a choice is set. Absent means false.
    pub fn choice(&self, key: &str) -> bool {
        self.choices
            .get(&canonical_key(key))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_insertion(&mut self, key: &str, value: impl Into<String>) {
        self.insertions.insert(canonical_key(key), value.into());
    }

    pub fn insertion(&self, key: &str) -> Option<&str> {
        self.insertions.get(&canonical_key(key)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_defaults_to_false() {
        let document = Document::new();
        assert!(!document.choice("assets"));
    }

    #[test]
    fn test_choice_keys_are_canonicalized() {
        let mut document = Document::new();
        document.set_choice("  Assets ", true);
        assert!(document.choice("assets"));
        assert!(document.choice("ASSETS"));
    }

    #[test]
    fn test_insertion_keys_are_canonicalized() {
        let mut document = Document::new();
        document.set_insertion("Organisation_Name", "The Pirate Party");
        assert_eq!(
            document.insertion(" organisation_name "),
            Some("The Pirate Party")
        );
        assert!(document.insertion("website").is_none());
    }

    #[test]
    fn test_top_level_uses_store_order() {
        use crate::paragraph::ParagraphFields;

        let mut document = Document::new();
        let b = document.store.create(None, 2, ParagraphFields::text("b"));
        let a = document.store.create(None, 1, ParagraphFields::text("a"));
        assert_eq!(document.top_level(), vec![a, b]);
    }
}
