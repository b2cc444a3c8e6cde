//! Paragraph storage.
//!
//! `ParagraphStore` is the seam between the document model and whatever holds
//! the paragraphs. The editor and renderers only ever talk to this trait, so
//! a persistent backing can be dropped in without touching them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::paragraph::{Paragraph, ParagraphFields, ParagraphId};

/// Backing storage for one document's paragraph tree.
///
/// `children_of` must return ids ordered by position; `all_ids` must return
/// every paragraph ordered by `(position, id)` regardless of parent.
pub trait ParagraphStore {
    /// Insert a new paragraph at the given slot and return its id. The caller
    /// is responsible for keeping sibling positions contiguous.
    fn create(
        &mut self,
        parent: Option<ParagraphId>,
        position: u32,
        fields: ParagraphFields,
    ) -> ParagraphId;

    fn get(&self, id: ParagraphId) -> Option<&Paragraph>;

    fn get_mut(&mut self, id: ParagraphId) -> Option<&mut Paragraph>;

    /// Direct children of `parent` (or the top level for `None`), ordered by
    /// position.
    fn children_of(&self, parent: Option<ParagraphId>) -> Vec<ParagraphId>;

    /// Remove a paragraph and every descendant. Sibling renumbering is the
    /// caller's job.
    fn delete_subtree(&mut self, id: ParagraphId);

    /// Every paragraph in the store, ordered by `(position, id)`.
    fn all_ids(&self) -> Vec<ParagraphId>;

    /// Move a paragraph to a new slot.
    fn update_position(
        &mut self,
        id: ParagraphId,
        new_parent: Option<ParagraphId>,
        new_position: u32,
    ) {
        if let Some(paragraph) = self.get_mut(id) {
            paragraph.parent = new_parent;
            paragraph.position = new_position;
        }
    }
}

/// The default backing: a plain in-memory arena.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    paragraphs: HashMap<ParagraphId, Paragraph>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl ParagraphStore for MemoryStore {
    fn create(
        &mut self,
        parent: Option<ParagraphId>,
        position: u32,
        fields: ParagraphFields,
    ) -> ParagraphId {
        self.next_id += 1;
        let id = ParagraphId(self.next_id);
        self.paragraphs.insert(
            id,
            Paragraph {
                id,
                parent,
                position,
                body: fields.body,
                name: fields.name,
                topic: fields.topic,
                heading: fields.heading,
                continuation: fields.continuation,
                list: fields.list,
            },
        );
        id
    }

    fn get(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.paragraphs.get(&id)
    }

    fn get_mut(&mut self, id: ParagraphId) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(&id)
    }

    fn children_of(&self, parent: Option<ParagraphId>) -> Vec<ParagraphId> {
        let mut children: Vec<&Paragraph> = self
            .paragraphs
            .values()
            .filter(|p| p.parent == parent)
            .collect();
        children.sort_by_key(|p| p.position);
        children.iter().map(|p| p.id).collect()
    }

    fn delete_subtree(&mut self, id: ParagraphId) {
        for child in self.children_of(Some(id)) {
            self.delete_subtree(child);
        }
        self.paragraphs.remove(&id);
    }

    fn all_ids(&self) -> Vec<ParagraphId> {
        let mut ids: Vec<&Paragraph> = self.paragraphs.values().collect();
        ids.sort_by_key(|p| (p.position, p.id));
        ids.iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(body: &str) -> ParagraphFields {
        ParagraphFields::text(body)
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let mut store = MemoryStore::new();
        let a = store.create(None, 1, text("a"));
        let b = store.create(None, 2, text("b"));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_children_ordered_by_position() {
        let mut store = MemoryStore::new();
        let second = store.create(None, 2, text("second"));
        let first = store.create(None, 1, text("first"));
        assert_eq!(store.children_of(None), vec![first, second]);
    }

    #[test]
    fn test_children_scoped_to_parent() {
        let mut store = MemoryStore::new();
        let top = store.create(None, 1, text("top"));
        let child = store.create(Some(top), 1, text("child"));
        store.create(None, 2, text("other top"));

        assert_eq!(store.children_of(Some(top)), vec![child]);
        assert_eq!(store.children_of(None).len(), 2);
    }

    #[test]
    fn test_delete_subtree_removes_descendants() {
        let mut store = MemoryStore::new();
        let top = store.create(None, 1, text("top"));
        let child = store.create(Some(top), 1, text("child"));
        let grandchild = store.create(Some(child), 1, text("grandchild"));
        let keeper = store.create(None, 2, text("keeper"));

        store.delete_subtree(top);

        assert!(store.get(top).is_none());
        assert!(store.get(child).is_none());
        assert!(store.get(grandchild).is_none());
        assert!(store.get(keeper).is_some());
    }

    #[test]
    fn test_update_position_moves_paragraph() {
        let mut store = MemoryStore::new();
        let top = store.create(None, 1, text("top"));
        let loose = store.create(None, 2, text("loose"));

        store.update_position(loose, Some(top), 1);

        assert_eq!(store.children_of(Some(top)), vec![loose]);
        assert_eq!(store.children_of(None), vec![top]);
    }

    #[test]
    fn test_all_ids_ordered_by_position_then_id() {
        let mut store = MemoryStore::new();
        let top = store.create(None, 1, text("top"));
        let child = store.create(Some(top), 1, text("child"));
        let second = store.create(None, 2, text("second"));

        // Both `top` and `child` sit at position 1; the earlier id wins.
        assert_eq!(store.all_ids(), vec![top, child, second]);
    }
}
