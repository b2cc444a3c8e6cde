//! Structural mutations.
//!
//! Each mutation validates against the document first and only then touches
//! the store; apply cannot fail once validation passes, so sibling positions
//! are never observable in a half-renumbered state. Indent without a
//! preceding sibling and outdent without a parent are no-ops.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use rticles_document::{Document, ParagraphFields, ParagraphId, ParagraphStore};

/// One structural edit. Text carried by the insert variants is raw authoring
/// text; directives are parsed when the paragraph is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// New sibling at the anchor's position; the anchor and everything after
    /// it shift down.
    InsertBefore { anchor: ParagraphId, text: String },

    /// New sibling directly after the anchor.
    InsertAfter { anchor: ParagraphId, text: String },

    /// New last child of `parent`, or a new last top-level paragraph for
    /// `None`.
    AppendChild {
        parent: Option<ParagraphId>,
        text: String,
    },

    /// Move a paragraph to the bottom of its preceding sibling's children.
    Indent { id: ParagraphId },

    /// Move a paragraph up next to its parent; the siblings that followed it
    /// become its children.
    Outdent { id: ParagraphId },

    /// Remove a paragraph and all of its descendants.
    Delete { id: ParagraphId },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("paragraph not found: {0}")]
    ParagraphNotFound(ParagraphId),
}

/// What a mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOutcome {
    /// The id created, moved, or deleted.
    Applied { id: ParagraphId },
    /// The mutation was ineligible and the document is untouched.
    Noop,
}

impl Mutation {
    /// Validate without applying.
    pub fn validate<S: ParagraphStore>(&self, document: &Document<S>) -> Result<(), MutationError> {
        let require = |id: ParagraphId| match document.paragraph(id) {
            Some(_) => Ok(()),
            None => Err(MutationError::ParagraphNotFound(id)),
        };

        match self {
            Mutation::InsertBefore { anchor, .. } | Mutation::InsertAfter { anchor, .. } => {
                require(*anchor)
            }
            Mutation::AppendChild { parent, .. } => match parent {
                Some(parent) => require(*parent),
                None => Ok(()),
            },
            Mutation::Indent { id } | Mutation::Outdent { id } | Mutation::Delete { id } => {
                require(*id)
            }
        }
    }

    /// Validate, then apply to the document.
    pub fn apply<S: ParagraphStore>(
        &self,
        document: &mut Document<S>,
    ) -> Result<MutationOutcome, MutationError> {
        self.validate(document)?;
        debug!(mutation = ?self, "applying mutation");

        let store = &mut document.store;
        match self {
            Mutation::InsertBefore { anchor, text } => insert_beside(store, *anchor, text, 0),
            Mutation::InsertAfter { anchor, text } => insert_beside(store, *anchor, text, 1),
            Mutation::AppendChild { parent, text } => {
                let position = store.children_of(*parent).len() as u32 + 1;
                let id = store.create(*parent, position, ParagraphFields::parse(text));
                Ok(MutationOutcome::Applied { id })
            }
            Mutation::Indent { id } => apply_indent(store, *id),
            Mutation::Outdent { id } => apply_outdent(store, *id),
            Mutation::Delete { id } => apply_delete(store, *id),
        }
    }
}

fn fetch_slot<S: ParagraphStore>(
    store: &S,
    id: ParagraphId,
) -> Result<(Option<ParagraphId>, u32), MutationError> {
    let paragraph = store
        .get(id)
        .ok_or(MutationError::ParagraphNotFound(id))?;
    Ok((paragraph.parent, paragraph.position))
}

fn insert_beside<S: ParagraphStore>(
    store: &mut S,
    anchor: ParagraphId,
    text: &str,
    offset: u32,
) -> Result<MutationOutcome, MutationError> {
    let (parent, anchor_position) = fetch_slot(store, anchor)?;
    let position = anchor_position + offset;

    for sibling_id in store.children_of(parent) {
        if let Some(sibling) = store.get_mut(sibling_id) {
            if sibling.position >= position {
                sibling.position += 1;
            }
        }
    }
    let id = store.create(parent, position, ParagraphFields::parse(text));
    Ok(MutationOutcome::Applied { id })
}

fn apply_indent<S: ParagraphStore>(
    store: &mut S,
    id: ParagraphId,
) -> Result<MutationOutcome, MutationError> {
    let (parent, position) = fetch_slot(store, id)?;

    let siblings = store.children_of(parent);
    let preceding = match position
        .checked_sub(2)
        .and_then(|idx| siblings.get(idx as usize))
    {
        Some(preceding) => *preceding,
        None => return Ok(MutationOutcome::Noop),
    };

    let new_position = store.children_of(Some(preceding)).len() as u32 + 1;
    store.update_position(id, Some(preceding), new_position);
    renumber(store, parent);
    Ok(MutationOutcome::Applied { id })
}

fn apply_outdent<S: ParagraphStore>(
    store: &mut S,
    id: ParagraphId,
) -> Result<MutationOutcome, MutationError> {
    let (old_parent, position) = fetch_slot(store, id)?;
    let old_parent = match old_parent {
        Some(old_parent) => old_parent,
        None => return Ok(MutationOutcome::Noop),
    };
    let (grandparent, parent_position) = fetch_slot(store, old_parent)?;

    // Former successors follow the paragraph down a level.
    let adopted: Vec<ParagraphId> = store
        .children_of(Some(old_parent))
        .into_iter()
        .filter(|sid| store.get(*sid).is_some_and(|p| p.position > position))
        .collect();

    // Open the slot directly after the old parent.
    for sibling_id in store.children_of(grandparent) {
        if let Some(sibling) = store.get_mut(sibling_id) {
            if sibling.position > parent_position {
                sibling.position += 1;
            }
        }
    }
    store.update_position(id, grandparent, parent_position + 1);

    let mut next_position = store.children_of(Some(id)).len() as u32;
    for child in adopted {
        next_position += 1;
        store.update_position(child, Some(id), next_position);
    }

    renumber(store, Some(old_parent));
    Ok(MutationOutcome::Applied { id })
}

fn apply_delete<S: ParagraphStore>(
    store: &mut S,
    id: ParagraphId,
) -> Result<MutationOutcome, MutationError> {
    let (parent, _) = fetch_slot(store, id)?;
    store.delete_subtree(id);
    renumber(store, parent);
    Ok(MutationOutcome::Applied { id })
}

/// Rewrite a sibling scope's positions as contiguous 1..=N.
fn renumber<S: ParagraphStore>(store: &mut S, parent: Option<ParagraphId>) {
    for (index, child_id) in store.children_of(parent).into_iter().enumerate() {
        if let Some(child) = store.get_mut(child_id) {
            child.position = index as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::InsertAfter {
            anchor: ParagraphId(3),
            text: "New paragraph.".to_string(),
        };

        let json = serde_json::to_string(&mutation).expect("serialize");
        let deserialized: Mutation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_unknown_anchor() {
        let document = Document::new();
        let mutation = Mutation::InsertBefore {
            anchor: ParagraphId(99),
            text: "text".to_string(),
        };

        assert_eq!(
            mutation.validate(&document),
            Err(MutationError::ParagraphNotFound(ParagraphId(99)))
        );
    }

    #[test]
    fn test_failed_mutation_leaves_document_untouched() {
        let mut document = Document::new();
        let first = Mutation::AppendChild {
            parent: None,
            text: "one".to_string(),
        }
        .apply(&mut document)
        .expect("append");

        let bad = Mutation::Indent {
            id: ParagraphId(99),
        };
        assert!(bad.apply(&mut document).is_err());

        match first {
            MutationOutcome::Applied { id } => {
                let paragraph = document.paragraph(id).expect("kept");
                assert_eq!(paragraph.position, 1);
            }
            MutationOutcome::Noop => panic!("append must apply"),
        }
    }
}
