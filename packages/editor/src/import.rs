//! Nested document import.
//!
//! The authoring form is a sequence whose entries are either raw paragraph
//! text or a sub-sequence of children:
//!
//! ```yaml
//! - Paragraph 1
//! - - Paragraph 1.1
//!   - Paragraph 1.2
//! - Paragraph 2
//! ```
//!
//! A sub-sequence belongs to the paragraph created immediately before it at
//! the same level; an opening sub-sequence has nothing to attach to and fails
//! the whole import.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rticles_document::{Document, ParagraphFields, ParagraphId, ParagraphStore};

use crate::errors::EditorResult;

/// One entry of the nested authoring form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportNode {
    Text(String),
    Children(Vec<ImportNode>),
}

/// A sub-sequence appeared before any sibling paragraph existed to own it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("jump in nesting at: {offending}")]
pub struct NestingError {
    /// The first element of the offending sub-sequence.
    pub offending: String,
}

/// Build a document from YAML in the nested authoring form.
pub fn from_yaml(source: &str) -> EditorResult<Document> {
    let nodes: Vec<ImportNode> = serde_yaml::from_str(source)?;
    Ok(from_nodes(&nodes)?)
}

/// Build a document from JSON in the nested authoring form.
pub fn from_json(source: &str) -> EditorResult<Document> {
    let nodes: Vec<ImportNode> = serde_json::from_str(source)?;
    Ok(from_nodes(&nodes)?)
}

/// Build a fresh document from already-parsed nodes.
pub fn from_nodes(nodes: &[ImportNode]) -> Result<Document, NestingError> {
    let mut document = Document::new();
    import_into(&mut document, nodes)?;
    Ok(document)
}

/// Append the nodes to an existing document at the top level. Directives in
/// the text entries are parsed here, at creation time.
pub fn import_into<S: ParagraphStore>(
    document: &mut Document<S>,
    nodes: &[ImportNode],
) -> Result<(), NestingError> {
    import_level(&mut document.store, None, nodes)
}

fn import_level<S: ParagraphStore>(
    store: &mut S,
    parent: Option<ParagraphId>,
    nodes: &[ImportNode],
) -> Result<(), NestingError> {
    let mut position = store.children_of(parent).len() as u32;
    let mut last_created: Option<ParagraphId> = None;

    for node in nodes {
        match node {
            ImportNode::Text(text) => {
                position += 1;
                last_created = Some(store.create(parent, position, ParagraphFields::parse(text)));
            }
            ImportNode::Children(children) => {
                let owner = last_created.ok_or_else(|| NestingError {
                    offending: describe_first(children),
                })?;
                import_level(store, Some(owner), children)?;
            }
        }
    }
    Ok(())
}

fn describe_first(nodes: &[ImportNode]) -> String {
    match nodes.first() {
        Some(ImportNode::Text(text)) => text.clone(),
        Some(ImportNode::Children(children)) => describe_first(children),
        None => "<empty sequence>".to_string(),
    }
}
