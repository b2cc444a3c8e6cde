//! Nested text outline.

use serde::{Deserialize, Serialize};

use rticles_document::{Document, ParagraphId, ParagraphStore};

use crate::index::full_index;
use crate::resolve::resolve_body;

/// One entry of the rendered outline: a paragraph's text, or the children of
/// the paragraph rendered just before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutlineNode {
    Text(String),
    Children(Vec<OutlineNode>),
}

#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Resolve conditionals and insertions. When off, stored bodies pass
    /// through raw and nothing is omitted.
    pub for_display: bool,
    /// Prefix each numbered paragraph with its full index.
    pub with_index: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            for_display: true,
            with_index: true,
        }
    }
}

/// Render the whole document as a nested outline.
pub fn outline<S: ParagraphStore>(
    document: &Document<S>,
    options: &OutlineOptions,
) -> Vec<OutlineNode> {
    outline_level(document, None, options)
}

fn outline_level<S: ParagraphStore>(
    document: &Document<S>,
    parent: Option<ParagraphId>,
    options: &OutlineOptions,
) -> Vec<OutlineNode> {
    let parent_is_list = parent
        .and_then(|id| document.paragraph(id))
        .is_some_and(|paragraph| paragraph.list);

    let mut nodes = Vec::new();
    for id in document.store.children_of(parent) {
        let Some(paragraph) = document.paragraph(id) else {
            continue;
        };

        let text = if options.for_display {
            match resolve_body(document, &paragraph.body) {
                Some(text) => text,
                // Omitted subtree, nothing to descend into.
                None => continue,
            }
        } else {
            paragraph.body.clone()
        };

        let entry = match full_index(document, id, options.with_index) {
            Some(number) => format!("{number} {text}"),
            None => text,
        };
        nodes.push(OutlineNode::Text(entry));

        let children = outline_level(document, Some(id), options);
        if !children.is_empty() {
            nodes.push(OutlineNode::Children(children));
        }
    }

    if parent_is_list && options.for_display {
        apply_list_punctuation(&mut nodes);
    }
    nodes
}

/// Terminal punctuation for a list's direct entries, applied backwards: the
/// last text entry gets `.`, every earlier one `;`. Child sequences are
/// skipped, not recursed into.
fn apply_list_punctuation(nodes: &mut [OutlineNode]) {
    let mut terminal = true;
    for node in nodes.iter_mut().rev() {
        if let OutlineNode::Text(text) = node {
            text.push(if terminal { '.' } else { ';' });
            terminal = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<OutlineNode> {
        values
            .iter()
            .map(|v| OutlineNode::Text(v.to_string()))
            .collect()
    }

    #[test]
    fn test_punctuation_runs_backwards() {
        let mut nodes = texts(&["first rule", "second rule", "third rule"]);
        apply_list_punctuation(&mut nodes);
        assert_eq!(nodes, texts(&["first rule;", "second rule;", "third rule."]));
    }

    #[test]
    fn test_punctuation_skips_child_sequences() {
        let mut nodes = vec![
            OutlineNode::Text("first rule".to_string()),
            OutlineNode::Children(texts(&["detail"])),
            OutlineNode::Text("second rule".to_string()),
        ];
        apply_list_punctuation(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                OutlineNode::Text("first rule;".to_string()),
                OutlineNode::Children(texts(&["detail"])),
                OutlineNode::Text("second rule.".to_string()),
            ]
        );
    }

    #[test]
    fn test_punctuation_on_trailing_child_sequence() {
        let mut nodes = vec![
            OutlineNode::Text("only rule".to_string()),
            OutlineNode::Children(texts(&["detail"])),
        ];
        apply_list_punctuation(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                OutlineNode::Text("only rule.".to_string()),
                OutlineNode::Children(texts(&["detail"])),
            ]
        );
    }
}
