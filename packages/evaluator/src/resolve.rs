//! Conditional inclusion and insertion substitution.

use tracing::warn;

use rticles_document::{Document, ParagraphId, ParagraphStore};
use rticles_parser::{conditional_clause, split_insertions, BodySegment};

/// Whether a paragraph survives its conditional clause, if it has one.
///
/// `#rticles#true#key` paragraphs need the choice set; `#rticles#false#key`
/// paragraphs are the default branch, shown unless the choice is set. An
/// omitted paragraph takes its whole subtree with it; callers stop descending.
pub fn is_included<S: ParagraphStore>(document: &Document<S>, id: ParagraphId) -> bool {
    match document.paragraph(id) {
        Some(paragraph) => match conditional_clause(&paragraph.body) {
            Some(clause) => document.choice(clause.key) == clause.requires_choice,
            None => true,
        },
        None => false,
    }
}

/// Resolve a body for display. `None` means the paragraph is omitted.
///
/// Insertion tokens are replaced with their stored values verbatim, newlines
/// included. A token with no stored value renders as a visible `[key]`
/// marker; the render still completes.
pub fn resolve_body<S: ParagraphStore>(document: &Document<S>, body: &str) -> Option<String> {
    let text = match conditional_clause(body) {
        Some(clause) => {
            if document.choice(clause.key) != clause.requires_choice {
                return None;
            }
            clause.rest
        }
        None => body,
    };

    let mut resolved = String::new();
    for segment in split_insertions(text) {
        match segment {
            BodySegment::Literal(literal) => resolved.push_str(literal),
            BodySegment::Insertion(key) => match document.insertion(key) {
                Some(value) => resolved.push_str(value),
                None => {
                    warn!(key, "no value for insertion token");
                    resolved.push('[');
                    resolved.push_str(key);
                    resolved.push(']');
                }
            },
        }
    }
    Some(resolved)
}

/// Resolve a paragraph's stored body.
pub fn resolve_paragraph<S: ParagraphStore>(
    document: &Document<S>,
    id: ParagraphId,
) -> Option<String> {
    let paragraph = document.paragraph(id)?;
    resolve_body(document, &paragraph.body)
}
