//! Paragraph numbering.

use rticles_document::{Document, ParagraphId, ParagraphStore};

use crate::resolve::is_included;

/// 1-based rank among the non-heading, non-omitted siblings.
///
/// Headings and omitted paragraphs have no rank and leave no gap behind them.
pub fn index<S: ParagraphStore>(document: &Document<S>, id: ParagraphId) -> Option<u32> {
    let paragraph = document.paragraph(id)?;
    if paragraph.is_heading() || !is_included(document, id) {
        return None;
    }

    let mut rank = 0;
    for sibling_id in document.store.children_of(paragraph.parent) {
        let Some(sibling) = document.paragraph(sibling_id) else {
            continue;
        };
        if sibling.is_heading() || !is_included(document, sibling_id) {
            continue;
        }
        rank += 1;
        if sibling_id == id {
            return Some(rank);
        }
    }
    None
}

/// The styled chain of ranks from the root down to the paragraph, e.g.
/// `1.2.3`.
///
/// Heading ancestors contribute no number but the chain continues through
/// them; each contributed number is styled with the numbering config at the
/// paragraph's actual depth. `None` for headings, omitted paragraphs (or
/// omitted ancestors), and when `with_index` is off.
pub fn full_index<S: ParagraphStore>(
    document: &Document<S>,
    id: ParagraphId,
    with_index: bool,
) -> Option<String> {
    if !with_index {
        return None;
    }
    let paragraph = document.paragraph(id)?;
    if paragraph.is_heading() {
        return None;
    }

    let mut chain = vec![id];
    let mut cursor = paragraph.parent;
    while let Some(ancestor_id) = cursor {
        chain.push(ancestor_id);
        cursor = document.paragraph(ancestor_id)?.parent;
    }
    chain.reverse();

    let mut numbers = Vec::new();
    for (depth_zero, link) in chain.into_iter().enumerate() {
        let link_paragraph = document.paragraph(link)?;
        if link_paragraph.is_heading() {
            continue;
        }
        let rank = index(document, link)?;
        numbers.push(
            document
                .numbering
                .render(depth_zero as u32 + 1, rank),
        );
    }

    if document.numbering.innermost_only {
        return numbers.pop();
    }
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.join(&document.numbering.separator))
}

/// Find the paragraph whose styled full index equals `reference`.
pub fn paragraph_for_reference<S: ParagraphStore>(
    document: &Document<S>,
    reference: &str,
) -> Option<ParagraphId> {
    document
        .store
        .all_ids()
        .into_iter()
        .find(|id| full_index(document, *id, true).as_deref() == Some(reference))
}
