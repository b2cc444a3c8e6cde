//! Topic lookup.
//!
//! Maps topic names to the full indexes of the paragraphs carrying them.
//! Paragraphs are visited by bare stored position, not a tree walk, so topic
//! paragraphs are expected to live at a single level of the tree.

use rticles_document::{Document, ParagraphStore};

use crate::index::full_index;

/// Numbers of the included paragraphs tagged with any of the topics.
pub fn paragraph_numbers_for_topics<S: ParagraphStore>(
    document: &Document<S>,
    topics: &[&str],
    consolidate: bool,
) -> String {
    let mut numbers = Vec::new();
    for id in document.store.all_ids() {
        let Some(paragraph) = document.paragraph(id) else {
            continue;
        };
        let Some(topic) = paragraph.topic.as_deref() else {
            continue;
        };
        if !topics.contains(&topic) {
            continue;
        }
        if let Some(number) = full_index(document, id, true) {
            numbers.push(number);
        }
    }

    if consolidate {
        consolidate_numbers(&numbers)
    } else {
        numbers.join(", ")
    }
}

/// Single-topic convenience form.
pub fn paragraph_numbers_for_topic<S: ParagraphStore>(
    document: &Document<S>,
    topic: &str,
    consolidate: bool,
) -> String {
    paragraph_numbers_for_topics(document, &[topic], consolidate)
}

/// Collapse runs of adjacent numbers: `2, 3, 5` becomes `2–3, 5`.
///
/// Adjacency compares the leading integer components, so `2.4` and `3.1`
/// count as adjacent. Input order is preserved.
fn consolidate_numbers(numbers: &[String]) -> String {
    let mut parts = Vec::new();
    let mut start = 0;
    while start < numbers.len() {
        let mut end = start;
        while end + 1 < numbers.len() && is_adjacent(&numbers[end], &numbers[end + 1]) {
            end += 1;
        }
        if end > start {
            parts.push(format!("{}–{}", numbers[start], numbers[end]));
        } else {
            parts.push(numbers[start].clone());
        }
        start = end + 1;
    }
    parts.join(", ")
}

fn is_adjacent(a: &str, b: &str) -> bool {
    match (leading_int(a), leading_int(b)) {
        (Some(a), Some(b)) => b == a + 1,
        _ => false,
    }
}

fn leading_int(number: &str) -> Option<u32> {
    let digits: String = number
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
