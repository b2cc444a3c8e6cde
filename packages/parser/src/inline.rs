//! Inline tokens resolved at render time.
//!
//! A stored body may open with exactly one conditional-clause prefix and may
//! carry insertion tokens anywhere. This module only recognizes the tokens;
//! deciding inclusion and substituting values happens in the evaluator.

use serde::{Deserialize, Serialize};

use crate::SIGIL;

/// A conditional-clause prefix at the very start of a body.
///
/// `requires_choice` is true for `#rticles#true#key` (shown only when the
/// choice is set) and false for `#rticles#false#key` (the default branch,
/// shown unless the choice is set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalClause<'a> {
    pub key: &'a str,
    pub requires_choice: bool,
    /// Body text after the clause prefix.
    pub rest: &'a str,
}

/// Recognize a conditional-clause prefix, if any.
pub fn conditional_clause(body: &str) -> Option<ConditionalClause<'_>> {
    let after_sigil = body.strip_prefix(SIGIL)?;

    let (requires_choice, after_polarity) = if let Some(rest) = after_sigil.strip_prefix("true#") {
        (true, rest)
    } else if let Some(rest) = after_sigil.strip_prefix("false#") {
        (false, rest)
    } else {
        return None;
    };

    let (key, rest) = take_key(after_polarity)?;
    let rest = rest.strip_prefix(' ')?;
    Some(ConditionalClause {
        key,
        requires_choice,
        rest,
    })
}

/// A piece of body text: either literal text or an insertion token's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySegment<'a> {
    Literal(&'a str),
    Insertion(&'a str),
}

/// Split a body into literal runs and insertion tokens.
///
/// An insertion token is the sigil followed by `[A-Za-z0-9_]+`; it ends at the
/// first non-key character and consumes no trailing space. A key followed by
/// another `#` is not an insertion, so directive-shaped text like
/// `#rticles#true#key` stays literal.
pub fn split_insertions(text: &str) -> Vec<BodySegment<'_>> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find(SIGIL) {
        let after_sigil = &remaining[start + SIGIL.len()..];
        match take_key(after_sigil) {
            Some((key, rest)) if !rest.starts_with('#') => {
                if start > 0 {
                    segments.push(BodySegment::Literal(&remaining[..start]));
                }
                segments.push(BodySegment::Insertion(key));
                remaining = rest;
            }
            // A bare sigil, or a key running into another `#`, is literal.
            _ => {
                let literal_end = start + SIGIL.len();
                segments.push(BodySegment::Literal(&remaining[..literal_end]));
                remaining = &remaining[literal_end..];
            }
        }
    }

    if !remaining.is_empty() {
        segments.push(BodySegment::Literal(remaining));
    }
    segments
}

/// Choice/insertion keys: `[A-Za-z0-9_]+`.
fn take_key(input: &str) -> Option<(&str, &str)> {
    let len = input
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count();
    if len == 0 {
        None
    } else {
        Some(input.split_at(len))
    }
}
