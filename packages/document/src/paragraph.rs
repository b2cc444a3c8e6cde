//! Paragraph tree nodes.

use serde::{Deserialize, Serialize};

/// Store-assigned paragraph identifier, dense per document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ParagraphId(pub u64);

impl std::fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the document tree.
///
/// `position` is 1-based and contiguous within a sibling scope; every
/// structural operation restores that invariant before returning. `body` is
/// the stored text with structural directives already stripped; it may still
/// carry a conditional-clause prefix and insertion tokens for render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: ParagraphId,
    pub parent: Option<ParagraphId>,
    pub position: u32,
    pub body: String,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub heading: Option<u32>,
    pub continuation: bool,
    pub list: bool,
}

impl Paragraph {
    pub fn is_heading(&self) -> bool {
        self.heading.is_some()
    }
}

/// The creation-time fields of a paragraph, before the store assigns an id
/// and a place in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphFields {
    pub body: String,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub heading: Option<u32>,
    pub continuation: bool,
    pub list: bool,
}

impl ParagraphFields {
    /// Parse raw text: structural directives are consumed here, once; the
    /// remainder becomes the stored body.
    pub fn parse(text: &str) -> Self {
        rticles_parser::parse_directives(text).into()
    }

    /// Plain body text with no directives.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }
}

impl From<rticles_parser::ParsedParagraph> for ParagraphFields {
    fn from(parsed: rticles_parser::ParsedParagraph) -> Self {
        Self {
            body: parsed.body,
            name: parsed.name,
            topic: parsed.topic,
            heading: parsed.heading,
            continuation: parsed.continuation,
            list: parsed.list,
        }
    }
}
