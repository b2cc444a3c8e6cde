//! # Rticles Evaluator
//!
//! Turns a stored paragraph tree into rendered content:
//!
//! - `resolve` decides conditional inclusion and substitutes insertion
//!   values into a body.
//! - `index` computes sibling ranks and styled full indexes, and resolves a
//!   styled reference back to a paragraph.
//! - `topics` maps topic names to the numbers of the paragraphs carrying
//!   them, with optional run consolidation.
//! - `outline` renders the nested text outline, applying list punctuation.
//!
//! Everything here is a pure read over `&Document`; rendering never fails,
//! it only logs when an insertion value is missing.

pub mod index;
pub mod outline;
pub mod resolve;
pub mod topics;

pub use index::{full_index, index, paragraph_for_reference};
pub use outline::{outline, OutlineNode, OutlineOptions};
pub use resolve::{is_included, resolve_body, resolve_paragraph};
pub use topics::{paragraph_numbers_for_topic, paragraph_numbers_for_topics};
