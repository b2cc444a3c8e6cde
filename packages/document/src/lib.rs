//! # Rticles Document Model
//!
//! Shared data model for the rticles workspace:
//!
//! - **Paragraphs** (`paragraph` module): the tree nodes. Each paragraph
//!   carries a 1-based `position` within its sibling scope; positions are
//!   always contiguous `{1..N}`.
//! - **Stores** (`store` module): the `ParagraphStore` trait and the default
//!   in-memory backing. One store instance holds one document's paragraphs.
//! - **Documents** (`document` module): a store plus the choice and insertion
//!   values that drive rendering, and the numbering configuration.
//! - **Numbering** (`numbering` module): per-depth numeral styles and format
//!   templates.
//!
//! Structural edits live in `rticles-editor`; rendering lives in
//! `rticles-evaluator` and `rticles-compiler-html`. This crate only defines
//! the data they share.

pub mod document;
pub mod numbering;
pub mod paragraph;
pub mod store;

pub use document::Document;
pub use numbering::{LevelConfig, NumberingConfig, NumberingStyle};
pub use paragraph::{Paragraph, ParagraphFields, ParagraphId};
pub use store::{MemoryStore, ParagraphStore};
