//! # Rticles Editor
//!
//! Structural editing of paragraph trees.
//!
//! Two entry points:
//!
//! - **Import** (`import` module): build a document from a nested sequence of
//!   strings (the YAML/JSON authoring form). A sub-sequence attaches to the
//!   paragraph created just before it; a sub-sequence with no preceding
//!   paragraph is a fatal nesting error.
//! - **Mutations** (`mutations` module): insert before/after an anchor,
//!   append, indent, outdent, delete. Every mutation validates against the
//!   document before touching the store, so a failed mutation leaves no
//!   partial renumbering behind. Indent and outdent on ineligible paragraphs
//!   are no-ops, not errors.

pub mod errors;
pub mod import;
pub mod mutations;

pub use errors::{EditorError, EditorResult};
pub use import::{from_json, from_nodes, from_yaml, import_into, ImportNode, NestingError};
pub use mutations::{Mutation, MutationError, MutationOutcome};
