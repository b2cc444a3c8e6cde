//! # Rticles Parser
//!
//! Parses the `#rticles#` directive grammar embedded in paragraph text.
//!
//! Two layers of tokens exist:
//!
//! - **Structural directives** (`directives` module) are consumed once, when a
//!   paragraph is created: name, topic, continuation, heading level, list flag.
//!   Whatever remains after stripping them is the stored paragraph body.
//! - **Inline tokens** (`inline` module) stay in the stored body and are only
//!   resolved at render time: a single conditional-clause prefix
//!   (`#rticles#true#key ` / `#rticles#false#key `) and insertion tokens
//!   (`#rticles#key`) anywhere in the text.

pub mod directives;
pub mod inline;

pub use directives::{parse_directives, ParsedParagraph, SIGIL};
pub use inline::{conditional_clause, split_insertions, BodySegment, ConditionalClause};
