//! Business-rule parsing.
//!
//! Turns sentences like "A Player has name, score. A Player must many Enemies."
//! into an [`ErModel`](crate::domain::ErModel).

pub mod clause;
pub mod parser;
pub mod text;

pub use clause::{AttributeClause, Clause, DEFAULT_VERB, RelationshipClause, classify};
pub use parser::{apply_clause, parse_rules};
pub use text::{normalize, sanitize_attribute, sanitize_identifier, singularize};
