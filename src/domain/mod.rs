//! Domain types for erdraft.
//! Defines the entity-relationship model and the error types shared by every layer.

pub mod error;
pub mod model;

pub use error::*;
pub use model::*;
