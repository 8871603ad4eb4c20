//! CLI infrastructure for erdraft.

pub mod input;
