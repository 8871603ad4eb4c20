//! Application layer (use-cases, policies).
//!
//! Rule parsing and the generate-and-render pipeline. Nothing here touches a
//! terminal or the filesystem directly.

pub mod pipeline;
pub mod rules;
