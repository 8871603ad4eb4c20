pub mod application;
pub mod domain;
pub mod infra;

pub use application::pipeline::{OutputSurface, Pipeline, RenderOutcome, describe};
pub use application::rules::parse_rules;
pub use domain::{Cardinality, Entity, ErModel, Obligation, Relationship};
pub use infra::diagram::to_mermaid;
