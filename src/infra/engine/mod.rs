//! External diagram engines.
//!
//! An engine turns a finished diagram description into a visual artifact.

use crate::domain::RenderError;
use async_trait::async_trait;

pub mod mermaid_cli;

pub use mermaid_cli::MermaidCli;

/// Successful render: the description and the SVG produced from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub source: String,
    pub svg: String,
}

#[async_trait]
pub trait DiagramEngine: Send + Sync {
    async fn render(&self, source: &str) -> Result<RenderedDiagram, RenderError>;
}
