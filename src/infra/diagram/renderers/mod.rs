use crate::domain::{DiagramError, ErModel};

pub mod mermaid;

/// Renderer trait.
pub trait DiagramRenderer {
    fn render(&self, model: &ErModel) -> Result<String, DiagramError>;
}
