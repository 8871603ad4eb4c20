//! Diagram description output.
//!
//! Serializes an [`ErModel`] into text for an external diagram engine.

pub mod renderers;

pub use renderers::DiagramRenderer;
pub use renderers::mermaid::{ER_HEADER, MermaidRenderer, PLACEHOLDER_FIELD, connector};

use crate::domain::ErModel;

/// Mermaid description of `model`.
pub fn to_mermaid(model: &ErModel) -> String {
    MermaidRenderer
        .render(model)
        .expect("writing Mermaid into a String cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelBuilder;

    #[test]
    fn to_mermaid_always_starts_with_header() {
        assert_eq!(to_mermaid(&ErModel::default()), format!("{ER_HEADER}\n"));

        let mut builder = ModelBuilder::new();
        builder.declare_attributes("Player", ["name"]);
        let model = builder.build();
        assert_eq!(to_mermaid(&model), MermaidRenderer.render(&model).unwrap());
        assert!(to_mermaid(&model).starts_with("erDiagram\n  Player {\n"));
    }
}
