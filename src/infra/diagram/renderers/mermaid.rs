use crate::application::rules::sanitize_attribute;
use crate::domain::{Cardinality, DiagramError, ErModel, Obligation};
use crate::infra::diagram::renderers::DiagramRenderer;
use std::fmt::Write;

/// Header token of a Mermaid ER diagram.
pub const ER_HEADER: &str = "erDiagram";

/// Field emitted for an entity without attributes.
pub const PLACEHOLDER_FIELD: &str = "placeholder";

const FIELD_TYPE: &str = "string";

pub struct MermaidRenderer;

impl DiagramRenderer for MermaidRenderer {
    fn render(&self, model: &ErModel) -> Result<String, DiagramError> {
        render_er_mermaid(model)
    }
}

/// Connector for a cardinality/obligation pair. "can" marks the source side optional.
pub fn connector(cardinality: Cardinality, obligation: Obligation) -> &'static str {
    match (cardinality, obligation) {
        (Cardinality::OneToOne, Obligation::Must) => "||--||",
        (Cardinality::OneToOne, Obligation::Can) => "o|--||",
        (Cardinality::OneToMany, Obligation::Must) => "||--o{",
        (Cardinality::OneToMany, Obligation::Can) => "o|--o{",
    }
}

fn render_er_mermaid(model: &ErModel) -> Result<String, DiagramError> {
    let mut out = String::new();
    writeln!(&mut out, "{ER_HEADER}").map_err(render_err)?;

    for entity in model.entities() {
        writeln!(&mut out, "  {} {{", entity.name()).map_err(render_err)?;
        if entity.attribute_count() == 0 {
            writeln!(&mut out, "    {FIELD_TYPE} {PLACEHOLDER_FIELD}").map_err(render_err)?;
        }
        for attr in entity.attributes() {
            writeln!(&mut out, "    {FIELD_TYPE} {}", sanitize_attribute(attr))
                .map_err(render_err)?;
        }
        writeln!(&mut out, "  }}").map_err(render_err)?;
    }

    for rel in model.relationships() {
        writeln!(
            &mut out,
            "  {} {} {} : {}",
            rel.source(),
            connector(rel.cardinality(), rel.obligation()),
            rel.target(),
            relationship_label(rel.verb())
        )
        .map_err(render_err)?;
    }

    Ok(out)
}

fn render_err(e: std::fmt::Error) -> DiagramError {
    DiagramError::Render(e.to_string())
}

// Bare labels must be single words; anything else goes in quotes.
fn relationship_label(verb: &str) -> String {
    let bare = !verb.is_empty()
        && verb
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        verb.to_string()
    } else {
        format!("\"{}\"", escape_mermaid(verb))
    }
}

fn escape_mermaid(s: &str) -> String {
    s.replace('"', "#quot;")
}
