//! Generate-and-render pipeline.
//!
//! Parsing and serialization are synchronous; the engine call is the only
//! suspension point. The shared [`OutputSurface`] is updated only before the
//! engine call (raw text, cleared diagram) and after it completes.

use crate::application::rules::parse_rules;
use crate::domain::RenderError;
use crate::infra::diagram::to_mermaid;
use crate::infra::engine::{DiagramEngine, RenderedDiagram};
use parking_lot::Mutex;
use std::sync::Arc;

/// What the caller displays: the raw description, the rendered SVG, and the
/// alert raised by the last failed render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSurface {
    pub raw: Option<String>,
    pub diagram: Option<String>,
    pub alert: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(RenderedDiagram),
    Failed { source: String, error: RenderError },
    /// A newer run started before this one's render finished.
    Superseded,
}

impl RenderOutcome {
    /// User-facing alert text for a failed render.
    pub fn alert(&self) -> Option<String> {
        match self {
            RenderOutcome::Failed { error, .. } => Some(alert_message(error)),
            _ => None,
        }
    }
}

pub struct Pipeline<E> {
    engine: Arc<E>,
    shared: Mutex<SharedOutput>,
}

/// Surface plus the ticket of the latest run; only that run may write.
#[derive(Default)]
struct SharedOutput {
    surface: OutputSurface,
    generation: u64,
}

impl<E: DiagramEngine> Pipeline<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            engine,
            shared: Mutex::new(SharedOutput::default()),
        }
    }

    /// Parses `rules` and returns the Mermaid description. Needs no engine.
    pub fn describe(&self, rules: &str) -> String {
        describe(rules)
    }

    /// Snapshot of the output surface.
    pub fn surface(&self) -> OutputSurface {
        self.shared.lock().surface.clone()
    }

    pub async fn run(&self, rules: &str) -> RenderOutcome {
        let source = describe(rules);

        let ticket = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.surface = OutputSurface {
                raw: Some(source.clone()),
                diagram: None,
                alert: None,
            };
            shared.generation
        };

        let result = self.engine.render(&source).await;

        // Staleness is checked under the same lock that guards the write.
        let mut shared = self.shared.lock();
        if shared.generation != ticket {
            log::debug!("Dropping stale render result (run {ticket})");
            return RenderOutcome::Superseded;
        }

        match result {
            Ok(rendered) => {
                shared.surface.diagram = Some(rendered.svg.clone());
                RenderOutcome::Rendered(rendered)
            }
            Err(error) => {
                log::error!("Mermaid render failed: {}", error);
                shared.surface.diagram = None;
                shared.surface.alert = Some(alert_message(&error));
                RenderOutcome::Failed { source, error }
            }
        }
    }
}

/// Parse + serialize.
pub fn describe(rules: &str) -> String {
    to_mermaid(&parse_rules(rules))
}

fn alert_message(error: &RenderError) -> String {
    format!("Mermaid error: {error}")
}
