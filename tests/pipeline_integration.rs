//! Integration tests for the generate-and-render pipeline
//! A recording engine stands in for the Mermaid CLI

use async_trait::async_trait;
use erdraft::application::pipeline::{Pipeline, RenderOutcome};
use erdraft::domain::RenderError;
use erdraft::infra::app_config::RendererConfig;
use erdraft::infra::engine::{DiagramEngine, MermaidCli, RenderedDiagram};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct RecordingEngine {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl DiagramEngine for RecordingEngine {
    async fn render(&self, source: &str) -> Result<RenderedDiagram, RenderError> {
        self.seen.lock().push(source.to_string());
        Ok(RenderedDiagram {
            source: source.to_string(),
            svg: "<svg></svg>".to_string(),
        })
    }
}

#[tokio::test]
async fn test_engine_receives_serialized_description() {
    let engine = Arc::new(RecordingEngine::default());
    let pipeline = Pipeline::new(engine.clone());

    let outcome = pipeline
        .run("A Player has name, score. A Player must many Enemies.")
        .await;
    assert!(matches!(outcome, RenderOutcome::Rendered(_)));

    let seen = engine.seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], pipeline.describe("A Player has name, score. A Player must many Enemies."));
    assert_eq!(pipeline.surface().raw.as_deref(), Some(seen[0].as_str()));
}

#[tokio::test]
async fn test_unavailable_engine_reports_failure_per_call() {
    let dir = tempfile::tempdir().unwrap();
    let config = RendererConfig {
        binary: Some(dir.path().join("missing-mmdc")),
        ..RendererConfig::default()
    };
    let pipeline = Pipeline::new(Arc::new(MermaidCli::from_config(&config)));

    for _ in 0..2 {
        let outcome = pipeline.run("A Player has name.").await;
        match &outcome {
            RenderOutcome::Failed { source, error } => {
                assert!(source.starts_with("erDiagram\n"));
                assert!(matches!(error, RenderError::EngineUnavailable(_)));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        let alert = outcome.alert().unwrap();
        assert!(alert.starts_with("Mermaid error: "));

        let surface = pipeline.surface();
        assert!(surface.diagram.is_none());
        assert_eq!(surface.alert, Some(alert));
        assert!(surface.raw.is_some());
    }
}
