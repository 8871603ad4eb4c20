use super::{DiagramEngine, RenderedDiagram};
use crate::domain::RenderError;
use crate::infra::app_config::RendererConfig;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use which::which;

const MMDC: &str = "mmdc";

/// Renders Mermaid through the Mermaid CLI (`mmdc`).
#[derive(Debug, Clone)]
pub struct MermaidCli {
    binary: Option<PathBuf>,
    theme: String,
    background: String,
}

impl MermaidCli {
    /// Resolves the binary from config, then PATH. A missing binary leaves the
    /// engine unavailable; every render then fails.
    pub fn from_config(config: &RendererConfig) -> Self {
        let binary = match &config.binary {
            Some(path) => {
                let resolved = resolve_configured_binary(path);
                if resolved.is_none() {
                    log::warn!("Configured mmdc binary not found: {}", path.display());
                }
                resolved
            }
            None => which(MMDC).ok(),
        };

        Self {
            binary,
            theme: config.theme.clone(),
            background: config.background.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.binary.is_some()
    }
}

/// A bare name ("mmdc") is looked up on PATH; anything with a directory part
/// must point at an existing file.
fn resolve_configured_binary(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if path.components().count() == 1 {
        return which(path).ok();
    }
    None
}

#[async_trait]
impl DiagramEngine for MermaidCli {
    async fn render(&self, source: &str) -> Result<RenderedDiagram, RenderError> {
        let mmdc_path = self.binary.as_ref().ok_or_else(|| {
            RenderError::EngineUnavailable(
                "Mermaid CLI (mmdc) not found. Please install @mermaid-js/mermaid-cli and ensure it is in your PATH."
                    .to_string(),
            )
        })?;

        // mmdc only reads and writes files.
        let workdir = tempfile::tempdir().map_err(|e| RenderError::Io(e.to_string()))?;
        let input = workdir.path().join("diagram.mmd");
        let output = workdir.path().join("diagram.svg");
        tokio::fs::write(&input, source)
            .await
            .map_err(|e| RenderError::Io(e.to_string()))?;

        let result = tokio::process::Command::new(mmdc_path)
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("-t")
            .arg(&self.theme)
            .arg("-b")
            .arg(&self.background)
            .arg("-q")
            .stdin(std::process::Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| RenderError::Io(format!("Failed to spawn mmdc: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("mmdc exited with {}", result.status)
            } else {
                stderr
            };
            return Err(RenderError::failed(message));
        }

        let svg = tokio::fs::read_to_string(&output)
            .await
            .map_err(|e| RenderError::Io(e.to_string()))?;
        log::debug!("mmdc produced {} bytes of SVG", svg.len());

        Ok(RenderedDiagram {
            source: source.to_string(),
            svg,
        })
    }
}
