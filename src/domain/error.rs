//! Error types for erdraft.
//!
//! Every failure is scoped to a single generate-and-render call; none of these
//! are fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the external diagram engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("diagram engine is unavailable: {0}")]
    EngineUnavailable(String),

    #[error("{message}")]
    Failed { message: String },

    #[error("diagram engine I/O failed: {0}")]
    Io(String),
}

impl RenderError {
    pub fn failed(message: impl Into<String>) -> Self {
        RenderError::Failed {
            message: message.into(),
        }
    }
}

/// Failures while writing the diagram description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
