//! Infrastructure layer (adapters/implementations).
//!
//! Diagram text output, the external Mermaid engine and configuration files.

pub mod app_config;
pub mod cli;
pub mod diagram;
pub mod engine;
