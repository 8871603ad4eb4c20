//! Rule text acquisition for the CLI.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Rules given on the command line
    Inline(String),
    /// Rules read from a file
    File(PathBuf),
    /// Rules piped on stdin
    Stdin,
}

impl RuleSource {
    /// Inline text wins over a file; stdin is the fallback.
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => RuleSource::Inline(text),
            (None, Some(path)) => RuleSource::File(path),
            (None, None) => RuleSource::Stdin,
        }
    }
}

pub fn acquire_rules(source: RuleSource) -> Result<String> {
    match source {
        RuleSource::Inline(text) => Ok(text),
        RuleSource::File(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rules from {}", path.display())),
        RuleSource::Stdin => {
            if std::io::stdin().is_terminal() {
                anyhow::bail!("No rules provided. Pass --rules, an input file, or pipe text on stdin.");
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
