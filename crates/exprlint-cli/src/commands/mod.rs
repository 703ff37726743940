//! CLI subcommand implementations.

pub mod check;
pub mod fmt;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the expression source from `path`, with `-` meaning stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read expression from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Display name for diagnostics: the file path, or `<stdin>`.
pub fn display_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
