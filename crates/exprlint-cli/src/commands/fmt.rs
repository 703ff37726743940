//! Fmt command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config_resolver::{CliConfig, ConfigSource};

/// Runs the fmt command.
pub fn run(file: &Path, write: bool, check: bool, source: &ConfigSource) -> Result<()> {
    let config = CliConfig::load(source)?;
    let text = super::read_source(file)?;
    let name = super::display_name(file);

    let formatted = exprlint::format(&text, &config.format);

    if check {
        if formatted == text {
            return Ok(());
        }
        eprintln!("{name} is not formatted");
        std::process::exit(1);
    }

    if write {
        if file == Path::new("-") {
            anyhow::bail!("--write requires a file path, not stdin");
        }
        if formatted != text {
            std::fs::write(file, &formatted)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::info!("Rewrote {}", name);
        }
        return Ok(());
    }

    print!("{formatted}");
    Ok(())
}
