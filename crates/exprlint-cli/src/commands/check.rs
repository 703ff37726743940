//! Check command implementation.

use anyhow::Result;
use exprlint::{LintOptions, Severity};
use std::path::Path;

use crate::config_resolver::{CliConfig, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    file: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = CliConfig::load(source)?;
    let mut options = config.lint;

    if let Some(filter) = rules_filter {
        apply_filter(&mut options, &filter);
    }

    let text = super::read_source(file)?;
    let name = super::display_name(file);

    tracing::debug!("Linting {} ({} bytes)", name, text.len());
    let diagnostics = exprlint::lint(&text, &options);

    super::output::print(&diagnostics, &text, &name, format)?;

    // Exit with error code if there are errors
    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        std::process::exit(1);
    }

    Ok(())
}

/// Restricts `options` to the comma-separated rule ids in `filter`,
/// disabling everything else.
fn apply_filter(options: &mut LintOptions, filter: &str) {
    let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
    let known = exprlint::catalogue(&LintOptions::default());

    for name in &requested {
        if !known.iter().any(|info| info.id == *name) {
            tracing::warn!("Unknown rule: {}", name);
        }
    }
    for info in known {
        let enabled = requested.contains(&info.id.as_str());
        options.rules.insert(info.id, enabled);
    }
}
