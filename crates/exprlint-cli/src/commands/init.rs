//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# exprlint configuration
# Keys use the same camelCase names as the editor integration settings.

[lint]
# Cyclomatic-like score above which max-complexity fires
maxComplexity = 10

# Carried alongside the formatter budget for editor integrations
maxLineLength = 120

# Silence the no-deprecated-functions rule entirely
allowDeprecated = false

# Reserved for stricter rule variants
strictMode = false

# Per-rule toggles; unlisted rules stay enabled
[lint.rules]
# "no-magic-numbers" = false
# "consistent-naming" = false

[format]
indentSize = 2
insertSpaces = true
tabSize = 4
maxLineLength = 120
insertFinalNewline = true
trimTrailingWhitespace = true
bracketSpacing = true
semicolons = true
# "single" or "double"
quoteStyle = "single"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("exprlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created exprlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit exprlint.toml to configure rules and formatting");
    println!("  2. Run: exprlint check expression.js");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config_resolver::{CliConfig, ConfigSource};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn generated_config_parses_cleanly() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("exprlint.toml");
        fs::write(&path, super::DEFAULT_CONFIG).unwrap();

        let config = CliConfig::load(&ConfigSource::Project(path)).unwrap();
        assert_eq!(config.lint.max_complexity, 10);
        assert_eq!(config.format.indent_size, 2);
    }
}
