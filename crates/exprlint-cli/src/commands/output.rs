//! Shared output formatting for lint results.

use anyhow::Result;
use exprlint::{Diagnostic, DiagnosticReport, Severity};

use crate::OutputFormat;

/// Print diagnostics in the specified format.
pub fn print(diagnostics: &[Diagnostic], source: &str, name: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(diagnostics, name),
        OutputFormat::Pretty => print_pretty(diagnostics, source),
        OutputFormat::Json => return print_json(diagnostics),
        OutputFormat::Compact => print_compact(diagnostics, name),
    }
    Ok(())
}

fn print_text(diagnostics: &[Diagnostic], name: &str) {
    let errors = count(diagnostics, Severity::Error);
    let warnings = count(diagnostics, Severity::Warning);
    let infos = count(diagnostics, Severity::Info);

    for diagnostic in diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} at {}:{}:{}",
            diagnostic.rule_id, name, diagnostic.line, diagnostic.column,
        );
        println!("  {}: {}", severity_indicator, diagnostic.message);
        if let Some(suggestion) = diagnostic.suggestions.first() {
            println!("  = help: try `{suggestion}`");
        }
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s)\x1b[0m",
        summary_color, errors, warnings, infos
    );
}

fn print_pretty(diagnostics: &[Diagnostic], source: &str) {
    for diagnostic in diagnostics {
        let report = miette::Report::new(DiagnosticReport::new(diagnostic, source));
        println!("{report:?}");
    }
}

fn print_json(diagnostics: &[Diagnostic]) -> Result<()> {
    let json = serde_json::to_string_pretty(diagnostics)?;
    println!("{json}");
    Ok(())
}

fn print_compact(diagnostics: &[Diagnostic], name: &str) {
    for diagnostic in diagnostics {
        println!(
            "{}:{}:{}: {} [{}] {}",
            name,
            diagnostic.line,
            diagnostic.column,
            diagnostic.severity,
            diagnostic.rule_id,
            diagnostic.message,
        );
    }
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
