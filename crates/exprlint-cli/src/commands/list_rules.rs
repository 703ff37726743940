//! List rules command implementation.

use exprlint::LintOptions;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<25} {:<10} {:<13} Description", "Id", "Severity", "Category");
    println!("{}", "-".repeat(90));

    for rule in exprlint::catalogue(&LintOptions::default()) {
        println!(
            "{:<25} {:<10} {:<13} {}",
            rule.id,
            rule.severity.to_string(),
            rule.category.to_string(),
            rule.description
        );
    }

    println!("\nAll rules are enabled by default; disable them per project in");
    println!("exprlint.toml under [lint.rules], or filter a single run, e.g.:");
    println!("  exprlint check --rules no-magic-numbers,prefer-const expr.js");
}
