//! Fixed rule catalogue.

use crate::{
    ConsistentNaming, MaxComplexity, NoDeprecatedFunctions, NoInfiniteLoops, NoMagicNumbers,
    NoUndefinedVariables, NoUnusedVariables, PerformanceWarnings, PreferConst, PreferModernSyntax,
};
use exprlint_core::{LintOptions, RuleBox, RuleInfo};

/// Returns the ten built-in rules, in the engine's fixed execution order.
///
/// Diagnostics from a lint run are concatenated in this order; they are not
/// re-sorted by position.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoUndefinedVariables::new()),
        Box::new(NoDeprecatedFunctions::new()),
        Box::new(PreferModernSyntax::new()),
        Box::new(NoInfiniteLoops::new()),
        Box::new(MaxComplexity::new()),
        Box::new(NoUnusedVariables::new()),
        Box::new(PreferConst::new()),
        Box::new(NoMagicNumbers::new()),
        Box::new(ConsistentNaming::new()),
        Box::new(PerformanceWarnings::new()),
    ]
}

/// Builds the catalogue of all built-in rules under `options`, for
/// settings UIs.
///
/// Toggling an entry mutates only the caller-held options map, never
/// engine-internal state.
#[must_use]
pub fn catalogue(options: &LintOptions) -> Vec<RuleInfo> {
    default_rules()
        .iter()
        .map(|rule| RuleInfo::for_rule(rule.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprlint_core::{RuleCategory, Severity};

    #[test]
    fn catalogue_has_ten_entries_in_fixed_order() {
        let entries = catalogue(&LintOptions::default());
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "no-undefined-variables",
                "no-deprecated-functions",
                "prefer-modern-syntax",
                "no-infinite-loops",
                "max-complexity",
                "no-unused-variables",
                "prefer-const",
                "no-magic-numbers",
                "consistent-naming",
                "performance-warnings",
            ]
        );
    }

    #[test]
    fn severities_match_the_published_table() {
        let entries = catalogue(&LintOptions::default());
        let severity_of = |id: &str| {
            entries
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.severity)
                .unwrap()
        };
        assert_eq!(severity_of("no-undefined-variables"), Severity::Error);
        assert_eq!(severity_of("no-infinite-loops"), Severity::Error);
        assert_eq!(severity_of("no-deprecated-functions"), Severity::Warning);
        assert_eq!(severity_of("max-complexity"), Severity::Warning);
        assert_eq!(severity_of("no-unused-variables"), Severity::Warning);
        assert_eq!(severity_of("performance-warnings"), Severity::Warning);
        assert_eq!(severity_of("prefer-modern-syntax"), Severity::Info);
        assert_eq!(severity_of("prefer-const"), Severity::Info);
        assert_eq!(severity_of("no-magic-numbers"), Severity::Info);
        assert_eq!(severity_of("consistent-naming"), Severity::Info);
    }

    #[test]
    fn enabled_flags_reflect_the_options_map() {
        let options = LintOptions::new().with_rule("prefer-const", false);
        let entries = catalogue(&options);
        for entry in entries {
            assert_eq!(entry.enabled, entry.id != "prefer-const");
        }
    }

    #[test]
    fn performance_rule_sits_in_its_own_category() {
        let entries = catalogue(&LintOptions::default());
        let performance: Vec<&RuleInfo> = entries
            .iter()
            .filter(|e| e.category == RuleCategory::Performance)
            .collect();
        assert_eq!(performance.len(), 1);
        assert_eq!(performance[0].id, "performance-warnings");
    }
}
