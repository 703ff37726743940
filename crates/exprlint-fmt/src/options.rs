//! Formatting options.

use serde::{Deserialize, Serialize};

/// Indentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with spaces (`indent_size` wide).
    Spaces,
    /// Indent with tab characters.
    Tabs,
}

/// Preferred quote character for string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'single'` quotes.
    Single,
    /// `"double"` quotes.
    Double,
}

/// Caller-supplied formatting configuration.
///
/// Immutable value object; field names follow the editor integration's
/// camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Rendered width of a tab character, used when measuring lines.
    pub tab_size: usize,
    /// Whether indentation uses spaces; `false` forces tabs regardless of
    /// `indent_style`.
    pub insert_spaces: bool,
    /// Spaces per indent level when indenting with spaces.
    pub indent_size: usize,
    /// Line-length budget for the wrapping pass; `0` disables wrapping.
    pub max_line_length: usize,
    /// Whether to guarantee a trailing newline.
    pub insert_final_newline: bool,
    /// Whether to strip trailing whitespace per line.
    pub trim_trailing_whitespace: bool,
    /// Indentation style.
    pub indent_style: IndentStyle,
    /// Whether to pad the inside of non-empty `{}`/`[]` literals.
    pub bracket_spacing: bool,
    /// Whether to append terminating semicolons to statement lines.
    pub semicolons: bool,
    /// Quote character to normalize string literals to.
    pub quote_style: QuoteStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            indent_size: 2,
            max_line_length: 120,
            insert_final_newline: true,
            trim_trailing_whitespace: true,
            indent_style: IndentStyle::Spaces,
            bracket_spacing: true,
            semicolons: true,
            quote_style: QuoteStyle::Single,
        }
    }
}

impl FormatOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One indentation level's worth of text.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.indent_style == IndentStyle::Tabs || !self.insert_spaces {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_editor_friendly() {
        let options = FormatOptions::default();
        assert_eq!(options.indent_unit(), "  ");
        assert_eq!(options.max_line_length, 120);
        assert!(options.insert_final_newline);
        assert_eq!(options.quote_style, QuoteStyle::Single);
    }

    #[test]
    fn tabs_win_over_indent_size() {
        let options = FormatOptions {
            indent_style: IndentStyle::Tabs,
            ..FormatOptions::default()
        };
        assert_eq!(options.indent_unit(), "\t");

        let options = FormatOptions {
            insert_spaces: false,
            ..FormatOptions::default()
        };
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"indentStyle": "tabs", "quoteStyle": "double"}"#).unwrap();
        assert_eq!(options.indent_style, IndentStyle::Tabs);
        assert_eq!(options.quote_style, QuoteStyle::Double);
        assert_eq!(options.tab_size, 4);
    }
}
