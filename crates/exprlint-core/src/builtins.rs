//! Fixed allow-lists for the host scripting environment.
//!
//! These tables are immutable configuration data bundled with the engine.
//! The tokenizer classifies identifier-family tokens against them, and the
//! rules consult them through the lazily-built lookup sets.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Declaration and control-flow keywords of the expression dialect (ES3-like,
/// plus `let`/`const`).
pub const KEYWORDS: &[&str] = &[
    "var",
    "let",
    "const",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "default",
    "break",
    "continue",
    "function",
    "return",
    "new",
    "delete",
    "typeof",
    "instanceof",
    "in",
    "this",
    "true",
    "false",
    "null",
    "undefined",
    "try",
    "catch",
    "finally",
    "throw",
    "void",
];

/// Identifiers implicitly available in every expression.
pub const HOST_GLOBALS: &[&str] = &[
    "time",
    "value",
    "index",
    "thisComp",
    "thisLayer",
    "thisProperty",
];

/// Host global-function allow-list.
pub const HOST_FUNCTIONS: &[&str] = &[
    "wiggle",
    "random",
    "gaussRandom",
    "noise",
    "seedRandom",
    "valueAtTime",
    "velocityAtTime",
    "speedAtTime",
    "linear",
    "ease",
    "easeIn",
    "easeOut",
    "clamp",
    "length",
    "normalize",
    "lookAt",
    "timeToFrames",
    "framesToTime",
    "add",
    "sub",
    "mul",
    "div",
    "dot",
    "cross",
    "degreesToRadians",
    "radiansToDegrees",
    "posterizeTime",
    "loopIn",
    "loopOut",
    "smooth",
    "sourceRectAtTime",
    "comp",
    "layer",
    "footage",
    "effect",
    "toComp",
    "fromComp",
    "toWorld",
    "fromWorld",
];

/// Host layer-property allow-list.
pub const HOST_PROPERTIES: &[&str] = &[
    "position",
    "rotation",
    "scale",
    "opacity",
    "anchorPoint",
    "sourceText",
    "startTime",
    "inPoint",
    "outPoint",
    "width",
    "height",
    "name",
    "numLayers",
    "frameDuration",
    "duration",
    "velocity",
    "speed",
    "transform",
    "marker",
];

/// Deprecated identifier -> replacement map.
pub const DEPRECATED_FUNCTIONS: &[(&str, &str)] = &[
    ("random", "Math.random"),
    ("gaussRandom", "Math.random"),
    ("substr", "substring"),
];

/// Host functions considered expensive inside loop bodies.
pub const EXPENSIVE_FUNCTIONS: &[&str] = &["wiggle", "random", "noise", "valueAtTime"];

/// Numeric literals exempt from the magic-number rule.
///
/// `-1` is listed for parity with the editor-side catalogue even though the
/// tokenizer emits the minus sign as a separate operator, so a literal `-1`
/// token never occurs.
pub const ALLOWED_NUMBERS: &[f64] = &[0.0, 1.0, -1.0, 2.0, 10.0, 100.0, 360.0, 180.0, 90.0];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

static HOST_GLOBAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HOST_GLOBALS.iter().copied().collect());

static HOST_FUNCTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HOST_FUNCTIONS.iter().copied().collect());

static HOST_PROPERTY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HOST_PROPERTIES.iter().copied().collect());

static DEPRECATED_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DEPRECATED_FUNCTIONS.iter().copied().collect());

static EXPENSIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EXPENSIVE_FUNCTIONS.iter().copied().collect());

/// Returns `true` if `word` is a dialect keyword.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Returns `true` if `word` is an implicitly-available host global.
#[must_use]
pub fn is_host_global(word: &str) -> bool {
    HOST_GLOBAL_SET.contains(word)
}

/// Returns `true` if `word` is on the host function allow-list.
#[must_use]
pub fn is_host_function(word: &str) -> bool {
    HOST_FUNCTION_SET.contains(word)
}

/// Returns `true` if `word` is on the host property allow-list.
#[must_use]
pub fn is_host_property(word: &str) -> bool {
    HOST_PROPERTY_SET.contains(word)
}

/// Looks up the replacement for a deprecated identifier.
#[must_use]
pub fn deprecated_replacement(word: &str) -> Option<&'static str> {
    DEPRECATED_MAP.get(word).copied()
}

/// Returns `true` if `word` is a host function considered expensive in loops.
#[must_use]
pub fn is_expensive_function(word: &str) -> bool {
    EXPENSIVE_SET.contains(word)
}
