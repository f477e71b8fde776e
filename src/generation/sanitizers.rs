//! Identifier sanitizers for schema-name to output-identifier mapping
//!
//! Every place a schema name becomes an output identifier goes through the
//! same validity predicate and fallback naming, so renames stay deterministic
//! across the model generator and the interface generator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Legal identifier: letter or underscore, then letters, digits, underscores
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"));

/// Whether a schema name is usable verbatim as an output identifier
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Synthesized name for a definition key that is not a legal identifier
pub fn fallback_model_name(key: &str) -> String {
    format!("Model{}", capitalize(key))
}

/// The definition key itself when legal, otherwise the synthesized fallback
pub fn model_name(key: &str) -> String {
    if is_valid_identifier(key) {
        key.to_string()
    } else {
        fallback_model_name(key)
    }
}

/// Flatten a dotted wire name to a camel-case binding identifier.
///
/// `foo.bar` becomes `fooBar`; every segment after the first is capitalized,
/// so `foo.bar.baz` becomes `fooBarBaz`. The wire name itself is kept
/// verbatim by the caller.
pub fn flatten_dotted_name(name: &str) -> String {
    name.split('.')
        .enumerate()
        .map(|(index, segment)| {
            if index > 0 {
                capitalize(segment)
            } else {
                segment.to_string()
            }
        })
        .collect()
}
