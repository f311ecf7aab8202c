//! Identifier and literal helpers for generated code

use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9]+").unwrap()
});

/// Name used for the whole document
pub const ROOT_NAME: &str = "root";

/// One step below a parent in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Array element position
    Index(usize),
    /// Sanitized object key
    Key(&'a str),
}

/// Replace every run of characters outside `[a-zA-Z0-9]` with one underscore.
///
/// The result may be empty, start with a digit or collide with a sibling.
pub fn sanitize_name(name: &str) -> String {
    NON_IDENTIFIER_REGEX.replace_all(name, "_").into_owned()
}

/// Build a variable name from a parent prefix and a child segment.
///
/// Array indices are glued onto the prefix (`a3`), keys are joined with an
/// underscore (`a_b`).
pub fn make_variable_name(prefix: Option<&str>, suffix: Option<Segment<'_>>) -> String {
    match (prefix, suffix) {
        (None, None) => ROOT_NAME.to_string(),
        (Some(prefix), None) => prefix.to_string(),
        (None, Some(Segment::Index(i))) => i.to_string(),
        (None, Some(Segment::Key(key))) => key.to_string(),
        (Some(prefix), Some(Segment::Index(i))) => format!("{}{}", prefix, i),
        (Some(prefix), Some(Segment::Key(key))) => format!("{}_{}", prefix, key),
    }
}

/// Escape text for use inside a double-quoted C++ string literal
pub fn escape_cpp_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
