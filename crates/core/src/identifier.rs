//! Safe identifier checks for names interpolated into SQL and DOT text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Longest identifier accepted. Matches the MySQL/PostgreSQL limits closely
/// enough that generated DDL stays portable.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Letters, digits and underscores, not starting with a digit.
pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Graphviz keywords. Unquoted, these cannot be used as node ids or ports,
/// matched without regard to case.
pub const DOT_KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("valid regex"));

/// Whether `name` can be dropped into a `CREATE TABLE` or a DOT node id
/// without quoting.
pub fn is_safe_identifier(name: &str) -> bool {
    name.len() <= MAX_IDENTIFIER_LENGTH && IDENTIFIER_RE.is_match(name) && !is_dot_keyword(name)
}

/// Whether `name` is a Graphviz keyword in any letter case.
pub fn is_dot_keyword(name: &str) -> bool {
    DOT_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

/// Validate `name` as an identifier of the given `kind` ("table", "column", ...).
pub fn validate_identifier(kind: &str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(format!("Empty {kind} name")));
    }
    if is_dot_keyword(name) {
        return Err(CoreError::Validation(format!(
            "Unsafe {kind} name '{name}': reserved word in diagram output"
        )));
    }
    if !is_safe_identifier(name) {
        return Err(CoreError::Validation(format!(
            "Unsafe {kind} name '{name}': must match {IDENTIFIER_PATTERN} and be at most {MAX_IDENTIFIER_LENGTH} characters"
        )));
    }
    Ok(())
}
