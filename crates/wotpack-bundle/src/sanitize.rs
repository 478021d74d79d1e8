//! Character filtering for identifiers and free text.
//!
//! Author and package identifiers end up in archive file names and internal
//! paths, so anything outside a restricted safe set is stripped rather than
//! escaped.

/// Strip every character that is not alphanumeric, underscore, or dot.
///
/// Total: never fails, empty input yields empty output.
#[must_use]
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '.')
        .collect()
}

/// Strip every character that is not alphanumeric or underscore.
///
/// Stricter than [`sanitize_identifier`]: dots are removed too.
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
