//! Text field normalization.
use itertools::Itertools;

/// Collapses a raw text field into a single trimmed line.
///
/// Tabs, carriage returns and newlines become spaces, and any run of
/// whitespace collapses to a single space. Absent fields normalize to the
/// empty string.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        Some(text) => text.split_whitespace().join(" "),
        None => String::new(),
    }
}
