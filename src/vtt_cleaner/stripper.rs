//! Inline markup removal for caption text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `<`, at least one non-`>` character, then `>`
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("Invalid tag regex")
});

/// Remove `<...>` markup and trim the result.
///
/// Returns `None` when nothing is left. Unmatched `<` or `>` characters are
/// kept, and so is an empty `<>` pair.
pub fn strip_tags(line: &str) -> Option<String> {
    let stripped = TAG_REGEX.replace_all(line, "");
    let cleaned = stripped.trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
