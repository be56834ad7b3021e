//! Keyword matching between checklist items and file paths.
//!
//! An item is split into whitespace-delimited, lowercased tokens. It matches
//! a file listing when any token occurs as a substring of any lowercased path.

use std::collections::BTreeSet;

/// Splits `item` on whitespace and lowercases each token.
#[must_use]
pub fn tokenize(item: &str) -> BTreeSet<String> {
    item.split_whitespace().map(str::to_lowercase).collect()
}

/// Returns `true` if any token of `item` occurs in any of `lowered_paths`.
///
/// Paths must already be lowercased. An item without tokens never matches.
#[must_use]
pub fn matches<S: AsRef<str>>(item: &str, lowered_paths: &[S]) -> bool {
    let tokens = tokenize(item);
    tokens.iter().any(|token| lowered_paths.iter().any(|path| path.as_ref().contains(token.as_str())))
}
