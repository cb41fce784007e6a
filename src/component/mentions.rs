//! Extraction of component names from free text.

use ahash::AHashSet;
use regex::Regex;
use std::sync::LazyLock;

/// Library prefix followed by a capitalized run, e.g. `IressButton`.
///
/// There is no word boundary on either side: `IressButtonIsNotValid` is one
/// token and `xIressTag` still yields `IressTag`. Callers rely on this, keep it.
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Iress[A-Z][A-Za-z0-9]*").expect("valid mention pattern"));

/// Find every distinct component mention in `text`, in first-occurrence order.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    MENTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
