//! Component name normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix shared by every exported component of the library.
pub const LIBRARY_PREFIX: &str = "Iress";

/// `aB` / `1B` boundaries.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel-case pattern"));

/// `ABc` boundaries inside acronyms, e.g. `HTMLInput`.
static ACRONYM_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym pattern"));

/// Normalize a component name to the kebab-case form used in file names.
///
/// The library prefix is dropped, camel-case boundaries become hyphens and
/// anything that is not alphanumeric acts as a separator:
///
/// - `IressButton` → `button`
/// - `IressButtonGroup` → `button-group`
/// - `iress date picker` → `date-picker`
pub fn normalize_component_name(name: &str) -> String {
    let split = ACRONYM_UPPER.replace_all(name.trim(), "$1-$2");
    let split = LOWER_UPPER.replace_all(&split, "$1-$2");

    let segments: Vec<String> = split
        .split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect();

    let prefix = LIBRARY_PREFIX.to_lowercase();
    let segments = match segments.split_first() {
        Some((first, rest)) if *first == prefix && !rest.is_empty() => rest,
        _ => segments.as_slice(),
    };

    segments.join("-")
}

/// Hyphen-delimited segments of a normalized name.
pub(crate) fn segments(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split('-').filter(|segment| !segment.is_empty())
}
