//! "Did you mean" suggestions for unresolved component names.
//!
//! Suggestions only decorate not-found responses. They never influence which
//! file a name resolves to.

use crate::component::normalize::normalize_component_name;
use crate::corpus::{DocCategory, DocFile};
use rapidfuzz::distance::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a suggestion to be shown.
const MIN_SIMILARITY: f64 = 0.7;

/// A component document that looks similar to the requested name.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub file: DocFile,
    pub score: f64,
}

/// Rank component documents by similarity to `component`, best first.
pub fn suggest_components(files: &[DocFile], component: &str, limit: usize) -> Vec<Suggestion> {
    let wanted = normalize_component_name(component);
    if wanted.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = files
        .iter()
        .filter(|file| file.category() == DocCategory::Components)
        .filter_map(|file| {
            let name = file.normalized_name();
            let score = jaro_winkler::similarity(wanted.chars(), name.chars());
            (score >= MIN_SIMILARITY).then(|| Suggestion {
                name,
                file: file.clone(),
                score,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(limit);
    suggestions
}

/// Render suggestions as a bullet list, or an empty string when there are none.
pub(crate) fn format_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let mut output = String::from("\nDid you mean one of these?\n");
    for suggestion in suggestions {
        output.push_str(&format!(
            "• {} ({})\n",
            suggestion.name,
            suggestion.file.path()
        ));
    }
    output
}
