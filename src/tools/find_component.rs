use crate::component::suggest::format_suggestions;
use crate::component::{normalize_component_name, resolve_mapping, suggest_components};
use crate::config::DocsConfig;
use crate::corpus::{DocCategory, DocFile, list_doc_files};
use crate::error::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindComponentRequest {
    /// Component name or keyword (e.g. "IressButton", "button", "date picker")
    pub query: String,
}

/// Find documentation files whose names match a component name or keyword.
///
/// Lists every file whose name contains the query, grouped by category, and
/// reports the file the resolver would pick for the query.
pub fn handle_find_component(config: &DocsConfig, request: FindComponentRequest) -> Result<String> {
    let query = request.query.trim();
    if query.is_empty() {
        return Ok("Please provide a component name or keyword to search for.".to_string());
    }

    let files = list_doc_files(config.root());
    let normalized = normalize_component_name(query);
    let lower = query.to_lowercase();

    let matches: Vec<&DocFile> = files
        .iter()
        .filter(|file| {
            (!normalized.is_empty() && file.normalized_name().contains(&normalized))
                || file.file_name().to_lowercase().contains(&lower)
        })
        .collect();
    let best = resolve_mapping(&files, query);

    if matches.is_empty() && !best.is_resolved() {
        let suggestions = suggest_components(&files, query, 5);
        let output = format!(
            "No components found matching '{}'.\n{}",
            query,
            format_suggestions(&suggestions)
        );
        return Ok(output.trim_end().to_string());
    }

    let mut output = format!(
        "Found {} documentation file(s) matching '{}':\n",
        matches.len(),
        query
    );

    for category in DocCategory::ALL {
        let in_category: Vec<&&DocFile> = matches
            .iter()
            .filter(|file| file.category() == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        let _ = writeln!(output, "\n## {}", category);
        for file in in_category {
            let _ = writeln!(output, "- {} ({})", file.normalized_name(), file.path());
        }
    }

    if let (Some(file), Some(tier)) = (&best.file, best.tier) {
        let _ = write!(output, "\nBest match: {} ({} match)", file.path(), tier);
    }

    Ok(output.trim_end().to_string())
}
