//! Full-text search tool.

use crate::config::DocsConfig;
use crate::error::Result;
use crate::search::{MAX_SEARCH_RESULTS, search};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsRequest {
    /// Text to search for across all documentation
    pub query: String,
    /// Match case exactly (default: false)
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Search every documentation file line by line.
pub fn handle_search_docs(config: &DocsConfig, request: SearchDocsRequest) -> Result<String> {
    if request.query.is_empty() {
        return Ok("Please provide a search query.".to_string());
    }

    let results = search(config.root(), &request.query, request.case_sensitive);

    if results.is_empty() {
        let mut msg = format!("No results found for '{}'.\n\n", request.query);
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search for component names like 'IressButton' or 'Table'\n");
        if request.case_sensitive {
            msg.push_str("• Try again without case_sensitive\n");
        }
        return Ok(msg.trim_end().to_string());
    }

    let mut output = format!("Found {} matches for '{}'", results.len(), request.query);
    if results.len() > MAX_SEARCH_RESULTS {
        let _ = write!(output, " (showing first {})", MAX_SEARCH_RESULTS);
    }
    output.push_str(":\n");

    for (idx, result) in results.iter().take(MAX_SEARCH_RESULTS).enumerate() {
        let _ = write!(
            output,
            "\n{}. {} (line {})\n```\n{}\n```\n",
            idx + 1,
            result.file,
            result.line_number,
            result.context_text
        );
    }

    Ok(output.trim_end().to_string())
}
