//! Substring search over every indexed document.
//!
//! Results come back in index order, then line order. There is no relevance
//! ranking; presentation simply keeps the first [`MAX_SEARCH_RESULTS`].

use crate::corpus::{DocFile, list_doc_files, read_doc};
use crate::search::context::ContextWindow;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum number of matches rendered for a single query.
pub const MAX_SEARCH_RESULTS: usize = 15;

/// Lines of context on each side of a match.
const CONTEXT_RADIUS: usize = 1;

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub file: DocFile,
    /// 1-based line number.
    pub line_number: usize,
    pub line_text: String,
    /// The matching line plus one line either side, clamped to the file.
    pub context_text: String,
}

/// Search every document under `root` for lines containing `query`.
///
/// Unreadable files are logged and skipped.
pub fn search(root: &Path, query: &str, case_sensitive: bool) -> Vec<SearchMatch> {
    let mut matches = Vec::new();
    for file in list_doc_files(root) {
        match read_doc(root, &file) {
            Ok(content) => {
                matches.extend(search_content(&file, &content, query, case_sensitive));
            }
            Err(e) => warn!("Skipping {} during search: {}", file, e),
        }
    }
    debug!("Search for {:?} found {} matches", query, matches.len());
    matches
}

/// Search a single document's content.
pub fn search_content(
    file: &DocFile,
    content: &str,
    query: &str,
    case_sensitive: bool,
) -> Vec<SearchMatch> {
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };
    let lines: Vec<&str> = content.lines().collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            if case_sensitive {
                line.contains(needle.as_str())
            } else {
                line.to_lowercase().contains(needle.as_str())
            }
        })
        .map(|(idx, line)| SearchMatch {
            file: file.clone(),
            line_number: idx + 1,
            line_text: (*line).to_string(),
            context_text: ContextWindow::around(idx, CONTEXT_RADIUS, lines.len()).render(&lines),
        })
        .collect()
}
