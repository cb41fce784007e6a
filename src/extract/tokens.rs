//! Design token extraction from `foundations-*` documents.

use crate::corpus::{DocCategory, DocFile, list_doc_files, read_doc};
use crate::markdown::headings;
use ahash::AHashSet;
use regex::Regex;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

/// Section headings listed per file.
pub const MAX_SECTIONS_PER_FILE: usize = 3;

/// Tokens listed per file before the rest is summarised.
pub const MAX_TOKENS_PER_FILE: usize = 30;

/// CSS custom properties, e.g. `--iress-color-primary`.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[A-Za-z][A-Za-z0-9_-]*").expect("valid token pattern"));

/// Tokens and outline of one foundations document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFileReport {
    pub file: DocFile,
    /// Distinct tokens in first-occurrence order.
    pub tokens: Vec<String>,
    /// Level 2-3 headings in document order.
    pub sections: Vec<String>,
}

/// Outcome of a design token lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenReport {
    Found {
        category: Option<String>,
        files: Vec<TokenFileReport>,
    },
    NotFound {
        category: Option<String>,
        available: Vec<String>,
    },
}

/// Distinct CSS custom properties in `content`, in first-occurrence order.
pub fn extract_tokens(content: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    TOKEN_PATTERN
        .find_iter(content)
        .map(|m| m.as_str().trim_end_matches(['-', '_']))
        .filter(|token| token.len() > 2 && seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// Collect design tokens from foundations documents, optionally filtered by category.
///
/// `None`, an empty string and `all` disable the filter.
pub fn design_tokens(root: &Path, category: Option<&str>) -> TokenReport {
    let category = category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != "all");

    let foundations: Vec<DocFile> = list_doc_files(root)
        .into_iter()
        .filter(|file| file.category() == DocCategory::Foundations)
        .collect();

    let selected: Vec<&DocFile> = foundations
        .iter()
        .filter(|file| {
            category
                .as_deref()
                .is_none_or(|wanted| file.normalized_name().contains(wanted))
        })
        .collect();

    if selected.is_empty() {
        let mut available: Vec<String> =
            foundations.iter().map(DocFile::normalized_name).collect();
        available.sort();
        available.dedup();
        return TokenReport::NotFound {
            category,
            available,
        };
    }

    let files = selected
        .into_iter()
        .filter_map(|file| match read_doc(root, file) {
            Ok(content) => Some(TokenFileReport {
                file: file.clone(),
                tokens: extract_tokens(&content),
                sections: headings(&content)
                    .into_iter()
                    .filter(|h| (2..=3).contains(&h.level))
                    .map(|h| h.text)
                    .collect(),
            }),
            Err(e) => {
                warn!("Skipping {} during token extraction: {}", file, e);
                None
            }
        })
        .collect();

    TokenReport::Found { category, files }
}

impl TokenReport {
    /// Render the report as tool output text.
    pub fn render(&self) -> String {
        match self {
            Self::NotFound {
                category,
                available,
            } => {
                let mut output = match category {
                    Some(category) => {
                        format!("No design tokens found for category '{}'.\n\n", category)
                    }
                    None => "No foundations documentation found.\n\n".to_string(),
                };
                if available.is_empty() {
                    output.push_str("Available categories: none");
                } else {
                    let _ = write!(output, "Available categories: {}", available.join(", "));
                }
                output
            }
            Self::Found { category, files } => {
                let mut output = match category {
                    Some(category) => format!("# Design Tokens: {}\n", category),
                    None => "# Design Tokens\n".to_string(),
                };
                for report in files {
                    render_file(&mut output, report);
                }
                output
            }
        }
    }
}

fn render_file(output: &mut String, report: &TokenFileReport) {
    let _ = writeln!(
        output,
        "\n## {} ({})\n",
        report.file.normalized_name(),
        report.file.path()
    );

    if report.tokens.is_empty() {
        output.push_str("No tokens found in this document.\n");
    } else {
        let _ = writeln!(output, "Tokens ({}):", report.tokens.len());
        for token in report.tokens.iter().take(MAX_TOKENS_PER_FILE) {
            let _ = writeln!(output, "- `{}`", token);
        }
        if report.tokens.len() > MAX_TOKENS_PER_FILE {
            let _ = writeln!(
                output,
                "- ... and {} more",
                report.tokens.len() - MAX_TOKENS_PER_FILE
            );
        }
    }

    if !report.sections.is_empty() {
        output.push_str("\nSections:\n");
        for section in report.sections.iter().take(MAX_SECTIONS_PER_FILE) {
            let _ = writeln!(output, "- {}", section);
        }
        if report.sections.len() > MAX_SECTIONS_PER_FILE {
            let _ = writeln!(
                output,
                "- ... and {} more sections",
                report.sections.len() - MAX_SECTIONS_PER_FILE
            );
        }
    }
}
