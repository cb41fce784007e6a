//! Section and query filtering over `guidelines.md`.

use crate::config::GUIDELINES_FILE;
use crate::corpus::{DocFile, read_doc};
use crate::markdown::{find_section, headings, split_sections};
use crate::search::{ContextWindow, merge_windows};
use std::path::Path;
use tracing::error;

/// Lines of context kept before and after each query hit.
pub const QUERY_CONTEXT_LINES: usize = 3;

/// Separator between disjoint query windows.
const WINDOW_SEPARATOR: &str = "\n...\n";

/// Result of filtering the guidelines document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidelineOutcome {
    /// Filtered (or whole) guideline text.
    Content {
        text: String,
        /// Set when no heading matched and sections mentioning the term were used instead.
        from_mentions: bool,
    },
    SectionNotFound {
        section: String,
        available: Vec<String>,
    },
    QueryNotFound {
        query: String,
        section: Option<String>,
    },
}

/// Read the guidelines document and render it, filtered by section and/or query.
///
/// An unreadable guidelines file is logged and reported as text.
pub fn design_guidelines(root: &Path, section: Option<&str>, query: Option<&str>) -> String {
    let content = match read_doc(root, &DocFile::new(GUIDELINES_FILE)) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read design guidelines: {}", e);
            return format!("Error reading design guidelines: {}", e);
        }
    };

    render(&filter_guidelines(&content, section, query), section, query)
}

/// Apply the section filter, then the query filter, to guideline text.
///
/// Empty strings are treated as absent filters.
pub fn filter_guidelines(
    content: &str,
    section: Option<&str>,
    query: Option<&str>,
) -> GuidelineOutcome {
    let section = section.map(str::trim).filter(|s| !s.is_empty());
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let (text, from_mentions) = match section {
        None => (content.to_string(), false),
        Some(name) => match select_section(content, name) {
            Some(selected) => selected,
            None => {
                return GuidelineOutcome::SectionNotFound {
                    section: name.to_string(),
                    available: headings(content)
                        .into_iter()
                        .filter(|h| h.level == 2)
                        .map(|h| h.text)
                        .collect(),
                };
            }
        },
    };

    match query {
        None => GuidelineOutcome::Content {
            text,
            from_mentions,
        },
        Some(query) => match lines_with_context(&text, query, QUERY_CONTEXT_LINES) {
            Some(text) => GuidelineOutcome::Content {
                text,
                from_mentions,
            },
            None => GuidelineOutcome::QueryNotFound {
                query: query.to_string(),
                section: section.map(str::to_string),
            },
        },
    }
}

/// The section headed by `name`, or every section mentioning it.
fn select_section(content: &str, name: &str) -> Option<(String, bool)> {
    let needle = name.to_lowercase();

    if let Some(section) = find_section(content, |h| h.text.to_lowercase().contains(&needle)) {
        return Some((section.text, false));
    }

    let mentions: Vec<String> = split_sections(content)
        .into_iter()
        .filter(|s| s.text.to_lowercase().contains(&needle))
        .map(|s| s.text)
        .collect();

    (!mentions.is_empty()).then(|| (mentions.join("\n\n"), true))
}

/// Lines containing `query` (case-insensitive) with `radius` lines either side.
///
/// Overlapping windows are merged so no line appears twice.
fn lines_with_context(text: &str, query: &str, radius: usize) -> Option<String> {
    let needle = query.to_lowercase();
    let lines: Vec<&str> = text.lines().collect();

    let windows = merge_windows(
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&needle))
            .map(|(idx, _)| ContextWindow::around(idx, radius, lines.len())),
    );

    if windows.is_empty() {
        return None;
    }

    Some(
        windows
            .iter()
            .map(|window| window.render(&lines))
            .collect::<Vec<_>>()
            .join(WINDOW_SEPARATOR),
    )
}

fn render(outcome: &GuidelineOutcome, section: Option<&str>, query: Option<&str>) -> String {
    match outcome {
        GuidelineOutcome::Content {
            text,
            from_mentions,
        } => {
            let mut title = String::from("# Design Guidelines");
            if let Some(section) = section.filter(|s| !s.trim().is_empty()) {
                title.push_str(&format!(": {}", section.trim()));
            }
            if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
                title.push_str(&format!(" (matching \"{}\")", query.trim()));
            }

            let note = if *from_mentions {
                "\n\n_No heading matched; showing sections that mention the term._"
            } else {
                ""
            };
            format!("{}{}\n\n{}", title, note, text)
        }
        GuidelineOutcome::SectionNotFound { section, available } => {
            let mut output = format!("Section '{}' not found in design guidelines.", section);
            if !available.is_empty() {
                output.push_str("\n\nAvailable sections:\n");
                for name in available {
                    output.push_str(&format!("- {}\n", name));
                }
            }
            output
        }
        GuidelineOutcome::QueryNotFound { query, section } => match section {
            Some(section) => format!(
                "No content matching '{}' found in section '{}' of the design guidelines.",
                query, section
            ),
            None => format!(
                "No content matching '{}' found in the design guidelines.",
                query
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    const GUIDELINES: &str = "\
# IDS Guidelines

## Accessibility

Provide text alternatives.
### Colour contrast
Keep contrast above 4.5:1.

## Layout

Use the spacing scale.
Avoid fixed widths.

## Writing

Write in plain language.
Prefer short sentences.";

    #[test]
    fn test_no_filters_returns_everything() {
        let outcome = filter_guidelines(GUIDELINES, None, None);
        check!(
            outcome
                == GuidelineOutcome::Content {
                    text: GUIDELINES.to_string(),
                    from_mentions: false
                }
        );
    }

    #[test]
    fn test_section_by_heading_includes_subsections() {
        let GuidelineOutcome::Content {
            text,
            from_mentions,
        } = filter_guidelines(GUIDELINES, Some("accessib"), None)
        else {
            panic!("expected content");
        };
        check!(!from_mentions);
        check!(text.starts_with("## Accessibility"));
        check!(text.contains("Keep contrast above 4.5:1."));
        check!(!text.contains("## Layout"));
    }

    #[test]
    fn test_section_falls_back_to_mentions() {
        let GuidelineOutcome::Content {
            text,
            from_mentions,
        } = filter_guidelines(GUIDELINES, Some("spacing"), None)
        else {
            panic!("expected content");
        };
        check!(from_mentions);
        check!(text == "## Layout\n\nUse the spacing scale.\nAvoid fixed widths.");
    }

    #[test]
    fn test_section_not_found_lists_level_two_headings() {
        let outcome = filter_guidelines(GUIDELINES, Some("motion"), None);
        check!(
            outcome
                == GuidelineOutcome::SectionNotFound {
                    section: "motion".to_string(),
                    available: vec![
                        "Accessibility".to_string(),
                        "Layout".to_string(),
                        "Writing".to_string()
                    ],
                }
        );
    }

    #[test]
    fn test_query_windows_merge_without_duplicates() {
        let text = (1..=20)
            .map(|n| {
                if n == 5 || n == 8 || n == 18 {
                    format!("line {} hit", n)
                } else {
                    format!("line {}", n)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let result = lines_with_context(&text, "HIT", 3).unwrap();
        let parts: Vec<&str> = result.split(WINDOW_SEPARATOR).collect();

        check!(parts.len() == 2);
        check!(parts[0].lines().next() == Some("line 2"));
        check!(parts[0].lines().last() == Some("line 11"));
        check!(parts[0].matches("line 5 hit").count() == 1);
        check!(parts[1].lines().next() == Some("line 15"));
        check!(parts[1].lines().last() == Some("line 20"));
    }

    #[test]
    fn test_section_and_query_combine() {
        let outcome = filter_guidelines(GUIDELINES, Some("Writing"), Some("short"));
        let GuidelineOutcome::Content { text, .. } = outcome else {
            panic!("expected content");
        };
        check!(text.contains("Prefer short sentences."));
        check!(!text.contains("spacing"));
    }

    #[test]
    fn test_query_not_found_in_section() {
        let outcome = filter_guidelines(GUIDELINES, Some("Writing"), Some("contrast"));
        check!(
            outcome
                == GuidelineOutcome::QueryNotFound {
                    query: "contrast".to_string(),
                    section: Some("Writing".to_string()),
                }
        );
    }

    #[test]
    fn test_render_messages() {
        let missing = render(
            &GuidelineOutcome::SectionNotFound {
                section: "motion".to_string(),
                available: vec!["Layout".to_string()],
            },
            Some("motion"),
            None,
        );
        check!(missing.contains("Section 'motion' not found"));
        check!(missing.contains("- Layout"));

        let content = render(
            &GuidelineOutcome::Content {
                text: "body".to_string(),
                from_mentions: false,
            },
            Some("Layout"),
            Some("grid"),
        );
        check!(content == "# Design Guidelines: Layout (matching \"grid\")\n\nbody");
    }
}
