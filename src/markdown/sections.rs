//! Heading and section extraction.

use crate::markdown::is_fence;
use regex::Regex;
use std::sync::LazyLock;

/// ATX heading, closing hashes stripped.
static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("valid heading pattern")
});

/// A markdown heading and its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    /// 0-based line index.
    pub line: usize,
}

/// A slice of a document introduced by a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Heading,
    pub text: String,
}

/// All headings outside fenced code blocks, in document order.
pub fn headings(content: &str) -> Vec<Heading> {
    let mut in_fence = false;
    let mut found = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = HEADING_PATTERN.captures(line) {
            found.push(Heading {
                level: caps[1].len(),
                text: caps[2].trim().to_string(),
                line: idx,
            });
        }
    }

    found
}

/// The first heading matching `predicate`, extended to the next heading of
/// equal or higher level.
pub fn find_section(content: &str, predicate: impl Fn(&Heading) -> bool) -> Option<Section> {
    let lines: Vec<&str> = content.lines().collect();
    let all = headings(content);
    let (idx, heading) = all.iter().enumerate().find(|(_, h)| predicate(h))?;

    let end = all[idx + 1..]
        .iter()
        .find(|next| next.level <= heading.level)
        .map_or(lines.len(), |next| next.line);

    Some(Section {
        heading: heading.clone(),
        text: lines[heading.line..end].join("\n").trim_end().to_string(),
    })
}

/// Split a document at every heading. Text before the first heading is dropped.
pub fn split_sections(content: &str) -> Vec<Section> {
    let lines: Vec<&str> = content.lines().collect();
    let all = headings(content);

    all.iter()
        .enumerate()
        .map(|(idx, heading)| {
            let end = all.get(idx + 1).map_or(lines.len(), |next| next.line);
            Section {
                heading: heading.clone(),
                text: lines[heading.line..end].join("\n").trim_end().to_string(),
            }
        })
        .collect()
}

/// First non-heading, non-code paragraph, joined onto one line.
pub fn first_paragraph(content: &str) -> Option<String> {
    let mut in_fence = false;
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        let trimmed = line.trim();
        if in_fence || HEADING_PATTERN.is_match(line) {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        paragraph.push(trimmed);
    }

    (!paragraph.is_empty()).then(|| paragraph.join(" "))
}
