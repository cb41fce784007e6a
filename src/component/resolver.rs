//! Tiered component name resolution.
//!
//! Tiers are tried in order and the first tier that matches any file wins.
//! Within a tier the first file in index order wins.

use crate::component::normalize::{normalize_component_name, segments};
use crate::corpus::DocFile;
use serde::Serialize;
use std::fmt;

/// How a component name was matched to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Normalized names are equal.
    Exact,
    /// One name is a leading, segment-aligned prefix of the other.
    Partial,
    /// The name's segments appear in order among the file's segments, or
    /// either name contains the other once hyphens are dropped.
    Fuzzy,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Fuzzy => "fuzzy",
        })
    }
}

/// Predicate over (normalized component name, normalized file base name).
type TierPredicate = fn(&str, &str) -> bool;

const TIERS: &[(MatchTier, TierPredicate)] = &[
    (MatchTier::Exact, exact_match),
    (MatchTier::Partial, partial_match),
    (MatchTier::Fuzzy, fuzzy_match),
];

/// Result of resolving one component name against the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMapping {
    pub component: String,
    pub file: Option<DocFile>,
    pub tier: Option<MatchTier>,
}

impl ComponentMapping {
    fn unresolved(component: &str) -> Self {
        Self {
            component: component.to_string(),
            file: None,
            tier: None,
        }
    }

    pub const fn is_resolved(&self) -> bool {
        self.file.is_some()
    }
}

/// Resolve a component name to its documentation file.
pub fn resolve(files: &[DocFile], component: &str) -> Option<DocFile> {
    resolve_mapping(files, component).file
}

/// Resolve a component name, reporting which tier matched.
pub fn resolve_mapping(files: &[DocFile], component: &str) -> ComponentMapping {
    let name = normalize_component_name(component);
    if name.is_empty() {
        return ComponentMapping::unresolved(component);
    }

    let bases: Vec<(&DocFile, String)> = files
        .iter()
        .map(|file| (file, file.normalized_name()))
        .collect();

    TIERS
        .iter()
        .find_map(|(tier, matches)| {
            bases
                .iter()
                .find(|(_, base)| matches(&name, base))
                .map(|(file, _)| ComponentMapping {
                    component: component.to_string(),
                    file: Some((*file).clone()),
                    tier: Some(*tier),
                })
        })
        .unwrap_or_else(|| ComponentMapping::unresolved(component))
}

fn exact_match(name: &str, base: &str) -> bool {
    name == base
}

fn partial_match(name: &str, base: &str) -> bool {
    is_segment_prefix(name, base) || is_segment_prefix(base, name)
}

fn fuzzy_match(name: &str, base: &str) -> bool {
    let mut base_segments = segments(base);
    if segments(name).all(|wanted| base_segments.any(|segment| segment == wanted)) {
        return true;
    }

    let (name, base) = (compact(name), compact(base));
    !name.is_empty() && !base.is_empty() && (base.contains(&name) || name.contains(&base))
}

/// Name with hyphens removed, so `date-picker` and `datepicker` compare equal.
fn compact(normalized: &str) -> String {
    normalized.replace('-', "")
}

/// `short` is `long` up to a hyphen boundary, e.g. `button` / `button-group`.
fn is_segment_prefix(short: &str, long: &str) -> bool {
    !short.is_empty()
        && long
            .strip_prefix(short)
            .is_some_and(|rest| rest.starts_with('-'))
}
