//! File index over the documentation root.
//!
//! The index is rebuilt on every call. Nothing is cached, so a regenerated
//! corpus is picked up by the next request.

use ignore::WalkBuilder;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};
use tracing::{debug, warn};

/// Prefixes that identify a document's category, in match order.
const CATEGORY_PREFIXES: &[(&str, DocCategory)] = &[
    ("components-", DocCategory::Components),
    ("foundations-", DocCategory::Foundations),
    ("resources-", DocCategory::Resources),
    ("introduction", DocCategory::Introduction),
];

/// Documentation category, derived from the file naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocCategory {
    Components,
    Foundations,
    Resources,
    Introduction,
    Other,
}

impl DocCategory {
    /// All categories in listing order.
    pub const ALL: [Self; 5] = [
        Self::Components,
        Self::Foundations,
        Self::Resources,
        Self::Introduction,
        Self::Other,
    ];

    /// Human-readable heading used in listings.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Components => "Components",
            Self::Foundations => "Foundations",
            Self::Resources => "Resources",
            Self::Introduction => "Introduction",
            Self::Other => "Other",
        }
    }

    fn from_file_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        CATEGORY_PREFIXES
            .iter()
            .find(|(prefix, _)| lower.starts_with(prefix))
            .map_or(Self::Other, |(_, category)| *category)
    }
}

impl fmt::Display for DocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One markdown document, addressed relative to the corpus root.
///
/// The path always uses `/` separators and never leaves the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocFile {
    path: String,
}

impl DocFile {
    /// Wrap a root-relative path. Backslashes are normalised to `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        Self {
            path: path.replace('\\', "/"),
        }
    }

    /// Root-relative path with forward slashes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment, e.g. `components-button-docs.md`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Category inferred from the file name prefix.
    pub fn category(&self) -> DocCategory {
        DocCategory::from_file_name(self.file_name())
    }

    /// Base name with extension, category prefix and `-docs` suffix removed.
    ///
    /// `components-button-docs.md` becomes `button`.
    pub fn normalized_name(&self) -> String {
        let lower = self.file_name().to_lowercase();
        let stem = lower.strip_suffix(".md").unwrap_or(&lower);
        let stem = CATEGORY_PREFIXES
            .iter()
            .find_map(|(prefix, _)| {
                stem.strip_prefix(prefix)
                    .map(|rest| rest.strip_prefix('-').unwrap_or(rest))
            })
            .filter(|rest| !rest.is_empty())
            .unwrap_or(stem);
        stem.strip_suffix("-docs").unwrap_or(stem).to_string()
    }
}

impl fmt::Display for DocFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for DocFile {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Enumerate every markdown document under `root`.
///
/// A missing root yields an empty index. Unreadable entries are logged and
/// skipped, so callers see fewer documents rather than an error. Results are
/// sorted by path, which defines "index order" for the rest of the crate.
pub fn list_doc_files(root: &Path) -> Vec<DocFile> {
    if !root.is_dir() {
        debug!("Docs root {} does not exist, index is empty", root.display());
        return Vec::new();
    }

    let mut files: Vec<DocFile> = WalkBuilder::new(root)
        .standard_filters(false)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable docs entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| is_markdown(entry.path()))
        .filter_map(|entry| relative_doc_path(root, entry.path()))
        .map(DocFile::new)
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Indexed {} docs under {}", files.len(), root.display());
    files
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Root-relative, `/`-joined form of `path`, or `None` if it is not expressible.
fn relative_doc_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            _ => return None,
        }
    }
    (!segments.is_empty()).then(|| segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("components-button-docs.md", "button", DocCategory::Components)]
    #[case("components-button-group-docs.md", "button-group", DocCategory::Components)]
    #[case("foundations-colours.md", "colours", DocCategory::Foundations)]
    #[case("resources-icons-docs.md", "icons", DocCategory::Resources)]
    #[case("introduction.md", "introduction", DocCategory::Introduction)]
    #[case("introduction-getting-started.md", "getting-started", DocCategory::Introduction)]
    #[case("guidelines.md", "guidelines", DocCategory::Other)]
    #[case("nested/Components-Card-docs.md", "card", DocCategory::Components)]
    fn test_doc_file_naming(
        #[case] path: &str,
        #[case] expected_name: &str,
        #[case] expected_category: DocCategory,
    ) {
        let doc = DocFile::new(path);
        check!(doc.normalized_name() == expected_name);
        check!(doc.category() == expected_category);
    }

    #[test]
    fn test_backslashes_are_normalised() {
        let doc = DocFile::new(r"nested\components-tag-docs.md");
        check!(doc.path() == "nested/components-tag-docs.md");
        check!(doc.file_name() == "components-tag-docs.md");
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        check!(list_doc_files(&temp.path().join("absent")).is_empty());
    }

    #[test]
    fn test_lists_markdown_recursively_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("components-tag-docs.md"), "# Tag").unwrap();
        std::fs::write(root.join("components-alert-docs.md"), "# Alert").unwrap();
        std::fs::write(root.join("sub/foundations-spacing.MD"), "# Spacing").unwrap();
        std::fs::write(root.join("notes.txt"), "not markdown").unwrap();
        std::fs::write(root.join(".hidden.md"), "# hidden docs are still docs").unwrap();

        let files: Vec<String> = list_doc_files(root)
            .into_iter()
            .map(|f| f.path().to_string())
            .collect();

        check!(
            files
                == vec![
                    ".hidden.md".to_string(),
                    "components-alert-docs.md".to_string(),
                    "components-tag-docs.md".to_string(),
                    "sub/foundations-spacing.MD".to_string(),
                ]
        );
    }
}
