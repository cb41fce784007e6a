use crate::config::DocsConfig;
use crate::corpus::{DocCategory, DocFile, list_doc_files};
use crate::error::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Which part of the documentation to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    Components,
    Foundations,
    Resources,
    Introduction,
    Other,
    #[default]
    All,
}

impl CategoryFilter {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Foundations => "foundations",
            Self::Resources => "resources",
            Self::Introduction => "introduction",
            Self::Other => "other",
            Self::All => "all",
        }
    }

    const fn includes(self, category: DocCategory) -> bool {
        match self {
            Self::All => true,
            Self::Components => matches!(category, DocCategory::Components),
            Self::Foundations => matches!(category, DocCategory::Foundations),
            Self::Resources => matches!(category, DocCategory::Resources),
            Self::Introduction => matches!(category, DocCategory::Introduction),
            Self::Other => matches!(category, DocCategory::Other),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListComponentsRequest {
    /// Category to list: components, foundations, resources, introduction, other or all (default)
    #[serde(default)]
    pub category: CategoryFilter,
}

/// List indexed documentation grouped by category.
pub fn handle_list_components(
    config: &DocsConfig,
    request: ListComponentsRequest,
) -> Result<String> {
    let files = list_doc_files(config.root());
    if files.is_empty() {
        return Ok(format!(
            "No documentation files found in {}. Generate the documentation first.",
            config.root().display()
        ));
    }

    let selected: Vec<&DocFile> = files
        .iter()
        .filter(|file| request.category.includes(file.category()))
        .collect();

    if selected.is_empty() {
        return Ok(format!(
            "No {} documentation found.",
            request.category.as_str()
        ));
    }

    let mut output = format!("# IDS Documentation ({} files)\n", selected.len());
    for category in DocCategory::ALL {
        let group: Vec<&&DocFile> = selected
            .iter()
            .filter(|file| file.category() == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(output, "\n## {} ({})", category, group.len());
        for file in group {
            let _ = writeln!(output, "- {} ({})", file.normalized_name(), file.path());
        }
    }

    Ok(output.trim_end().to_string())
}
