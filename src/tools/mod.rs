//! Tool handlers. Each module owns its request type and renders text output.
//!
//! Not-found conditions are rendered as text; only I/O failures on an already
//! resolved document are returned as errors.

pub mod analyze_mentions;
pub mod component_info;
pub mod component_props;
pub mod design_guidelines;
pub mod design_tokens;
pub mod find_component;
pub mod list_components;
pub mod search_docs;
pub mod usage_examples;

pub use analyze_mentions::{AnalyzeMentionsRequest, handle_analyze_mentions};
pub use component_info::{ComponentInfoRequest, handle_component_info};
pub use component_props::{ComponentPropsRequest, handle_component_props};
pub use design_guidelines::{DesignGuidelinesRequest, handle_design_guidelines};
pub use design_tokens::{DesignTokensRequest, handle_design_tokens};
pub use find_component::{FindComponentRequest, handle_find_component};
pub use list_components::{CategoryFilter, ListComponentsRequest, handle_list_components};
pub use search_docs::{SearchDocsRequest, handle_search_docs};
pub use usage_examples::{UsageExamplesRequest, handle_usage_examples};

use crate::component::suggest::format_suggestions;
use crate::component::{ComponentMapping, MatchTier, resolve_mapping, suggest_components};
use crate::config::DocsConfig;
use crate::corpus::{DocFile, list_doc_files, read_doc};
use crate::error::Result;
use crate::markdown::{Section, find_section};

/// Suggestions shown when a component cannot be resolved.
const SUGGESTION_LIMIT: usize = 5;

/// A component resolved to its documentation, with the content loaded.
#[derive(Debug)]
pub(crate) struct ResolvedComponent {
    pub file: DocFile,
    pub tier: MatchTier,
    pub content: String,
}

/// Outcome of looking a component up for a tool.
#[derive(Debug)]
pub(crate) enum ComponentLookup {
    Found(ResolvedComponent),
    /// Rendered not-found text, including suggestions.
    Missing(String),
}

/// Resolve `component` and read its documentation.
pub(crate) fn resolve_component(config: &DocsConfig, component: &str) -> Result<ComponentLookup> {
    let files = list_doc_files(config.root());
    let ComponentMapping { file, tier, .. } = resolve_mapping(&files, component);

    let (Some(file), Some(tier)) = (file, tier) else {
        let suggestions = suggest_components(&files, component, SUGGESTION_LIMIT);
        return Ok(ComponentLookup::Missing(format!(
            "Component '{}' not found in documentation.\n{}",
            component.trim(),
            format_suggestions(&suggestions)
        )
        .trim_end()
        .to_string()));
    };

    let content = read_doc(config.root(), &file)?;
    Ok(ComponentLookup::Found(ResolvedComponent {
        file,
        tier,
        content,
    }))
}

/// The first section documenting a component's props.
pub(crate) fn props_section(content: &str) -> Option<Section> {
    find_section(content, |heading| {
        let text = heading.text.to_lowercase();
        text.contains("props") || text.contains("properties") || text == "api"
    })
}
