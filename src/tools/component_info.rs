//! Overview of a single component's documentation.

use super::{ComponentLookup, props_section, resolve_component};
use crate::config::DocsConfig;
use crate::error::Result;
use crate::markdown::{code_blocks, first_paragraph, headings};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Examples included in the overview.
const MAX_INFO_EXAMPLES: usize = 3;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComponentInfoRequest {
    /// Component name (e.g. "IressButton")
    pub component_name: String,
    /// Include up to three code examples (default: true)
    #[serde(default = "default_include_examples")]
    pub include_examples: bool,
}

fn default_include_examples() -> bool {
    true
}

/// Summarise a component: mapped file, description, outline, props and examples.
pub fn handle_component_info(config: &DocsConfig, request: ComponentInfoRequest) -> Result<String> {
    let component = match resolve_component(config, &request.component_name)? {
        ComponentLookup::Found(component) => component,
        ComponentLookup::Missing(message) => return Ok(message),
    };

    let name = request.component_name.trim();
    let all_headings = headings(&component.content);
    let title = all_headings
        .iter()
        .find(|h| h.level == 1)
        .map_or(name, |h| h.text.as_str());

    let mut output = format!("# {}\n\n", title);
    let _ = writeln!(
        output,
        "Documentation: {} ({} match for {})",
        component.file.path(),
        component.tier,
        name
    );

    if let Some(summary) = first_paragraph(&component.content) {
        let _ = writeln!(output, "\n{}", summary);
    }

    let outline: Vec<&str> = all_headings
        .iter()
        .filter(|h| (2..=3).contains(&h.level))
        .map(|h| h.text.as_str())
        .collect();
    if !outline.is_empty() {
        output.push_str("\n## Sections\n");
        for heading in outline {
            let _ = writeln!(output, "- {}", heading);
        }
    }

    output.push_str("\n## Props\n\n");
    match props_section(&component.content) {
        Some(section) => {
            // Drop the heading line, it is replaced by ours.
            let body = section.text.lines().skip(1).collect::<Vec<_>>().join("\n");
            let _ = writeln!(output, "{}", body.trim());
        }
        None => output.push_str("No props section documented.\n"),
    }

    if request.include_examples {
        let examples = code_blocks(&component.content);
        if examples.is_empty() {
            output.push_str("\n## Examples\n\nNo examples documented.\n");
        } else {
            let _ = writeln!(
                output,
                "\n## Examples (showing {} of {})",
                examples.len().min(MAX_INFO_EXAMPLES),
                examples.len()
            );
            for example in examples.iter().take(MAX_INFO_EXAMPLES) {
                let _ = writeln!(output, "\n{}", example.to_markdown());
            }
        }
    }

    Ok(output.trim_end().to_string())
}
