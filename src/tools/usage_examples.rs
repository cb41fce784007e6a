use super::{ComponentLookup, resolve_component};
use crate::config::DocsConfig;
use crate::error::Result;
use crate::markdown::code_blocks;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Examples rendered per request.
const MAX_EXAMPLES: usize = 10;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UsageExamplesRequest {
    /// Component name (e.g. "IressButton")
    pub component_name: String,
    /// Only return examples containing this text (case-insensitive)
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Return fenced code examples from a component's documentation.
pub fn handle_usage_examples(config: &DocsConfig, request: UsageExamplesRequest) -> Result<String> {
    let component = match resolve_component(config, &request.component_name)? {
        ComponentLookup::Found(component) => component,
        ComponentLookup::Missing(message) => return Ok(message),
    };

    let name = request.component_name.trim();
    let pattern = request
        .pattern
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let needle = pattern.map(str::to_lowercase);

    let examples: Vec<_> = code_blocks(&component.content)
        .into_iter()
        .filter(|block| {
            needle
                .as_deref()
                .is_none_or(|needle| block.code.to_lowercase().contains(needle))
        })
        .collect();

    if examples.is_empty() {
        return Ok(match pattern {
            Some(pattern) => format!(
                "No usage examples matching '{}' found for '{}' in {}.",
                pattern,
                name,
                component.file.path()
            ),
            None => format!(
                "No usage examples found for '{}' in {}.",
                name,
                component.file.path()
            ),
        });
    }

    let mut output = format!("# Usage examples for {}\n\nSource: {}\n", name, component.file.path());
    if examples.len() > MAX_EXAMPLES {
        let _ = writeln!(
            output,
            "Showing {} of {} examples.",
            MAX_EXAMPLES,
            examples.len()
        );
    }
    for (idx, example) in examples.iter().take(MAX_EXAMPLES).enumerate() {
        let _ = write!(output, "\n### Example {}\n\n{}\n", idx + 1, example.to_markdown());
    }

    Ok(output.trim_end().to_string())
}
