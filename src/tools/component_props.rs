use super::{ComponentLookup, props_section, resolve_component};
use crate::config::DocsConfig;
use crate::error::Result;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComponentPropsRequest {
    /// Component name (e.g. "IressButton")
    pub component_name: String,
}

/// Return the props section of a component's documentation.
pub fn handle_component_props(
    config: &DocsConfig,
    request: ComponentPropsRequest,
) -> Result<String> {
    let component = match resolve_component(config, &request.component_name)? {
        ComponentLookup::Found(component) => component,
        ComponentLookup::Missing(message) => return Ok(message),
    };

    Ok(match props_section(&component.content) {
        Some(section) => format!(
            "# {} props\n\nSource: {}\n\n{}",
            request.component_name.trim(),
            component.file.path(),
            section.text
        ),
        None => format!(
            "No props documentation found for '{}' in {}.",
            request.component_name.trim(),
            component.file.path()
        ),
    })
}
