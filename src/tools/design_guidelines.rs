use crate::config::DocsConfig;
use crate::error::Result;
use crate::extract::design_guidelines;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DesignGuidelinesRequest {
    /// Section heading to return (e.g. "Accessibility")
    #[serde(default)]
    pub section: Option<String>,
    /// Only return lines containing this text, with surrounding context
    #[serde(default)]
    pub query: Option<String>,
}

/// Return the design guidelines, optionally filtered by section and query.
pub fn handle_design_guidelines(
    config: &DocsConfig,
    request: DesignGuidelinesRequest,
) -> Result<String> {
    Ok(design_guidelines(
        config.root(),
        request.section.as_deref(),
        request.query.as_deref(),
    ))
}
