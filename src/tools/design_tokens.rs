use crate::config::DocsConfig;
use crate::error::Result;
use crate::extract::design_tokens;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DesignTokensRequest {
    /// Foundations category to filter by (e.g. "colours", "spacing", "typography"); omit or "all" for every category
    #[serde(default)]
    pub category: Option<String>,
}

/// Extract design tokens from the foundations documentation.
pub fn handle_design_tokens(config: &DocsConfig, request: DesignTokensRequest) -> Result<String> {
    Ok(design_tokens(config.root(), request.category.as_deref()).render())
}
