use crate::component::{extract_mentions, resolve_mapping, suggest_components};
use crate::config::DocsConfig;
use crate::corpus::list_doc_files;
use crate::error::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMentionsRequest {
    /// Free text (code, prose, a design brief) to scan for Iress component names
    pub text: String,
}

/// Find component names in free text and map each to its documentation.
pub fn handle_analyze_mentions(
    config: &DocsConfig,
    request: AnalyzeMentionsRequest,
) -> Result<String> {
    let mentions = extract_mentions(&request.text);
    if mentions.is_empty() {
        return Ok("No Iress components mentioned in the provided text.".to_string());
    }

    let files = list_doc_files(config.root());
    let mut documented = 0;
    let mut output = format!("Found {} component mention(s):\n\n", mentions.len());

    for mention in &mentions {
        let mapping = resolve_mapping(&files, mention);
        match (&mapping.file, mapping.tier) {
            (Some(file), Some(tier)) => {
                documented += 1;
                let _ = writeln!(output, "✓ {} → {} ({} match)", mention, file.path(), tier);
            }
            _ => {
                let _ = write!(output, "✗ {} → no documentation found", mention);
                if let Some(best) = suggest_components(&files, mention, 1).first() {
                    let _ = write!(output, " (did you mean {}?)", best.name);
                }
                output.push('\n');
            }
        }
    }

    let _ = write!(
        output,
        "\nDocumented: {} of {}",
        documented,
        mentions.len()
    );

    Ok(output)
}
