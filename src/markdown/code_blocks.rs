//! Fenced code block extraction.

use crate::markdown::is_fence;

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Info string after the opening fence, e.g. `tsx`.
    pub language: Option<String>,
    pub code: String,
}

impl CodeBlock {
    /// Render the block back to fenced markdown.
    pub fn to_markdown(&self) -> String {
        format!(
            "```{}\n{}\n```",
            self.language.as_deref().unwrap_or(""),
            self.code
        )
    }
}

/// Every fenced code block in document order. An unterminated fence is dropped.
pub fn code_blocks(content: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(Option<String>, Vec<&str>)> = None;

    for line in content.lines() {
        if is_fence(line) {
            match current.take() {
                Some((language, body)) => blocks.push(CodeBlock {
                    language,
                    code: body.join("\n"),
                }),
                None => {
                    let info = line.trim_start().trim_start_matches(['`', '~']).trim();
                    let language = (!info.is_empty()).then(|| info.to_string());
                    current = Some((language, Vec::new()));
                }
            }
            continue;
        }
        if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    blocks
}
