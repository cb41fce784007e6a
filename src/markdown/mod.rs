//! Minimal markdown structure: headings, heading-delimited sections and fenced
//! code blocks. Only what the extractors need, not a general parser.

pub mod code_blocks;
pub mod sections;

pub use code_blocks::{CodeBlock, code_blocks};
pub use sections::{Heading, Section, find_section, first_paragraph, headings, split_sections};

/// Whether a line opens or closes a fenced code block.
pub(crate) fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
