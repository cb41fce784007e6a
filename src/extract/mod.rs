//! Structured extraction from foundation and guideline documents.

pub mod guidelines;
pub mod tokens;

pub use guidelines::{GuidelineOutcome, design_guidelines, filter_guidelines};
pub use tokens::{TokenFileReport, TokenReport, design_tokens, extract_tokens};
