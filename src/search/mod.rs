//! Full-text line search across the corpus.

pub(crate) mod context;
pub mod engine;

pub use context::{ContextWindow, merge_windows};
pub use engine::{MAX_SEARCH_RESULTS, SearchMatch, search, search_content};
