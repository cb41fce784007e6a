//! Component name handling: normalization, tiered resolution, mention
//! extraction and "did you mean" suggestions.

pub mod mentions;
pub mod normalize;
pub mod resolver;
pub mod suggest;

pub use mentions::extract_mentions;
pub use normalize::{LIBRARY_PREFIX, normalize_component_name};
pub use resolver::{ComponentMapping, MatchTier, resolve, resolve_mapping};
pub use suggest::{Suggestion, suggest_components};
