//! Runtime configuration for the documentation server.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable overriding the documentation root.
pub const DOCS_PATH_ENV: &str = "IDS_DOCS_PATH";

/// Directory name used when no override is set, relative to the working directory.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Name of the design guidelines document at the corpus root.
pub const GUIDELINES_FILE: &str = "guidelines.md";

/// Where the markdown corpus lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    root: PathBuf,
}

impl DocsConfig {
    /// Create a configuration rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build the configuration from the process environment.
    ///
    /// `IDS_DOCS_PATH` wins when set and non-empty; otherwise `./docs` relative
    /// to the current working directory.
    pub fn from_env() -> Self {
        match std::env::var(DOCS_PATH_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                Self::new(PathBuf::from(expand_tilde(value.trim()).as_ref()))
            }
            _ => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::new(cwd.join(DEFAULT_DOCS_DIR))
            }
        }
    }

    /// The documentation root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
