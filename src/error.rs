//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for ids-docs-mcp operations.
pub type Result<T, E = DocsError> = std::result::Result<T, E>;

/// Failures that cross the tool boundary.
///
/// Recoverable "nothing found" conditions never appear here; they are rendered
/// as text in a normal [`ToolResponse`](crate::dispatch::ToolResponse).
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments failed schema validation.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// A resource identifier without a `scheme://` separator.
    #[error("Invalid resource URI: {0}")]
    InvalidUri(String),

    /// A resource identifier using anything other than `file://`.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// The resolved path escapes the documentation root.
    #[error("Access denied: File is outside the docs directory")]
    AccessDenied,

    /// A directly requested resource could not be read.
    #[error("Failed to read resource {}: {source}", path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocsError {
    /// Whether this error was caused by the caller's input rather than the corpus.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::InvalidArguments { .. } | Self::InvalidUri(_)
        )
    }

    /// Whether this error is an access-control violation.
    pub fn is_security_violation(&self) -> bool {
        matches!(self, Self::AccessDenied | Self::UnsupportedProtocol(_))
    }
}
