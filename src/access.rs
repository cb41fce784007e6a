//! Resource access control.
//!
//! Every path handed to the filesystem is first resolved (symlinks, `.` and
//! `..` segments, separator variants) and then checked component-wise against
//! the resolved documentation root. String prefixes on unresolved paths are
//! never trusted.

use crate::corpus::list_doc_files;
use crate::error::{DocsError, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use tracing::{error, warn};

/// The only scheme accepted for resource URIs.
pub const FILE_SCHEME: &str = "file";

/// MIME type reported for every corpus document.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Content of a successfully read resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// A listable corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub mime_type: String,
}

/// Split a `scheme://path` identifier and return the requested path.
///
/// Backslashes are treated as separators so `..\..\` cannot slip past
/// component resolution on hosts where `\` is an ordinary character.
pub fn parse_resource_uri(uri: &str) -> Result<PathBuf> {
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| DocsError::InvalidUri(uri.to_string()))?;

    if !scheme.eq_ignore_ascii_case(FILE_SCHEME) {
        return Err(DocsError::UnsupportedProtocol(scheme.to_string()));
    }

    // file://localhost/path is the same as file:///path
    let rest = rest
        .strip_prefix("localhost")
        .filter(|path| path.starts_with('/'))
        .unwrap_or(rest);

    Ok(PathBuf::from(rest.replace('\\', "/")))
}

/// Resolve `candidate` and verify it stays inside `root`.
///
/// Relative candidates are interpreted against the root. Returns the resolved
/// path, which is the one callers must use for I/O.
pub fn confine_to_root(root: &Path, candidate: &Path) -> Result<PathBuf> {
    let root = resolve_path(root);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };
    let resolved = resolve_path(&joined);

    if resolved.starts_with(&root) {
        Ok(resolved)
    } else {
        warn!(
            "Denied access to {} (outside {})",
            resolved.display(),
            root.display()
        );
        Err(DocsError::AccessDenied)
    }
}

/// Read a resource by URI, confined to the documentation root.
pub fn read_resource(root: &Path, uri: &str) -> Result<ResourceContent> {
    let requested = parse_resource_uri(uri)?;
    let path = confine_to_root(root, &requested)?;

    let text = std::fs::read_to_string(&path).map_err(|source| {
        error!("Failed to read resource {}: {}", path.display(), source);
        DocsError::ResourceRead {
            path: path.clone(),
            source,
        }
    })?;

    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type: MARKDOWN_MIME.to_string(),
        text,
    })
}

/// Describe every indexed document as a `file://` resource.
pub fn list_resources(root: &Path) -> Vec<ResourceDescriptor> {
    let resolved_root = resolve_path(root);
    list_doc_files(root)
        .into_iter()
        .map(|doc| ResourceDescriptor {
            uri: format!("{}://{}", FILE_SCHEME, resolved_root.join(doc.path()).display()),
            name: doc.path().to_string(),
            mime_type: MARKDOWN_MIME.to_string(),
        })
        .collect()
}

/// Absolute, symlink-free form of `path`.
///
/// The longest existing ancestor is canonicalized by the OS; any remaining
/// (not yet existing) segments are appended after lexical normalization.
fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let normalized = normalize_lexically(&absolute);

    let mut existing = normalized.as_path();
    let mut missing: Vec<OsString> = Vec::new();
    loop {
        if let Ok(canonical) = std::fs::canonicalize(existing) {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc, segment| acc.join(segment));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return normalized,
        }
    }
}

/// Remove `.` segments and fold `..` segments without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
