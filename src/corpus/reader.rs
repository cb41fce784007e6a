//! Boundary-checked content readers.

use crate::access::confine_to_root;
use crate::corpus::DocFile;
use crate::error::{DocsError, Result};
use std::path::Path;

/// Read a document from the corpus.
///
/// The document path is confined to `root` before any I/O happens.
pub fn read_doc(root: &Path, doc: &DocFile) -> Result<String> {
    let path = confine_to_root(root, Path::new(doc.path()))?;
    std::fs::read_to_string(&path).map_err(|source| DocsError::Io { path, source })
}

/// Whether a document exists inside the corpus root.
pub fn doc_exists(root: &Path, doc: &DocFile) -> bool {
    confine_to_root(root, Path::new(doc.path())).is_ok_and(|path| path.is_file())
}
