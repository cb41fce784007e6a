//! The markdown corpus: enumeration and boundary-checked reads.

pub mod index;
pub mod reader;

pub use index::{DocCategory, DocFile, list_doc_files};
pub use reader::{doc_exists, read_doc};
