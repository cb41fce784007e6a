//! Documentation resolution and search for the Iress Design System.
//!
//! Indexes a directory of generated markdown documentation and answers
//! component lookups, full-text searches, design token and guideline queries,
//! and confined raw file reads. [`Dispatcher`] is the entry point for tool
//! calls; [`DocsServer`] exposes it over MCP.

pub mod access;
pub mod component;
pub mod config;
pub mod corpus;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod schema;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use access::{ResourceContent, ResourceDescriptor, list_resources, read_resource};
pub use component::{ComponentMapping, MatchTier, extract_mentions, resolve, resolve_mapping};
pub use config::DocsConfig;
pub use corpus::{DocCategory, DocFile, list_doc_files};
pub use dispatch::{Dispatcher, ToolRequest, ToolResponse};
pub use error::{DocsError, Result};
pub use search::{SearchMatch, search};
pub use server::DocsServer;
