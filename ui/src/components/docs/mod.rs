//! Interactive API documentation
//!
//! Fetches an OpenAPI-like document at runtime, resolves its
//! `#/components/...` references, and renders a browsable, filterable view
//! with a try-out panel that executes one request at a time.

pub mod document;
pub mod json_tree;
pub mod page;
pub mod resolver;
pub mod try_out;

pub use page::ApiDocs;
