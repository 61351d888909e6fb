//! Document repositories
//!
//! Each persisted record is one whole JSON document. This layer turns raw
//! storage values into domain documents and back.

pub mod document;

pub use document::{Document, DocumentRepository};
