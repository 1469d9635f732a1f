//! Document sources: lookup and retrieval of documents by name.
//!
//! This module defines the provider seam. [`DocumentSource`] abstracts over
//! where documents live; [`RemoteSource`] talks to the hosted collection
//! provider over HTTP, and decoding of provider payloads into the model
//! lives in [`decode`].
//!
//! # Example
//!
//! ```no_run
//! use dochtml::source::{DocumentSource, RemoteSource};
//!
//! fn main() -> dochtml::Result<()> {
//!     let source = RemoteSource::new("ya29.token");
//!     let doc = source.fetch_by_name("Meeting Notes", "collection-id")?;
//!     println!("{}", doc.title);
//!     Ok(())
//! }
//! ```

pub mod decode;
mod remote;

pub use remote::RemoteSource;

use crate::error::Result;
use crate::model::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of one document within a collection, as resolved by lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentKey {
    /// Provider-assigned document id
    pub id: String,

    /// Document name as stored in the collection
    pub name: String,

    /// Last modification time, when the provider reports one
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentKey {
    /// Create a new document key.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modified: None,
        }
    }

    /// Set the modification time.
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }
}

/// Trait for document sources.
///
/// Implement this trait to supply documents from a new backing store.
pub trait DocumentSource: Send + Sync {
    /// Resolve a document name to a key within a collection.
    ///
    /// Matching is exact on name, restricted to structured documents in the
    /// given collection, excluding trashed entries. When several documents
    /// share the name, the most recently modified one wins.
    fn find_by_name(&self, name: &str, collection_id: &str) -> Result<DocumentKey>;

    /// Fetch the full document for a previously resolved key.
    fn fetch(&self, key: &DocumentKey) -> Result<Document>;

    /// Resolve a name and fetch the document in one step.
    fn fetch_by_name(&self, name: &str, collection_id: &str) -> Result<Document> {
        let key = self.find_by_name(name, collection_id)?;
        self.fetch(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_key_builder() {
        let key = DocumentKey::new("abc123", "Notes");
        assert_eq!(key.id, "abc123");
        assert_eq!(key.name, "Notes");
        assert!(key.modified.is_none());

        let ts = "2026-01-15T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let key = key.with_modified(ts);
        assert_eq!(key.modified, Some(ts));
    }
}
