//! Remote document source over HTTP.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::source::{decode, DocumentKey, DocumentSource};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

/// Default endpoint for name lookup within collections.
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Default endpoint for fetching structured documents.
pub const DEFAULT_DOCUMENT_URL: &str = "https://docs.googleapis.com/v1/documents";

/// MIME type identifying structured documents in the collection.
const DOCUMENT_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// Fields requested from the lookup endpoint.
const SEARCH_FIELDS: &str = "files(id, name, modifiedTime)";

/// Most-recently-modified first, so duplicate names resolve deterministically.
const SEARCH_ORDER: &str = "modifiedTime desc";

/// Cap on lookup results per request.
const SEARCH_PAGE_SIZE: &str = "10";

/// Document source backed by the hosted collection provider.
///
/// Lookup goes against the collection search endpoint, document retrieval
/// against the document endpoint, both authenticated with a bearer token.
pub struct RemoteSource {
    client: Client,
    token: String,
    search_url: String,
    document_url: String,
}

impl RemoteSource {
    /// Create a remote source authenticated with a bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
        }
    }

    /// Override the lookup endpoint.
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Override the document endpoint.
    pub fn with_document_url(mut self, url: impl Into<String>) -> Self {
        self.document_url = url.into();
        self
    }

    /// Supply a preconfigured HTTP client (timeouts, proxies).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

impl DocumentSource for RemoteSource {
    fn find_by_name(&self, name: &str, collection_id: &str) -> Result<DocumentKey> {
        let query = search_query(name, collection_id);

        log::debug!("Searching collection {} for {:?}", collection_id, name);

        let response = self
            .client
            .get(&self.search_url)
            .bearer_auth(&self.token)
            .query(&[
                ("q", query.as_str()),
                ("fields", SEARCH_FIELDS),
                ("pageSize", SEARCH_PAGE_SIZE),
                ("orderBy", SEARCH_ORDER),
            ])
            .send()?;
        let response = check_status(response, name)?;

        let payload = response.text()?;
        let result: SearchResponse = serde_json::from_str(&payload)?;

        let entry = result
            .files
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        log::debug!("Resolved {:?} to document {}", name, entry.id);

        let mut key = DocumentKey::new(entry.id, entry.name);
        key.modified = entry.modified_time;
        Ok(key)
    }

    fn fetch(&self, key: &DocumentKey) -> Result<Document> {
        log::debug!("Fetching document {}", key.id);

        let url = format!("{}/{}", self.document_url, key.id);
        let response = self.client.get(&url).bearer_auth(&self.token).send()?;
        let response = check_status(response, &key.name)?;

        let payload = response.text()?;
        decode::document_from_json(&payload)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    files: Vec<SearchEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SearchEntry {
    id: String,
    name: String,
    modified_time: Option<DateTime<Utc>>,
}

/// Build the lookup query: exact name match within one collection,
/// structured documents only, trashed entries excluded.
fn search_query(name: &str, collection_id: &str) -> String {
    format!(
        "name = '{}' and '{}' in parents and mimeType = '{}' and trashed = false",
        escape_query_value(name),
        escape_query_value(collection_id),
        DOCUMENT_MIME_TYPE
    )
}

/// Escape a value for embedding in single quotes inside a lookup query.
fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Map provider status codes onto the error taxonomy.
fn check_status(response: Response, name: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        404 => Err(Error::NotFound(name.to_string())),
        403 => Err(Error::AccessDenied),
        code => {
            let message = response.text().unwrap_or_default();
            Err(Error::Provider {
                status: code,
                message,
            })
        }
    }
}
