//! # dochtml
//!
//! Fetch structured documents by name from a shared collection and render
//! them to semantic HTML.
//!
//! The library has three layers: a provider-agnostic document model, a
//! deterministic HTML renderer, and a source layer that resolves a document
//! name within a collection and decodes the provider payload into the model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dochtml::source::RemoteSource;
//! use dochtml::RenderOptions;
//!
//! fn main() -> dochtml::Result<()> {
//!     let source = RemoteSource::new("ya29.token");
//!     let html = dochtml::fetch_html(
//!         &source,
//!         "Meeting Notes",
//!         "collection-id",
//!         &RenderOptions::default(),
//!     )?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! Payloads saved to disk render without any network access:
//!
//! ```no_run
//! use dochtml::render::{to_html, RenderOptions};
//!
//! fn main() -> dochtml::Result<()> {
//!     let doc = dochtml::parse_json_file("document.json")?;
//!     let html = to_html(&doc, &RenderOptions::default());
//!     std::fs::write("document.html", html)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Name-based lookup**: exact-name search within one collection, with a
//!   deterministic most-recently-modified tie-break for duplicates
//! - **Structure preservation**: headings (levels 1-3), styled text runs,
//!   tables
//! - **Deterministic rendering**: the same document always produces the same
//!   bytes
//! - **Escaped by default**: document text is HTML-escaped unless raw mode
//!   is requested
//! - **Pluggable sources**: implement [`source::DocumentSource`] to serve
//!   documents from anywhere

pub mod error;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Document, Element, NamedStyle, Paragraph, Table, TableCell, TableRow, TextRun, UNTITLED,
};
pub use render::{JsonFormat, RenderOptions};
pub use source::{DocumentKey, DocumentSource, RemoteSource};

use std::path::Path;

/// Parse a provider document payload from a JSON string.
///
/// # Example
///
/// ```
/// let doc = dochtml::parse_json(r#"{"title": "Notes", "body": {"content": []}}"#).unwrap();
/// assert_eq!(doc.title, "Notes");
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    source::decode::document_from_json(json)
}

/// Parse a provider document payload from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = dochtml::parse_json_file("document.json").unwrap();
/// println!("{}", doc.title);
/// ```
pub fn parse_json_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

/// Render a saved payload file to a complete HTML page with default options.
///
/// # Example
///
/// ```no_run
/// let html = dochtml::to_html("document.json").unwrap();
/// std::fs::write("document.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_json_file(path)?;
    Ok(render::to_html(&doc, &RenderOptions::default()))
}

/// Render a saved payload file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_json_file(path)?;
    Ok(render::to_html(&doc, options))
}

/// Render a saved payload file to model JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_json_file(path)?;
    render::to_json(&doc, format)
}

/// Look up a document by name in a collection and fetch it.
///
/// An all-whitespace name is rejected before the source is consulted; an
/// empty collection id counts as missing configuration.
pub fn fetch_document(
    source: &dyn DocumentSource,
    name: &str,
    collection_id: &str,
) -> Result<Document> {
    if name.trim().is_empty() {
        return Err(Error::InputMissing);
    }
    if collection_id.trim().is_empty() {
        return Err(Error::ConfigurationMissing("collection id".to_string()));
    }

    source.fetch_by_name(name, collection_id)
}

/// Look up a document by name and render it to a complete HTML page.
pub fn fetch_html(
    source: &dyn DocumentSource,
    name: &str,
    collection_id: &str,
    options: &RenderOptions,
) -> Result<String> {
    let doc = fetch_document(source, name, collection_id)?;
    Ok(render::to_html(&doc, options))
}

/// Builder for fetching and rendering documents.
///
/// # Example
///
/// ```no_run
/// use dochtml::{Dochtml, RemoteSource};
///
/// let source = RemoteSource::new("ya29.token");
/// let html = Dochtml::new()
///     .with_extra_css("body { background: #fafafa; }")
///     .fetch(&source, "Meeting Notes", "collection-id")?
///     .to_html();
/// # Ok::<(), dochtml::Error>(())
/// ```
pub struct Dochtml {
    render_options: RenderOptions,
}

impl Dochtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Pass document text through unescaped.
    pub fn raw_text(mut self) -> Self {
        self.render_options = self.render_options.with_escaping(false);
        self
    }

    /// Append extra CSS to the page stylesheet.
    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_extra_css(css);
        self
    }

    /// Replace the render options wholesale.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse a payload string and return a result wrapper.
    pub fn parse(self, json: &str) -> Result<DochtmlResult> {
        let document = parse_json(json)?;
        Ok(DochtmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a payload file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<DochtmlResult> {
        let document = parse_json_file(path)?;
        Ok(DochtmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Look up a document by name and return a result wrapper.
    pub fn fetch(
        self,
        source: &dyn DocumentSource,
        name: &str,
        collection_id: &str,
    ) -> Result<DochtmlResult> {
        let document = fetch_document(source, name, collection_id)?;
        Ok(DochtmlResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Dochtml {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of obtaining a document, ready to render.
pub struct DochtmlResult {
    /// The decoded document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DochtmlResult {
    /// Render to a complete HTML page.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to model JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the plain text of the document body.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
