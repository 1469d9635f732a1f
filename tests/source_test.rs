//! Integration tests for document sources and the fetch pipeline.

use std::collections::HashMap;
use std::io::Write;

use dochtml::render::RenderOptions;
use dochtml::source::DocumentSource;
use dochtml::{Document, DocumentKey, Error, Paragraph, Result};

/// In-memory source for testing.
struct MockSource {
    collection_id: &'static str,
    documents: HashMap<String, Document>,
}

impl MockSource {
    fn new(collection_id: &'static str) -> Self {
        Self {
            collection_id,
            documents: HashMap::new(),
        }
    }

    fn insert(&mut self, name: &str, doc: Document) {
        self.documents.insert(name.to_string(), doc);
    }
}

impl DocumentSource for MockSource {
    fn find_by_name(&self, name: &str, collection_id: &str) -> Result<DocumentKey> {
        if collection_id != self.collection_id || !self.documents.contains_key(name) {
            return Err(Error::NotFound(name.to_string()));
        }
        Ok(DocumentKey::new(format!("id-{}", name), name))
    }

    fn fetch(&self, key: &DocumentKey) -> Result<Document> {
        self.documents
            .get(&key.name)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.name.clone()))
    }
}

/// Source that always fails with a fixed error.
struct FailingSource {
    status: u16,
}

impl DocumentSource for FailingSource {
    fn find_by_name(&self, name: &str, _collection_id: &str) -> Result<DocumentKey> {
        match self.status {
            404 => Err(Error::NotFound(name.to_string())),
            403 => Err(Error::AccessDenied),
            status => Err(Error::Provider {
                status,
                message: "boom".to_string(),
            }),
        }
    }

    fn fetch(&self, _key: &DocumentKey) -> Result<Document> {
        unreachable!("lookup already failed")
    }
}

fn sample_doc(title: &str) -> Document {
    let mut doc = Document::with_title(title);
    doc.add_paragraph(Paragraph::heading("Intro", 1));
    doc.add_paragraph(Paragraph::with_text("Body."));
    doc
}

#[test]
fn test_fetch_by_name_composes_find_and_fetch() {
    let mut source = MockSource::new("col");
    source.insert("Notes", sample_doc("Notes"));

    let doc = source.fetch_by_name("Notes", "col").unwrap();
    assert_eq!(doc.title, "Notes");
    assert_eq!(doc.element_count(), 2);
}

#[test]
fn test_fetch_document_validates_before_lookup() {
    let source = MockSource::new("col");

    let err = dochtml::fetch_document(&source, "", "col").unwrap_err();
    assert!(matches!(err, Error::InputMissing));

    let err = dochtml::fetch_document(&source, "Notes", "  ").unwrap_err();
    assert!(matches!(err, Error::ConfigurationMissing(_)));
}

#[test]
fn test_fetch_document_not_found() {
    let source = MockSource::new("col");

    let err = dochtml::fetch_document(&source, "Missing", "col").unwrap_err();
    assert!(matches!(err, Error::NotFound(ref name) if name == "Missing"));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_wrong_collection_is_not_found() {
    let mut source = MockSource::new("col");
    source.insert("Notes", sample_doc("Notes"));

    let err = dochtml::fetch_document(&source, "Notes", "other").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_fetch_html_end_to_end() {
    let mut source = MockSource::new("col");
    source.insert("Notes", sample_doc("Notes"));

    let html =
        dochtml::fetch_html(&source, "Notes", "col", &RenderOptions::default()).unwrap();
    assert!(html.contains("<title>Notes</title>"));
    assert!(html.contains("<h1>Intro</h1>"));
    assert!(html.contains("<p>Body.</p>"));
}

#[test]
fn test_access_denied_propagates_unchanged() {
    let source = FailingSource { status: 403 };

    let err = dochtml::fetch_html(&source, "Notes", "col", &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::AccessDenied));
    assert_eq!(err.status_code(), 403);
}

#[test]
fn test_provider_error_keeps_status() {
    let source = FailingSource { status: 503 };

    let err = dochtml::fetch_document(&source, "Notes", "col").unwrap_err();
    match err {
        Error::Provider { status, ref message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected provider error, got {:?}", other),
    }
    assert_eq!(err.status_code(), 503);
}

#[test]
fn test_builder_fetch_renders() {
    let mut source = MockSource::new("col");
    source.insert("Notes", sample_doc("Notes"));

    let html = dochtml::Dochtml::new()
        .fetch(&source, "Notes", "col")
        .unwrap()
        .to_html();
    assert!(html.contains("<h1>Notes</h1>"));
}

#[test]
fn test_parse_json_file() {
    let payload = r#"{
        "title": "Saved",
        "body": {"content": [
            {"paragraph": {"elements": [{"textRun": {"content": "from disk"}}]}}
        ]}
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(payload.as_bytes()).unwrap();

    let doc = dochtml::parse_json_file(file.path()).unwrap();
    assert_eq!(doc.title, "Saved");
    assert_eq!(doc.plain_text(), "from disk");
}

#[test]
fn test_payload_styles_render_with_matching_classes() {
    let payload = r#"{
        "title": "T",
        "body": {"content": [
            {"paragraph": {"elements": [{"textRun": {"content": "it", "textStyle": {"italic": true}}}]}},
            {"paragraph": {"elements": [{"textRun": {"content": "un", "textStyle": {"underline": true}}}]}},
            {"paragraph": {"elements": [{"textRun": {"content": "x", "textStyle": {"bold": true, "italic": true, "underline": true}}}]}}
        ]}
    }"#;

    let doc = dochtml::parse_json(payload).unwrap();
    let html = dochtml::render::to_html(&doc, &RenderOptions::default());

    assert!(html.contains("<p><span class=\"italic\">it</span></p>"));
    assert!(html.contains("<p><span class=\"underline\">un</span></p>"));
    assert!(html.contains(
        "<p><span class=\"underline\"><span class=\"italic\"><span class=\"bold\">x</span></span></span></p>"
    ));
}

#[test]
fn test_parse_json_file_missing_is_io_error() {
    let err = dochtml::parse_json_file("/nonexistent/payload.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_parse_json_file_garbage_is_decode_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json at all").unwrap();

    let err = dochtml::parse_json_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_to_html_file_convenience() {
    let payload = r#"{"title": "Page", "body": {"content": []}}"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(payload.as_bytes()).unwrap();

    let html = dochtml::to_html(file.path()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Page</title>"));
}
