//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Fallback title for documents without one.
pub const UNTITLED: &str = "Untitled Document";

/// A structured document: a title and an ordered sequence of body elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Body elements in document order
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document with the fallback title.
    pub fn new() -> Self {
        Self {
            title: UNTITLED.to_string(),
            elements: Vec::new(),
        }
    }

    /// Create a new empty document with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element to the document.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(Element::Paragraph(paragraph));
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Element::Table(table));
    }

    /// Get the number of body elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document body is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get plain text content of the entire document body.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|element| match element {
                Element::Paragraph(p) => p.plain_text(),
                Element::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A body element in a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Element {
    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.title, UNTITLED);
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_document_with_content() {
        let mut doc = Document::with_title("Report");
        doc.add_paragraph(Paragraph::heading("Intro", 1));
        doc.add_paragraph(Paragraph::with_text("Body text."));

        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["a", "b"]));
        doc.add_table(table);

        assert_eq!(doc.title, "Report");
        assert_eq!(doc.element_count(), 3);
        assert!(doc.elements[0].is_paragraph());
        assert!(doc.elements[2].is_table());
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::with_title("T");
        doc.add_paragraph(Paragraph::with_text("one"));
        doc.add_paragraph(Paragraph::with_text("two"));

        assert_eq!(doc.plain_text(), "one\n\ntwo");
    }
}
