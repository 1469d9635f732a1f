//! Decoding of provider document payloads into the model.
//!
//! The provider's wire shape is deeply optional: nearly every field may be
//! absent. Decoding repairs rather than rejects. Missing sections decode to
//! empty ones, unrecognized named styles degrade to normal text, and
//! element kinds outside paragraph/table are skipped. A payload only fails
//! to decode when it is not valid JSON at all.

use crate::error::Result;
use crate::model::{
    Document, NamedStyle, Paragraph, Table, TableCell, TableRow, TextRun, UNTITLED,
};
use serde::Deserialize;

/// Decode a provider document payload from a JSON string.
pub fn document_from_json(json: &str) -> Result<Document> {
    let wire: WireDocument = serde_json::from_str(json)?;
    Ok(document_from_wire(wire))
}

/// Decode a provider document payload from a parsed JSON value.
pub fn document_from_value(value: serde_json::Value) -> Result<Document> {
    let wire: WireDocument = serde_json::from_value(value)?;
    Ok(document_from_wire(wire))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireDocument {
    title: Option<String>,
    body: WireBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireBody {
    content: Vec<WireElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireElement {
    paragraph: Option<WireParagraph>,
    table: Option<WireTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireParagraph {
    elements: Vec<WireParagraphElement>,
    paragraph_style: WireParagraphStyle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireParagraphStyle {
    named_style_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireParagraphElement {
    text_run: Option<WireTextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireTextRun {
    content: String,
    text_style: WireTextStyle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireTextStyle {
    bold: bool,
    italic: bool,
    underline: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireTable {
    table_rows: Vec<WireTableRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireTableRow {
    table_cells: Vec<WireTableCell>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireTableCell {
    content: Vec<WireElement>,
}

fn document_from_wire(wire: WireDocument) -> Document {
    let mut doc = Document::with_title(wire.title.unwrap_or_else(|| UNTITLED.to_string()));

    for element in wire.body.content {
        // Paragraph wins if an element somehow carries both kinds.
        if let Some(p) = element.paragraph {
            doc.add_paragraph(paragraph_from_wire(p));
        } else if let Some(t) = element.table {
            doc.add_table(table_from_wire(t));
        }
        // Section breaks, horizontal rules and other element kinds carry no
        // renderable content here and are skipped.
    }

    doc
}

fn paragraph_from_wire(wire: WireParagraph) -> Paragraph {
    let mut paragraph = Paragraph::new();
    paragraph.style = style_from_wire(wire.paragraph_style.named_style_type.as_deref());

    for element in wire.elements {
        if let Some(run) = element.text_run {
            paragraph.add_run(run_from_wire(run));
        }
        // Inline objects, footnote references etc. are not text and are
        // skipped.
    }

    paragraph
}

fn style_from_wire(name: Option<&str>) -> NamedStyle {
    let name = name.unwrap_or("NORMAL_TEXT");
    let style = NamedStyle::from_name(name);

    if style == NamedStyle::Normal && name != "NORMAL_TEXT" {
        log::debug!("Unrecognized named style {:?}, treating as normal text", name);
    }

    style
}

fn run_from_wire(wire: WireTextRun) -> TextRun {
    TextRun {
        text: wire.content,
        bold: wire.text_style.bold,
        italic: wire.text_style.italic,
        underline: wire.text_style.underline,
    }
}

fn table_from_wire(wire: WireTable) -> Table {
    let mut table = Table::new();

    for wire_row in wire.table_rows {
        let mut cells = Vec::with_capacity(wire_row.table_cells.len());
        for wire_cell in wire_row.table_cells {
            let blocks = wire_cell
                .content
                .into_iter()
                .filter_map(|e| e.paragraph.map(paragraph_from_wire))
                .collect();
            cells.push(TableCell::with_blocks(blocks));
        }
        table.add_row(TableRow::new(cells));
    }

    table
}
