//! HTML rendering for structured documents.

use crate::model::{Document, Element, NamedStyle, Paragraph, Table, TextRun};

use super::RenderOptions;

/// Base stylesheet emitted into every page, one rule per line.
const PAGE_STYLE: &[&str] = &[
    "body { font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }",
    "h1 { font-size: 24px; margin-top: 20px; margin-bottom: 10px; }",
    "h2 { font-size: 20px; margin-top: 18px; margin-bottom: 8px; }",
    "h3 { font-size: 16px; margin-top: 16px; margin-bottom: 6px; }",
    "p { margin: 10px 0; }",
    "ul, ol { margin: 10px 0; padding-left: 30px; }",
    "li { margin: 5px 0; }",
    ".bold { font-weight: bold; }",
    ".italic { font-style: italic; }",
    ".underline { text-decoration: underline; }",
];

/// Convert a document to a complete HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
///
/// A pure transformation with no I/O and no shared state: the same Document
/// always renders to the same bytes, and independent renders may run
/// concurrently.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to a complete HTML page.
    ///
    /// Total for any well-formed Document: rendering never fails. Output
    /// lines are joined with `\n` and carry no trailing newline.
    pub fn render(&self, doc: &Document) -> String {
        let mut parts: Vec<String> = Vec::new();
        let title = self.text(&doc.title);

        parts.push("<!DOCTYPE html>".to_string());
        parts.push("<html>".to_string());
        parts.push("<head>".to_string());
        parts.push(format!("<title>{}</title>", title));
        parts.push("<meta charset=\"UTF-8\">".to_string());
        parts.push("<style>".to_string());
        for rule in PAGE_STYLE {
            parts.push((*rule).to_string());
        }
        if let Some(ref extra) = self.options.extra_css {
            parts.push(extra.clone());
        }
        parts.push("</style>".to_string());
        parts.push("</head>".to_string());
        parts.push("<body>".to_string());
        parts.push(format!("<h1>{}</h1>", title));

        for element in &doc.elements {
            self.render_element(&mut parts, element);
        }

        parts.push("</body>".to_string());
        parts.push("</html>".to_string());

        parts.join("\n")
    }

    fn render_element(&self, parts: &mut Vec<String>, element: &Element) {
        match element {
            Element::Paragraph(p) => self.render_paragraph(parts, p),
            Element::Table(t) => self.render_table(parts, t),
        }
    }

    fn render_paragraph(&self, parts: &mut Vec<String>, para: &Paragraph) {
        // Emptiness is decided on the trimmed plain text, so whitespace
        // wrapped in styled spans still produces no node. Headings are not
        // exempt.
        if para.is_empty() {
            return;
        }

        // The emitted content is the untrimmed run markup: interior and
        // edge whitespace inside spans survives as-is.
        let markup: String = para.runs.iter().map(|run| self.styled_run(run)).collect();

        let line = match para.style {
            NamedStyle::Heading1 => format!("<h1>{}</h1>", markup),
            NamedStyle::Heading2 => format!("<h2>{}</h2>", markup),
            NamedStyle::Heading3 => format!("<h3>{}</h3>", markup),
            NamedStyle::Normal => format!("<p>{}</p>", markup),
        };
        parts.push(line);
    }

    /// Wrap a run's text with its style spans.
    ///
    /// Nesting order is fixed, innermost first: bold, then italic, then
    /// underline. A fully-styled run therefore reads
    /// `underline(italic(bold(text)))`.
    fn styled_run(&self, run: &TextRun) -> String {
        let mut styled = self.text(&run.text);

        if run.bold {
            styled = format!("<span class=\"bold\">{}</span>", styled);
        }
        if run.italic {
            styled = format!("<span class=\"italic\">{}</span>", styled);
        }
        if run.underline {
            styled = format!("<span class=\"underline\">{}</span>", styled);
        }

        styled
    }

    fn render_table(&self, parts: &mut Vec<String>, table: &Table) {
        // A rowless table still emits its (empty) table node.
        parts.push("<table border=\"1\" cellpadding=\"5\" cellspacing=\"0\">".to_string());

        for row in &table.rows {
            parts.push("<tr>".to_string());
            for cell in &row.cells {
                // Cell content drops all styling: plain run text across
                // every block, concatenated, trimmed once.
                let content = cell.plain_text();
                parts.push(format!("<td>{}</td>", self.text(content.trim())));
            }
            parts.push("</tr>".to_string());
        }

        parts.push("</table>".to_string());
    }

    /// Apply the configured escaping policy to document text.
    fn text(&self, raw: &str) -> String {
        if self.options.escape_text {
            escape_html(raw)
        } else {
            raw.to_string()
        }
    }
}

/// Escape HTML-reserved characters.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
