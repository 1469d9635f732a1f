//! Benchmarks for dochtml rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test rendering and payload decoding with synthetic
//! documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dochtml::render::{to_html, RenderOptions};
use dochtml::{Document, Paragraph, Table, TableRow, TextRun};

/// Creates a synthetic document with the given number of body elements.
///
/// Every tenth element is a heading, every seventh a small table, the rest
/// paragraphs with a mix of plain and styled runs.
fn create_test_document(element_count: usize) -> Document {
    let mut doc = Document::with_title("Benchmark Document");

    for i in 0..element_count {
        if i % 10 == 0 {
            doc.add_paragraph(Paragraph::heading(format!("Section {}", i / 10 + 1), 2));
        } else if i % 7 == 0 {
            let mut table = Table::new();
            table.add_row(TableRow::from_strings(["Key", "Value"]));
            table.add_row(TableRow::from_strings([
                format!("metric-{}", i),
                format!("{}", i * 37),
            ]));
            doc.add_table(table);
        } else {
            let mut p = Paragraph::new();
            p.add_text("Benchmark paragraph content with ");
            p.add_run(TextRun::new("styled").bold().italic());
            p.add_text(" spans for performance measurement.");
            doc.add_paragraph(p);
        }
    }

    doc
}

/// Creates a synthetic provider payload with the given number of paragraphs.
fn create_test_payload(paragraph_count: usize) -> String {
    let mut content = Vec::with_capacity(paragraph_count);
    for i in 0..paragraph_count {
        content.push(serde_json::json!({
            "paragraph": {
                "elements": [
                    {"textRun": {"content": format!("Paragraph {} text. ", i)}},
                    {"textRun": {"content": "emphasis", "textStyle": {"bold": true}}}
                ],
                "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"}
            }
        }));
    }

    serde_json::json!({
        "title": "Benchmark Payload",
        "body": {"content": content}
    })
    .to_string()
}

/// Benchmark HTML rendering at various document sizes.
fn bench_html_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_rendering");
    let options = RenderOptions::default();

    for element_count in [10, 100, 1000].iter() {
        let doc = create_test_document(*element_count);

        group.bench_function(format!("{}_elements", element_count), |b| {
            b.iter(|| to_html(black_box(&doc), &options));
        });
    }

    group.finish();
}

/// Benchmark payload decoding at various sizes.
fn bench_payload_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_decoding");

    for paragraph_count in [10, 100, 1000].iter() {
        let payload = create_test_payload(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| dochtml::parse_json(black_box(&payload)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark escaping overhead against raw mode.
fn bench_escaping_overhead(c: &mut Criterion) {
    let doc = create_test_document(100);
    let escaped = RenderOptions::default();
    let raw = RenderOptions::new().with_escaping(false);

    c.bench_function("render_escaped", |b| {
        b.iter(|| to_html(black_box(&doc), &escaped));
    });

    c.bench_function("render_raw", |b| {
        b.iter(|| to_html(black_box(&doc), &raw));
    });
}

criterion_group!(
    benches,
    bench_html_rendering,
    bench_payload_decoding,
    bench_escaping_overhead,
);
criterion_main!(benches);
