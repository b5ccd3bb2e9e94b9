//! Benchmarks for preview composition.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use webide_core::{compose, Document, Language};

/// Builds an HTML/CSS/JS triple with `lines` lines each.
fn generate_project(lines: usize) -> Vec<Document> {
    let body: String = (0..lines)
        .map(|i| format!("  <p>Paragraph {}</p>\n", i))
        .collect();
    let css: String = (0..lines)
        .map(|i| format!(".c{} {{ color: #{:06x}; }}\n", i, i))
        .collect();
    let js: String = (0..lines)
        .map(|i| format!("console.log({});\n", i))
        .collect();

    vec![
        Document::new(
            "index.html",
            Language::Html,
            format!("<html><head></head><body>\n{}</body></html>", body),
        ),
        Document::new("styles.css", Language::Css, css),
        Document::new("script.js", Language::JavaScript, js),
    ]
}

/// Benchmarks composing pages of increasing size.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for size in [10, 100, 1000, 10000].iter() {
        let docs = generate_project(*size);

        group.bench_with_input(BenchmarkId::new("html_css_js", size), &docs, |b, docs| {
            b.iter(|| black_box(compose(black_box(docs)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmarks the lookup when the HTML document sits behind many others.
fn bench_scan(c: &mut Criterion) {
    let mut docs: Vec<Document> = (0..1000)
        .map(|i| Document::new(format!("module_{}.py", i), Language::Python, ""))
        .collect();
    docs.extend(generate_project(10));

    c.bench_function("scan_1000_documents", |b| {
        b.iter(|| black_box(compose(black_box(&docs)).unwrap()))
    });
}

criterion_group!(benches, bench_compose, bench_scan);
criterion_main!(benches);
