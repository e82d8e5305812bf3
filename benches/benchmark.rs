//! Performance benchmarks for listing-audit.
//!
//! Run with: `cargo bench`
//!
//! Extraction dominates; evaluation is measured separately on a pre-extracted
//! record. The page benchmark is repeated with padded galleries and bullet
//! lists to show how the locator cascades scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use listing_audit::{analyze, analyze_with_options, evaluate, extract_html, Options};

const PRODUCT_PAGE: &str = include_str!("../tests/fixtures/product_page.html");
const PRODUCT_URL: &str = "https://www.amazon.com/dp/B0TESTBOTTLE";

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_html", |b| {
        b.iter(|| extract_html(black_box(PRODUCT_PAGE), black_box(PRODUCT_URL)));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let content = extract_html(PRODUCT_PAGE, PRODUCT_URL);

    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&content)));
    });
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(PRODUCT_PAGE), black_box(PRODUCT_URL)));
    });

    let options = Options {
        include_evaluation: false,
        ..Options::default()
    };
    c.bench_function("analyze_without_evaluation", |b| {
        b.iter(|| analyze_with_options(black_box(PRODUCT_PAGE), PRODUCT_URL, black_box(&options)));
    });
}

/// Product pages with increasingly long galleries and bullet lists.
fn bench_scaled_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaled_page");

    for items in [10_usize, 100, 1_000] {
        let thumbnails: String = (0..items)
            .map(|i| {
                format!(r#"<li><img src="https://m.media-amazon.com/images/I/{i}._AC_US40_.jpg"></li>"#)
            })
            .collect();
        let bullets: String = (0..items)
            .map(|i| format!("<li><span class=\"a-list-item\">Feature {i}</span></li>"))
            .collect();
        let html = format!(
            r#"<html><body>
                <span id="productTitle">Scaled Product</span>
                <div id="altImages"><ul>{thumbnails}</ul></div>
                <div id="feature-bullets"><ul>{bullets}</ul></div>
            </body></html>"#
        );

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract_html", items), &html, |b, html| {
            b.iter(|| extract_html(black_box(html), PRODUCT_URL));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract,
    bench_evaluate,
    bench_analyze,
    bench_scaled_pages
);
criterion_main!(benches);
