//! Benchmarks for page filtering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ptag_pipeline::{NavPositions, Page, Pipeline, TagsExtension, filter_pages};
use serde_json::json;

/// Create a collection where every `stride`-th page carries the target tag.
fn create_pages(count: usize, stride: usize) -> Vec<Page> {
    (0..count)
        .map(|i| {
            let mut page = Page::new(format!("page-{i}"), format!("Page {i}"));
            let tags = if i % stride == 0 {
                json!(["featured", "post"])
            } else {
                json!(["post"])
            };
            page.meta.insert("tags".to_owned(), tags);
            page
        })
        .collect()
}

fn bench_filter_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pages");

    for size in [100, 1_000, 10_000] {
        let pages = create_pages(size, 10);
        let featured = vec!["featured".to_owned()];
        let missing = vec!["missing".to_owned()];

        group.bench_with_input(BenchmarkId::new("sparse_match", size), &pages, |b, pages| {
            b.iter(|| filter_pages(pages, &featured));
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &pages, |b, pages| {
            b.iter(|| filter_pages(pages, &missing));
        });

        group.bench_with_input(BenchmarkId::new("no_filter", size), &pages, |b, pages| {
            b.iter(|| filter_pages(pages, &[]));
        });
    }

    group.finish();
}

fn bench_run_request(c: &mut Criterion) {
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(TagsExtension::new()));

    let mut group = c.benchmark_group("run_request");

    for size in [100, 1_000] {
        let mut pages = create_pages(size, 10);
        pages[0]
            .meta
            .insert("filter".to_owned(), json!("featured"));
        let nav = NavPositions {
            current: Some(0),
            ..Default::default()
        };

        group.bench_function(BenchmarkId::new("filtered", size), |b| {
            b.iter_with_setup(|| pages.clone(), |pages| pipeline.run_request(pages, nav));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_pages, bench_run_request);
criterion_main!(benches);
