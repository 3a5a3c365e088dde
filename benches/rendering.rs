//! Benchmarks for document rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wrapview::document::{RenderOptions, render_document};
use wrapview::section::Section;
use wrapview::style::{Direction, Theme};

fn sample_sections(count: usize) -> Vec<Section> {
    (0..count)
        .map(|i| {
            Section::new(
                format!("https://images.example/{i}.png"),
                format!("Paragraph {i} with <markup> and\na second line."),
            )
            .with_title(format!("Section {i}"))
        })
        .collect()
}

fn bench_render_document(c: &mut Criterion) {
    let sections = sample_sections(50);
    let options = RenderOptions {
        direction: Direction::Rtl,
        theme: Theme::Dark,
        ..RenderOptions::default()
    };

    c.bench_function("render_document_50", |b| {
        b.iter(|| render_document(black_box(&sections), black_box(&options)))
    });
}

criterion_group!(benches, bench_render_document);
criterion_main!(benches);
