//! Benchmarks for chroma_codec recognition and formatting.

use chroma_codec::parse;
use chroma_codec::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_recognize(c: &mut Criterion) {
    c.bench_function("recognize_hex", |b| {
        b.iter(|| black_box(parse::identify(black_box("#ff5733"))));
    });

    c.bench_function("recognize_rgb", |b| {
        b.iter(|| black_box(parse::identify(black_box("rgb(255, 87, 51)"))));
    });

    // CMYKA is last in precedence, so every other grammar is tried first.
    c.bench_function("recognize_cmyka", |b| {
        b.iter(|| black_box(parse::identify(black_box("cmyka(0%, 66%, 80%, 0%, 0.5)"))));
    });

    c.bench_function("recognize_rejected", |b| {
        b.iter(|| black_box(parse::identify(black_box("not-a-color"))));
    });
}

fn benchmark_cached_identify(c: &mut Criterion) {
    let cached = Converter::new();
    let uncached = Converter::builder().no_cache().build();

    c.bench_function("identify_cached", |b| {
        b.iter(|| black_box(cached.identify(black_box("hsla(24, 100%, 50%, 0.5)"))));
    });

    c.bench_function("identify_uncached", |b| {
        b.iter(|| black_box(uncached.identify(black_box("hsla(24, 100%, 50%, 0.5)"))));
    });
}

fn benchmark_format(c: &mut Criterion) {
    let color = Color::rgb(255, 87, 51);

    for notation in Notation::family(false) {
        c.bench_function(&format!("format_{}", notation.name()), |b| {
            b.iter(|| black_box(chroma_codec::format::format(black_box(&color), notation)));
        });
    }
}

fn benchmark_convert_all(c: &mut Criterion) {
    let converter = Converter::new();

    c.bench_function("convert_all_opaque", |b| {
        b.iter(|| black_box(converter.convert_all(black_box("#ff5733"))));
    });

    c.bench_function("convert_all_alpha", |b| {
        b.iter(|| black_box(converter.convert_all(black_box("#ff573380"))));
    });
}

criterion_group!(
    benches,
    benchmark_recognize,
    benchmark_cached_identify,
    benchmark_format,
    benchmark_convert_all,
);
criterion_main!(benches);
