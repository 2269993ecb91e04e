//! Benchmarks for the oasgen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oasgen::emit::{implementation_file, interface_file};
use oasgen::{merge_regions, openapi_catalog, parse_property, process, SpecVersion};

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("parse_simple", |b| {
        b.iter(|| parse_property(black_box("title"), black_box("string!")))
    });

    group.bench_function("parse_union_map", |b| {
        b.iter(|| parse_property(black_box("schemas"), black_box("Schema|Reference{}")))
    });

    group.bench_function("parse_literal_union", |b| {
        b.iter(|| {
            parse_property(
                black_box("style"),
                black_box("'deepObject'|'form'|'label'|'matrix'|'pipeDelimited'|'simple'|'spaceDelimited'"),
            )
        })
    });

    group.finish();
}

// -- Processing benchmarks --

fn bench_processing(c: &mut Criterion) {
    let catalog = openapi_catalog();

    c.bench_function("process_catalog", |b| b.iter(|| process(black_box(&catalog))));
}

// -- Emission benchmarks --

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");

    let processed = process(&openapi_catalog());
    let schema = processed.get("Schema").unwrap();
    let model = schema.version(SpecVersion::V3).unwrap();

    group.bench_function("interface_file", |b| b.iter(|| interface_file(black_box(schema))));

    group.bench_function("implementation_file", |b| {
        b.iter(|| implementation_file(black_box(schema), SpecVersion::V3, black_box(model)))
    });

    group.finish();
}

// -- Merge benchmarks --

fn bench_merge(c: &mut Criterion) {
    let processed = process(&openapi_catalog());
    let schema = processed.get("Schema").unwrap();
    let model = schema.version(SpecVersion::V3).unwrap();

    let candidate = implementation_file(schema, SpecVersion::V3, model);
    let existing = candidate.replace(
        "// <!# Custom Content Begin: BODY #!>\n  \n",
        "// <!# Custom Content Begin: BODY #!>\n  // hand-written helpers live here\n",
    );

    c.bench_function("merge_regions", |b| {
        b.iter(|| merge_regions(black_box(&existing), black_box(&candidate)))
    });
}

criterion_group!(benches, bench_parsing, bench_processing, bench_emission, bench_merge);
criterion_main!(benches);
