//! Histogram throughput: counting, parsing and rendering.
//!
//! Run with: cargo bench --bench histogram


use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use bench_utils::{config, generate_tuples, to_input};
use histogram_nd::output::{write_raw, write_text};
use histogram_nd::{Histogram, HistogramLogger, OutputFormat, Verbosity, import};

const NUM_ROWS: usize = 100_000;

// =============================================================================
// Insert
// =============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram/insert");
    group.throughput(Throughput::Elements(NUM_ROWS as u64));

    for (dims, bins) in [(1, 1000), (2, 256), (3, 32)] {
        let values = generate_tuples(NUM_ROWS, dims, 42);
        let config = config(dims, bins, OutputFormat::Text);

        group.bench_with_input(BenchmarkId::new("dims", dims), &values, |b, values| {
            b.iter(|| {
                let mut hist = Histogram::new(&config).unwrap();
                for tuple in values.chunks(dims) {
                    black_box(hist.insert(tuple));
                }
                hist
            })
        });
    }

    group.finish();
}

// =============================================================================
// Import
// =============================================================================

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram/import");

    for dims in [1, 2] {
        let input = to_input(&generate_tuples(NUM_ROWS, dims, 7), dims);
        let config = config(dims, 128, OutputFormat::Text);
        let logger = HistogramLogger::new(Verbosity::Silent);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("dims", dims), &input, |b, input| {
            b.iter(|| {
                let mut hist = Histogram::new(&config).unwrap();
                import(input.as_bytes(), &mut hist, &logger).unwrap();
                hist
            })
        });
    }

    group.finish();
}

// =============================================================================
// Output
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram/output");
    let values = generate_tuples(NUM_ROWS, 2, 99);

    let text_config = config(2, 256, OutputFormat::Text);
    let mut text_hist = Histogram::new(&text_config).unwrap();
    for tuple in values.chunks(2) {
        text_hist.insert(tuple);
    }
    group.throughput(Throughput::Elements(text_hist.layout().total_bins() as u64));
    group.bench_function("text_256x256", |b| {
        let window = text_hist.output_window(false);
        b.iter(|| {
            let mut out = Vec::new();
            write_text(&text_config, &text_hist, &window, &mut out).unwrap();
            black_box(out)
        })
    });

    for format in [OutputFormat::Raw8, OutputFormat::Raw16] {
        let raw_config = config(2, 512, format);
        let mut raw_hist = Histogram::new(&raw_config).unwrap();
        for tuple in values.chunks(2) {
            raw_hist.insert(tuple);
        }
        group.bench_with_input(
            BenchmarkId::new("raw_512x512", format!("{format:?}")),
            &raw_hist,
            |b, hist| {
                b.iter(|| {
                    let mut out = Vec::new();
                    write_raw(hist, format, hist.max_count(), &mut out).unwrap();
                    black_box(out)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_import, bench_output);
criterion_main!(benches);
