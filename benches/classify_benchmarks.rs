//! Benchmarks for row classification and full sanitizer runs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write as _;
use std::hint::black_box;
use tempfile::TempDir;
use web_sanitizer::{classify, FixedRunId, OutputLayout, Record, Sanitizer};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let valid = Record::new([
        "2021-01-01 10:00:00",
        "x.com",
        "NYC",
        "US",
        "89.0.4389",
        "10.15.7",
        "mobile",
    ]);
    let invalid = Record::new(["2021/01/01", "", "NYC", "USA", "", "10.15.7", ""]);

    group.bench_function("valid_record", |b| b.iter(|| classify(black_box(&valid))));
    group.bench_function("invalid_record", |b| {
        b.iter(|| classify(black_box(&invalid)))
    });

    group.finish();
}

fn build_source(rows: usize) -> String {
    let mut content = String::from("ts,domain,city,country,browser_version,os_version,device\n");
    for i in 0..rows {
        let country = if i % 4 == 0 { "USA" } else { "US" };
        let _ = writeln!(
            content,
            "2021-01-01 10:{:02}:{:02},site{}.com,City{},{},1.{},2.{},mobile",
            (i / 60) % 60,
            i % 60,
            i % 17,
            i % 31,
            country,
            i % 9,
            i % 5
        );
    }
    content
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitizer_run");
    group.sample_size(20);

    for size in [100, 1_000, 10_000] {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("impressions.csv");
        std::fs::write(&source, build_source(size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            let mut run = 0u64;
            b.iter(|| {
                run += 1;
                let layout = OutputLayout::new(dir.path().join("out")).unwrap();
                let sanitizer = Sanitizer::with_run_ids(layout, FixedRunId::new(run.to_string()));
                black_box(sanitizer.run(source).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_run);
criterion_main!(benches);
