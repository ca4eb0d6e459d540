//! # Engine Benchmarks
//!
//! Performance benchmarks for gradeval-core evaluation.
//!
//! Run with: `cargo bench -p gradeval-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gradeval_core::{
    Catalog, Category, CompletedSet, StudentId, Subject, SubjectId, ThresholdPolicy, Track,
    aggregate, summarize,
};
use std::collections::BTreeMap;
use std::hint::black_box;

/// Build a catalog of `size` subjects cycling through the four categories,
/// with every third subject not offered under track A.
fn synthetic_catalog(size: u64) -> Catalog {
    let categories = [
        Category::Compulsory,
        Category::LimitedElective,
        Category::StandardElective,
        Category::Elective,
    ];

    let subjects = (0..size).map(|i| {
        let mut mapping = BTreeMap::new();
        if i % 3 != 0 {
            mapping.insert(Track::A, categories[(i % 4) as usize]);
        }
        mapping.insert(Track::B, categories[((i + 1) % 4) as usize]);
        Subject::new(SubjectId(i), format!("Subject {i}"), (i % 6 + 1) as u32, mapping)
    });

    Catalog::from_subjects(subjects).expect("positive credits")
}

fn completed_everything(size: u64, track: Track) -> CompletedSet {
    CompletedSet::new(track, (0..size).map(SubjectId).collect())
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100u64, 1000, 10000] {
        let catalog = synthetic_catalog(size);
        let completed = completed_everything(size, Track::A);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(aggregate(&completed, &catalog)));
        });
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let student = StudentId::new("bench-student");
    let policy = ThresholdPolicy::default();

    for size in [100u64, 1000, 10000] {
        let catalog = synthetic_catalog(size);
        let completed = completed_everything(size, Track::B);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(summarize(&student, &completed, &catalog, &policy)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_summarize);
criterion_main!(benches);
