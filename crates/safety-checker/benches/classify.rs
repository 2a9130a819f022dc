// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for snapshot validation and classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resource_state::{Snapshot, SnapshotManifest};
use safety_checker::{SafetyChecker, ScanOrder};

/// Worst case for an ascending scan: one admission per pass.
fn reverse_chain(process_count: usize, resource_types: usize) -> SnapshotManifest {
    let n = process_count as i64;
    SnapshotManifest {
        allocation: (0..n).map(|_| vec![1; resource_types]).collect(),
        maximum: (0..n).map(|p| vec![(n - p) + 1; resource_types]).collect(),
        available: vec![1; resource_types],
        ..Default::default()
    }
}

fn chain_snapshot(process_count: usize, resource_types: usize) -> Snapshot {
    reverse_chain(process_count, resource_types)
        .validate()
        .expect("benchmark snapshot is well-formed")
}

fn bench_classify_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_reverse_chain");
    let checker = SafetyChecker::new(ScanOrder::Ascending).with_timing(false);
    for &n in &[8usize, 64, 256] {
        let snap = chain_snapshot(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &snap, |b, snap| {
            b.iter(|| checker.run(black_box(snap)))
        });
    }
    group.finish();
}

fn bench_classify_best_case(c: &mut Criterion) {
    // Descending scan admits the whole chain in a single pass.
    let mut group = c.benchmark_group("classify_single_pass");
    let checker = SafetyChecker::new(ScanOrder::Descending).with_timing(false);
    for &n in &[8usize, 64, 256] {
        let snap = chain_snapshot(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &snap, |b, snap| {
            b.iter(|| checker.run(black_box(snap)))
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let manifest = reverse_chain(256, 4);
    c.bench_function("validate_256x4", |b| {
        b.iter(|| black_box(manifest.clone()).validate())
    });
}

criterion_group!(
    benches,
    bench_classify_worst_case,
    bench_classify_best_case,
    bench_validation
);
criterion_main!(benches);
