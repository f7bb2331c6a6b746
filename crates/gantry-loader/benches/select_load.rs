// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gantry_loader::candidate::LoadCandidate;
use gantry_loader::loader::TruckLoader;
use gantry_model::ids::PackageId;
use std::hint::black_box;

/// Builds a deterministic candidate list so benchmark runs stay comparable.
/// Sizes follow a multiplicative hash of the index, bounded to `1..=max_size`.
fn build_candidates(count: usize, max_size: i64) -> Vec<LoadCandidate<i64>> {
    (0..count)
        .map(|i| {
            let mixed = (i as i64).wrapping_mul(2_654_435_761).wrapping_add(40_503);
            let size = (mixed % max_size).abs() + 1;
            LoadCandidate::new(PackageId::new(i), i as u64 + 1, size, (i % 3) as i64)
        })
        .collect()
}

fn bench_select_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_load");

    for &count in &[12usize, 16, 20] {
        let candidates = build_candidates(count, 40);
        let total: i64 = candidates.iter().map(|c| c.size()).sum();
        // A truck that holds roughly 40% of the stored volume keeps the
        // search non-trivial: neither everything nor almost nothing fits.
        let capacity = (total * 2 / 5).max(1);

        let mut loader = TruckLoader::preallocated(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("candidates", count),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let outcome = loader
                        .select_load(black_box(&candidates), black_box(capacity))
                        .unwrap_or_else(|e| {
                            panic!("Benchmark configuration error: invalid input: {}", e)
                        });
                    if !outcome.is_optimal() {
                        panic!(
                            "Benchmark configuration error: search did not run to completion."
                        );
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_select_load);
criterion_main!(benches);
