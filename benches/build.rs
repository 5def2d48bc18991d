//! Truth-table construction benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench build
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use truth_table_rs::table::build;
use truth_table_rs::Formula;

/// Chain of `n` implications over distinct variables: `A→B→...`.
fn chain(n: usize) -> String {
    ('A'..='Z').take(n).map(|c| c.to_string()).collect::<Vec<_>>().join("→")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [4, 8, 12, 16] {
        let formula = chain(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &formula, |b, f| {
            b.iter(|| build(black_box(f)).unwrap())
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let formula = "((P↑Q)↓R)↔¬(S⊕P)∧(P→Q)∧(Q→R)→(P→R)";
    c.bench_function("parse", |b| b.iter(|| Formula::parse(black_box(formula))));
}

criterion_group!(benches, bench_build, bench_parse);
criterion_main!(benches);
