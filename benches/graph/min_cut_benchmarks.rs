use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mincut::graph::min_cut;
use mincut::graph::multigraph::VertexId;

fn eight_vertex_graph() -> Vec<Vec<VertexId>> {
    vec![
        vec![],
        vec![2, 3, 4, 7],
        vec![1, 3, 4],
        vec![1, 2, 4],
        vec![1, 2, 3, 5],
        vec![4, 6, 7, 8],
        vec![5, 7, 8],
        vec![1, 5, 6, 8],
        vec![5, 6, 7],
    ]
}

fn bench_estimate(c: &mut Criterion) {
    let description = eight_vertex_graph();

    c.bench_function("estimate_64_trials", |b| {
        b.iter(|| min_cut::estimate_with_trials(black_box(&description), 64).unwrap())
    });

    c.bench_function("estimate_parallel_64_trials", |b| {
        b.iter(|| min_cut::estimate_parallel(black_box(&description), 64).unwrap())
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
