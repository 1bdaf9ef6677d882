use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mincut::sort::{count_inversions, merge_sort, quick_sort_with_strategy, PivotStrategy};

fn shuffled(n: u32) -> Vec<u32> {
    let mut arr: Vec<u32> = (0..n).collect();
    arr.shuffle(&mut ChaCha8Rng::seed_from_u64(12345));
    arr
}

fn bench_sorts(c: &mut Criterion) {
    let input = shuffled(10_000);

    c.bench_function("merge_sort_10k", |b| {
        b.iter(|| {
            let mut arr = input.clone();
            merge_sort(black_box(&mut arr));
        })
    });

    for strategy in [
        PivotStrategy::First,
        PivotStrategy::MedianOfThree,
        PivotStrategy::Random,
    ] {
        c.bench_function(&format!("quick_sort_10k_{:?}", strategy), |b| {
            b.iter(|| {
                let mut arr = input.clone();
                quick_sort_with_strategy(black_box(&mut arr), strategy);
            })
        });
    }

    c.bench_function("count_inversions_10k", |b| {
        b.iter(|| count_inversions(black_box(&input)))
    });
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
