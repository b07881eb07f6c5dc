use catalist::prelude::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn random_strings(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

fn bench_random_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Strings (2k)");
    group.sample_size(20);

    let input = random_strings(2_000);

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| black_box(algorithm.run(black_box(&mut data))),
                BatchSize::SmallInput,
            )
        });
    }

    // Std baseline for scale.
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_presorted_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("Presorted Strings (2k)");
    group.sample_size(20);

    let mut input = random_strings(2_000);
    input.sort();

    // Insertion degenerates to a linear pass here; quick sort hits its
    // last-element-pivot worst case.
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| black_box(algorithm.run(black_box(&mut data))),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_input, bench_presorted_input);
criterion_main!(benches);
