use catalist::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn sorted_catalog(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    let mut items: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();
    items.sort();
    items
}

fn bench_search(c: &mut Criterion) {
    for count in [1_000usize, 10_000, 100_000] {
        let mut group = c.benchmark_group(format!("Search ({count} items)"));
        group.sample_size(50);

        let catalog = sorted_catalog(count);
        let mut rng = rand::rng();
        let needles: Vec<String> = (0..64)
            .map(|_| catalog[rng.random_range(0..catalog.len())].clone())
            .collect();

        group.bench_function("linear_search", |b| {
            let mut i = 0;
            b.iter(|| {
                let needle = &needles[i % needles.len()];
                i += 1;
                black_box(linear_search(black_box(&catalog), needle))
            })
        });

        group.bench_function("binary_search", |b| {
            let mut i = 0;
            b.iter(|| {
                let needle = &needles[i % needles.len()];
                i += 1;
                black_box(binary_search(black_box(&catalog), needle))
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
