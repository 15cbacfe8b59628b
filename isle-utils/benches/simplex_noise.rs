#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use isle_utils::noise::{OctaveNoise, PermutationTable, SimplexNoise};
use std::hint::black_box;

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("permutation_table_build", |b| {
        b.iter(|| black_box(PermutationTable::new(black_box(0))));
    });
}

fn bench_raw_noise(c: &mut Criterion) {
    let noise = SimplexNoise::from_seed(0);

    c.bench_function("simplex_raw_2d", |b| {
        b.iter(|| {
            for i in 0..64 {
                let p = f64::from(i) * 0.37;
                black_box(noise.get_value_2d(black_box(p), black_box(p * 1.3)));
            }
        });
    });
}

fn bench_octave_noise(c: &mut Criterion) {
    let noise = OctaveNoise::new(SimplexNoise::from_seed(0), 16, 0.5, 0.0033);

    c.bench_function("simplex_octave_16", |b| {
        b.iter(|| {
            for i in 0..64 {
                let p = f64::from(i) * 0.37;
                black_box(noise.sample(black_box(p), black_box(p * 1.3)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_table_construction,
    bench_raw_noise,
    bench_octave_noise,
);
criterion_main!(benches);
