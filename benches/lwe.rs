// Copyright © 2023 Sven Moog
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

use criterion::*;
use qfall_lwe::construction::pk_encryption::{Lwe, PKEncryption};
use qfall_lwe::sample::seed::rng_from_seed_phrase;

/// Performs a full-cycle of gen, enc, dec with lwe.
fn lwe_cycle(n: usize) {
    let mut rng = rng_from_seed_phrase("bench");
    let lwe = Lwe::new_from_n(n).unwrap();

    let (pk, sk) = lwe.gen(&mut rng);
    let cipher = lwe.enc(&pk, 1, &mut rng).unwrap();
    let _ = lwe.dec(&sk, &cipher);
}

/// Benchmark [lwe_cycle] with `n = 10`, i.e. the reference parameters.
///
/// This benchmark can be run with for example:
/// - `cargo criterion LWE\ n=10`
/// - `cargo bench --bench benchmarks LWE\ n=10`
/// - `cargo flamegraph --bench benchmarks -- --bench LWE\ n=10`
fn bench_lwe_cycle(c: &mut Criterion) {
    c.bench_function("LWE n=10", |b| b.iter(|| lwe_cycle(10)));
}

/// Benchmark encryption alone against a fixed public key with `n = 256`.
fn bench_lwe_enc(c: &mut Criterion) {
    let mut rng = rng_from_seed_phrase("bench enc");
    let lwe = Lwe::new_from_n(256).unwrap();
    let (pk, _) = lwe.gen(&mut rng);

    c.bench_function("LWE enc n=256", |b| {
        b.iter(|| lwe.enc(&pk, black_box(1), &mut rng).unwrap())
    });
}

/// Benchmark [lwe_cycle] with `n = 10, 50, 100, 250, 500`
///
/// This benchmark can be run with for example:
/// - `cargo criterion "LWE\ n\ sweep"`
/// - `cargo criterion LWE\ n\ sweep/n=100` (only run the n=100 benchmark).
fn bench_lwe_cycle_n_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("LWE n sweep");

    for n in [10, 50, 100, 250, 500].iter() {
        group.bench_function(format!("n={n}"), |b| b.iter(|| lwe_cycle(*n)));
    }

    group.finish();
}

criterion_group!(benches, bench_lwe_cycle, bench_lwe_enc, bench_lwe_cycle_n_sweep);
