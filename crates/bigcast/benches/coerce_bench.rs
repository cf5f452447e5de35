//! Benchmarks for coercion and the operation layer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bigcast::coerce::{to_float, to_integer, to_rat_frac, to_rational};
use bigcast::core::Integer;
use bigcast::ops::int::{exp_mod_int, mul_int};

/// Generates `count` random decimal literals of `digits` digits each.
fn random_literals(rng: &mut ChaCha8Rng, count: usize, digits: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let mut s = String::with_capacity(digits);
            s.push(char::from(b'1' + rng.gen_range(0..9)));
            for _ in 1..digits {
                s.push(char::from(b'0' + rng.gen_range(0..10)));
            }
            s
        })
        .collect()
}

fn bench_native_sources(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let ints: Vec<i64> = (0..256).map(|_| rng.gen::<i64>()).collect();
    let floats: Vec<f64> = (0..256).map(|_| rng.gen::<f64>() * 1e6).collect();

    let mut group = c.benchmark_group("coerce_native");
    group.bench_function("to_integer(i64)", |b| {
        b.iter(|| {
            for &x in &ints {
                black_box(to_integer(x).ok());
            }
        });
    });
    group.bench_function("to_rational(f64)", |b| {
        b.iter(|| {
            for &x in &floats {
                black_box(to_rational(x).ok());
            }
        });
    });
    group.bench_function("to_float(f64)", |b| {
        b.iter(|| {
            for &x in &floats {
                black_box(to_float(x).ok());
            }
        });
    });
    group.bench_function("to_rat_frac(i64, i64)", |b| {
        b.iter(|| {
            for pair in ints.chunks_exact(2) {
                black_box(to_rat_frac(pair[0], pair[1] | 1).ok());
            }
        });
    });
    group.finish();
}

fn bench_literals(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("coerce_literal");

    for digits in [10, 100, 1000] {
        let literals = random_literals(&mut rng, 16, digits);
        group.bench_with_input(BenchmarkId::new("to_integer", digits), &literals, |b, lits| {
            b.iter(|| {
                for s in lits {
                    black_box(to_integer(s).ok());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("to_float", digits), &literals, |b, lits| {
            b.iter(|| {
                for s in lits {
                    black_box(to_float(s).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_int_ops(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut group = c.benchmark_group("int_ops");

    for digits in [20, 200] {
        let lits = random_literals(&mut rng, 3, digits);
        let x = to_integer(&lits[0]).unwrap_or_default();
        let y = to_integer(&lits[1]).unwrap_or_default();
        let m = to_integer(&lits[2]).unwrap_or_else(|_| Integer::new(97));

        group.bench_with_input(BenchmarkId::new("mul_int", digits), &digits, |b, _| {
            b.iter(|| black_box(mul_int(&x, &y).ok()));
        });
        group.bench_with_input(BenchmarkId::new("exp_mod_int", digits), &digits, |b, _| {
            b.iter(|| black_box(exp_mod_int(&x, &y, &m).ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_native_sources, bench_literals, bench_int_ops);
criterion_main!(benches);
