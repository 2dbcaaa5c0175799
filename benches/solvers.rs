// benches/solvers.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calcs::integer_math::sieve::PrimalityChecker;
use calcs::polynomial::cubic::solve_cubic;
use calcs::polynomial::quintic::{solve_quintic, NewtonOptions};

fn bench_sieve(c: &mut Criterion) {
    let checker = PrimalityChecker::default();
    let mut group = c.benchmark_group("sieve");
    for n in [1_000u64, 100_003, 1_000_003] {
        group.bench_function(format!("is_prime_{}", n), |b| {
            b.iter(|| checker.is_prime(black_box(n)))
        });
    }
    group.finish();
}

fn bench_cubic(c: &mut Criterion) {
    c.bench_function("cubic_three_roots", |b| {
        b.iter(|| solve_cubic(black_box(1.0), black_box(-6.0), black_box(11.0), black_box(-6.0)))
    });
}

fn bench_quintic(c: &mut Criterion) {
    let options = NewtonOptions::default();
    c.bench_function("quintic_default_form", |b| {
        b.iter(|| solve_quintic(black_box(&[1.0, 2.0, 10.0, 1.0, 1.0, 1.0]), &options))
    });
}

criterion_group!(benches, bench_sieve, bench_cubic, bench_quintic);
criterion_main!(benches);
