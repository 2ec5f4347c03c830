use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pidigits::{write_digits, DigitCount, Spigot};

fn bench_spigot(c: &mut Criterion) {
    let mut group = c.benchmark_group("spigot");
    group.sample_size(10);

    for &n in [1000u64, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("digits", n), &n, |b, &n| {
            b.iter(|| Spigot::new().take(n as usize).fold(0u64, |acc, d| acc + u64::from(d)))
        });
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let count = DigitCount::new(1000).unwrap();
    c.bench_function("write_digits 1000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 100);
            write_digits(black_box(count), &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_spigot, bench_write);
criterion_main!(benches);
