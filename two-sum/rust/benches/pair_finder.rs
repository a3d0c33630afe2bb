use criterion::{black_box, criterion_group, criterion_main, Criterion};
use two_sum::Strategy;

fn input<const N: usize>() -> (Vec<i32>, i32) {
    let nums: Vec<i32> = (0..N as i32).map(|n| n * 2).collect();
    // Only the last two elements qualify, worst case for both strategies
    let target = nums[N - 2] + nums[N - 1];
    (nums, target)
}

fn criterion_benchmark(c: &mut Criterion) {
    const N: usize = 1024;

    let (nums, target) = input::<N>();

    let mut group = c.benchmark_group("PairFinders");

    group.bench_function("two_sum::Strategy::BruteForce 1024", |b| {
        b.iter(|| Strategy::BruteForce.find(black_box(&nums), black_box(target)))
    });

    group.bench_function("two_sum::Strategy::Hashed 1024", |b| {
        b.iter(|| Strategy::Hashed.find(black_box(&nums), black_box(target)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
