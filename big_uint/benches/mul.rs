use big_uint::{BigUint, MulAlgorithm, MulSelector, RADIX};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_big_uint(rng: &mut StdRng, len: usize) -> BigUint {
    let mut digits: Vec<u32> = (0..len).map(|_| rng.gen_range(0..RADIX)).collect();
    if let Some(top) = digits.last_mut() {
        *top = rng.gen_range(1..RADIX);
    }
    BigUint::from_digits(digits)
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    let mut rng = StdRng::seed_from_u64(0);
    let selector = MulSelector::default();

    for len in [16, 256, 2048, 8192] {
        let a = random_big_uint(&mut rng, len);
        let b = random_big_uint(&mut rng, len);
        let parameter = format!("digits={len}");
        group.throughput(Throughput::Elements(len as u64));

        for algorithm in [MulAlgorithm::Schoolbook, MulAlgorithm::Spectral] {
            group.bench_function(BenchmarkId::new(format!("{algorithm:?}"), &parameter), |bench| {
                bench.iter(|| a.mul_with(&b, algorithm))
            });
        }
        group.bench_function(BenchmarkId::new("selected", &parameter), |bench| {
            bench.iter(|| selector.multiply(&a, &b))
        });
    }

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    let mut rng = StdRng::seed_from_u64(1);

    for len in [16, 256, 1024] {
        let u = random_big_uint(&mut rng, 2 * len);
        let v = random_big_uint(&mut rng, len);
        group.bench_function(BenchmarkId::new("knuth", format!("digits={len}")), |bench| {
            bench.iter(|| u.div_rem(&v))
        });
    }

    group.finish();
}

criterion_group! {
    name = default;
    config = Criterion::default().sample_size(20);
    targets = bench_mul, bench_div
}
criterion_main!(default);
