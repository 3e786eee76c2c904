use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::trace::random_sequence;
use pagesim::{Policy, RandomTraceConfig, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_policies(c: &mut Criterion) {
    let config = RandomTraceConfig {
        min_len: 2_000,
        max_len: 2_000,
        max_page: 64,
    };
    let sequence = random_sequence(&mut StdRng::seed_from_u64(42), &config).unwrap();
    let sim = Simulator::new();

    let mut group = c.benchmark_group("replay_2000_refs_16_frames");
    for policy in Policy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            b.iter(|| sim.run(policy, black_box(&sequence), 16).unwrap());
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let config = RandomTraceConfig {
        min_len: 2_000,
        max_len: 2_000,
        max_page: 64,
    };
    let sequence = random_sequence(&mut StdRng::seed_from_u64(7), &config).unwrap();
    let sim = Simulator::new();

    c.bench_function("compare_all_policies", |b| {
        b.iter(|| sim.compare(&Policy::ALL, black_box(&sequence), 16).unwrap());
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
