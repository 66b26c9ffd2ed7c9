use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poly_bloom::experiment::random_string;
use poly_bloom::BloomFilter;

fn bench_add(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let keys: Vec<String> = (0..1024).map(|_| random_string(&mut rng, 50)).collect();

    c.bench_function("bloom_add_k3", |b| {
        let mut filter = BloomFilter::new(3).unwrap();
        let mut i = 0;
        b.iter(|| {
            filter.add(black_box(&keys[i & 1023])).unwrap();
            i += 1;
        });
    });

    c.bench_function("bloom_add_k14", |b| {
        let mut filter = BloomFilter::new(14).unwrap();
        let mut i = 0;
        b.iter(|| {
            filter.add(black_box(&keys[i & 1023])).unwrap();
            i += 1;
        });
    });
}

fn bench_contains(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let keys: Vec<String> = (0..1024).map(|_| random_string(&mut rng, 50)).collect();
    let probes: Vec<String> = (0..1024).map(|_| random_string(&mut rng, 50)).collect();

    let mut filter = BloomFilter::new(3).unwrap();
    for key in &keys {
        filter.add(key).unwrap();
    }

    c.bench_function("bloom_contains_member", |b| {
        let mut i = 0;
        b.iter(|| {
            let hit = filter.contains(black_box(&keys[i & 1023])).unwrap();
            i += 1;
            hit
        });
    });

    c.bench_function("bloom_contains_probe", |b| {
        let mut i = 0;
        b.iter(|| {
            let hit = filter.contains(black_box(&probes[i & 1023])).unwrap();
            i += 1;
            hit
        });
    });
}

criterion_group!(benches, bench_add, bench_contains);
criterion_main!(benches);
