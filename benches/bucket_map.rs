use bucketmap::{FixedBucketMap, MapOptions};
use criterion::{criterion_group, BenchmarkId, Criterion};
use rand::Rng;

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}

pub fn put(c: &mut Criterion) {
    let keys = random_keys(1000);
    let mut group = c.benchmark_group("put");
    for buckets in [4, 64, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(buckets), buckets, |b, &buckets| {
            b.iter(|| {
                let mut map = FixedBucketMap::new(buckets).expect("positive bucket count");
                for key in &keys {
                    map.put(*key, *key);
                }
                map
            })
        });
    }
    group.finish()
}

pub fn get(c: &mut Criterion) {
    let keys = random_keys(1000);
    let mut group = c.benchmark_group("get");
    for options in [MapOptions::compatible(), MapOptions::corrected()] {
        let mut map = FixedBucketMap::with_options(options.with_bucket_count(64))
            .expect("positive bucket count");
        for key in &keys {
            map.put(*key, *key);
        }
        group.bench_function(BenchmarkId::new("lookup", options.lookup), |b| {
            b.iter(|| keys.iter().filter(|key| map.get(key).is_some()).count())
        });
    }
    group.finish()
}

criterion_group!(puts, put);
criterion_group!(lookups, get);
