use criterion::{criterion_group, criterion_main, Criterion};

use colordu::config::Config;
use colordu::transform::transform;

const LINES: &[&str] = &[
    "4.0K\t./src",
    "121M\t./target/debug",
    "2.1G\t./target",
    "16K\t./.git/hooks",
    "893\t./Cargo.lock",
];

fn bench_continuous(c: &mut Criterion) {
    let config = Config::resolve(Some("SUNSET"), false);

    c.bench_function("transform sunset", |b| {
        b.iter(|| {
            for line in LINES {
                let _ = transform(line, &config).unwrap();
            }
        })
    });
}

fn bench_discrete(c: &mut Criterion) {
    let config = Config::resolve(Some("YLORBR"), false);

    c.bench_function("transform ylorbr", |b| {
        b.iter(|| {
            for line in LINES {
                let _ = transform(line, &config).unwrap();
            }
        })
    });
}

fn bench_passthrough(c: &mut Criterion) {
    let config = Config::resolve(Some("SUNSET"), false);

    c.bench_function("transform passthrough", |b| {
        b.iter(|| {
            let _ = transform("garbage line without size", &config);
        })
    });
}

criterion_group!(benches, bench_continuous, bench_discrete, bench_passthrough);
criterion_main!(benches);
