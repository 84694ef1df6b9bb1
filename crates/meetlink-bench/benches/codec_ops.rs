//! Criterion micro-benchmarks for geohash encode/decode and route links.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meetlink_bench::{sample_hashes, sample_points};
use meetlink_geohash::{bounding_box, decode, encode};
use meetlink_route::{LinkConfig, RouteLink};

/// Benchmark: Encode 1K points at the link precision (6 symbols).
fn bench_encode_1k_len6(c: &mut Criterion) {
    let points = sample_points(1000);

    c.bench_function("encode_1k_len6", |b| {
        b.iter(|| {
            for p in &points {
                let h = encode(p.latitude, p.longitude, 6).unwrap();
                black_box(&h);
            }
        });
    });
}

/// Benchmark: Encode 1K points at maximum length.
fn bench_encode_1k_len24(c: &mut Criterion) {
    let points = sample_points(1000);

    c.bench_function("encode_1k_len24", |b| {
        b.iter(|| {
            for p in &points {
                let h = encode(p.latitude, p.longitude, 24).unwrap();
                black_box(&h);
            }
        });
    });
}

/// Benchmark: Decode 1K six-symbol hashes to centroids.
fn bench_decode_1k_len6(c: &mut Criterion) {
    let hashes = sample_hashes(1000, 6);

    c.bench_function("decode_1k_len6", |b| {
        b.iter(|| {
            for h in &hashes {
                let p = decode(h.as_str()).unwrap();
                black_box(p);
            }
        });
    });
}

/// Benchmark: Bounding box of 1K uppercase hashes (case-folding path).
fn bench_bounding_box_1k_uppercase(c: &mut Criterion) {
    let hashes: Vec<String> = sample_hashes(1000, 6)
        .iter()
        .map(|h| h.as_str().to_ascii_uppercase())
        .collect();

    c.bench_function("bounding_box_1k_uppercase", |b| {
        b.iter(|| {
            for h in &hashes {
                let cell = bounding_box(h).unwrap();
                black_box(cell);
            }
        });
    });
}

/// Benchmark: Parse and resolve 500 route links.
fn bench_resolve_route_links(c: &mut Criterion) {
    let points = sample_points(1000);
    let config = LinkConfig::default();
    let links: Vec<String> = points
        .chunks_exact(2)
        .map(|pair| RouteLink::encode(pair[0], pair[1], &config).unwrap().to_string())
        .collect();

    c.bench_function("resolve_route_links_500", |b| {
        b.iter(|| {
            for l in &links {
                let route = l.parse::<RouteLink>().unwrap().resolve();
                black_box(&route);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_encode_1k_len6,
    bench_encode_1k_len24,
    bench_decode_1k_len6,
    bench_bounding_box_1k_uppercase,
    bench_resolve_route_links
);
criterion_main!(benches);
