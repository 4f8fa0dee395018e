//! Envelope codec benchmark suite.
//!
//! Measures protobuf encode and decode of envelopes and routing key
//! construction at different payload sizes.
//!
//! Run with: cargo bench --bench envelope_codec
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mist_connection::{Addressing, Envelope, Eui64, GatewayFilter};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const PAYLOAD_SIZES: &[usize] = &[0, 16, 128, 1024];

fn envelope(payload_size: usize) -> Envelope {
    Envelope::new()
        .with_source(0xAABB_CCDD_EEFF_0011_u64)
        .with_destination(0x1234_5678_1234_5678_u64)
        .with_amid(0x0001)
        .with_payload(vec![0xA5; payload_size])
}

// ============================================================================
// Benchmark: Encode / Decode
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_codec");

    for &size in PAYLOAD_SIZES {
        let envelope = envelope(size);
        let body = envelope.encode();
        group.throughput(Throughput::Bytes(body.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &envelope, |b, e| {
            b.iter(|| black_box(e).encode());
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &body, |b, body| {
            b.iter(|| Envelope::decode(black_box(body)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Routing Keys
// ============================================================================

fn bench_routing_key(c: &mut Criterion) {
    let envelope = envelope(16);
    let any = Addressing::new(Eui64::new(0xAABB_CCDD_EEFF_0011), GatewayFilter::Any);
    let specific = Addressing::new(
        Eui64::new(0xAABB_CCDD_EEFF_0011),
        GatewayFilter::Gateway(Eui64::new(0x0102_0304_0506_0708)),
    );

    let mut group = c.benchmark_group("routing_key");
    group.bench_function("any_gateway", |b| {
        b.iter(|| any.routing_key(black_box(&envelope)));
    });
    group.bench_function("specific_gateway", |b| {
        b.iter(|| specific.routing_key(black_box(&envelope)));
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_routing_key);
criterion_main!(benches);
