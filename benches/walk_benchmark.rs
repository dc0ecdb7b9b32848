use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ceos_sar::{ceos::RecordWalker, walk};

const REPETITIONS: usize = 200;

fn record(sequence_number: u32, codes: [u8; 4], length: usize, fields: &[(usize, &str)]) -> Vec<u8> {
    let mut bytes = vec![b' '; length];
    bytes[0..4].copy_from_slice(&sequence_number.to_be_bytes());
    bytes[4..8].copy_from_slice(&codes);
    bytes[8..12].copy_from_slice(&(length as u32).to_be_bytes());
    for (start, text) in fields {
        bytes[(start - 1)..(start - 1 + text.len())].copy_from_slice(text.as_bytes());
    }
    bytes
}

/// A leader-like file: volume descriptor, file descriptor, attitude and text records.
fn synthetic_file() -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..REPETITIONS {
        let seq = (i * 4) as u32;
        data.extend(record(
            seq + 1,
            [192, 192, 18, 18],
            360,
            &[(17, "CEOS-SAR-CCT"), (45, "VOLUME-1")],
        ));
        data.extend(record(
            seq + 2,
            [11, 192, 18, 18],
            720,
            &[(49, "LEADER FILE"), (181, "     4")],
        ));
        data.extend(record(
            seq + 3,
            [18, 40, 18, 20],
            16 + 2 * 120,
            &[
                (13, "   2"),
                (17, " 123"),
                (21, "45296000"),
                (41, "  1.234560E-02"),
                (137, " 123"),
                (141, "45297000"),
            ],
        ));
        data.extend(record(
            seq + 4,
            [18, 63, 18, 18],
            360,
            &[(17, "PRODUCT:SAR PRECISION IMAGE")],
        ));
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = synthetic_file();
    let mut group = c.benchmark_group("Walk");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("decode all", |b| {
        b.iter(|| walk(black_box(&data)).len());
    });
    group.bench_function("iterate", |b| {
        b.iter(|| RecordWalker::new(black_box(&data)).map(|e| e.advance).sum::<usize>());
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
