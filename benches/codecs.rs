//! Benchmarks for symcodec codec throughput.
//!
//! Measures each codec over image-like data patterns, the LZ77 codec over a
//! range of window sizes, and channel batches at different thread counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use symcodec::{
    compress_channels, BatchConfig, Codec, CodecConfig, CodecKind, HuffmanCodec, RleCodec,
    SymbolCodec, WindowCodec,
};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate a posterized scanline: long flat bands with occasional noise
fn generate_scanline_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        let level = ((i / 37) % 16) as u8 * 16;
        // Roughly one noisy pixel in 32
        if hasher.finish() % 32 == 0 {
            data.push(level.wrapping_add(1));
        } else {
            data.push(level);
        }
    }
    data
}

/// Generate a repeating tile, like a dithered or patterned image
fn generate_tiled_data(size: usize) -> Vec<u8> {
    let tile = [0u8, 64, 128, 192, 128, 64, 0, 0, 255, 255];
    tile.iter().copied().cycle().take(size).collect()
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs");
    let size = 64 * 1024;

    let inputs = [
        ("random", generate_random_data(size)),
        ("scanline", generate_scanline_data(size)),
        ("tiled", generate_tiled_data(size)),
    ];

    group.throughput(Throughput::Bytes(size as u64));

    for (label, data) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("rle", label), data, |b, data| {
            b.iter(|| RleCodec.compress(data).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("lz77", label), data, |b, data| {
            let codec = WindowCodec::default();
            b.iter(|| codec.compress(data).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("huffman", label), data, |b, data| {
            b.iter(|| HuffmanCodec.compress(data).unwrap());
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let size = 64 * 1024;
    let data = generate_scanline_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    for kind in CodecKind::all() {
        let codec = Codec::new(*kind, &CodecConfig::default()).unwrap();
        let block = codec.compress(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("scanline", kind), &block, |b, block| {
            b.iter(|| codec.decompress(block).unwrap());
        });
    }

    group.finish();
}

fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_window");
    let size = 64 * 1024;
    let data = generate_scanline_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    for window_size in [16, 64, 256, 1024].iter() {
        group.bench_with_input(BenchmarkId::new("window", window_size), &data, |b, data| {
            let codec = WindowCodec::new(*window_size).unwrap();
            b.iter(|| codec.compress(data).unwrap());
        });
    }

    group.finish();
}

fn bench_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("channels");
    let size = 64 * 1024;
    let channels: Vec<Vec<u8>> = (0..4).map(|_| generate_scanline_data(size)).collect();
    let codec = Codec::new(CodecKind::Lz77, &CodecConfig::default()).unwrap();

    group.throughput(Throughput::Bytes((size * channels.len()) as u64));

    for threads in [1, 2, 4].iter() {
        group.bench_with_input(BenchmarkId::new("threads", threads), &channels, |b, channels| {
            let config = BatchConfig { num_threads: *threads };
            b.iter(|| compress_channels(&codec, channels, &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codecs, bench_decompress, bench_window_sizes, bench_channels);
criterion_main!(benches);
