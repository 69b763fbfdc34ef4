//! Benchmark suite for the frame encoder and decoder.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oled_benches::{counts, noisy_sequence, repeat_heavy_sequence, scrolling_sequence, solid_sequence};
use oled_types::decoder::Decoder;
use oled_types::display::BufferAdapter;
use oled_types::encoder::EncodeSession;

/// Benchmark `EncodeSession::encode_frame` throughput across the sequence
/// shapes defined in `oled_benches`.
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode");

	let sequences: Vec<(&str, Vec<_>)> = vec![
		("solid", solid_sequence(counts::SHORT)),
		("scrolling", scrolling_sequence(counts::SHORT)),
		("repeat_heavy", repeat_heavy_sequence(counts::SHORT)),
		("noisy", noisy_sequence(counts::SHORT)),
	];

	for (name, frames) in sequences {
		group.throughput(Throughput::Elements(frames.len() as u64));
		group.bench_with_input(BenchmarkId::new("encode_frame", name), &frames, |b, frames| {
			b.iter(|| {
				let mut session = EncodeSession::new();
				for frame in frames {
					black_box(session.encode_frame(frame));
				}
			});
		});
	}

	group.finish();
}

/// Benchmark `Decoder::decode_frame` throughput on pre-encoded streams.
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode");

	let sequences: Vec<(&str, Vec<_>)> = vec![
		("solid", solid_sequence(counts::SHORT)),
		("scrolling", scrolling_sequence(counts::SHORT)),
		("repeat_heavy", repeat_heavy_sequence(counts::SHORT)),
		("noisy", noisy_sequence(counts::SHORT)),
	];

	for (name, frames) in sequences {
		let mut session = EncodeSession::new();
		let mut encoded = Vec::new();
		for frame in &frames {
			encoded.extend(session.encode_frame(frame));
		}

		group.throughput(Throughput::Elements(frames.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode_frame", name), &encoded, |b, encoded| {
			b.iter(|| {
				let mut cursor = std::io::Cursor::new(encoded.as_slice());
				let mut adapter = BufferAdapter::new();
				while (cursor.position() as usize) < encoded.len() {
					Decoder::decode_frame(&mut cursor, &mut adapter).unwrap();
				}
				black_box(adapter.screen());
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
