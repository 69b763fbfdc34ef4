//! Benchmark helper utilities for `oled-animator`.
//!
//! Generates synthetic frame sequences that exercise the encoder's
//! different flush paths (long skips, long diffs, repeated bytes) without
//! depending on any real animation asset.

use oled_types::frame::{FRAME_SIZE, Frame};

/// A solid, unchanging sequence: every frame after the first is a pure
/// skip run, exercising the `BigSkip` flush path.
pub fn solid_sequence(frame_count: usize) -> Vec<Frame> {
	vec![Frame::zeroed(); frame_count]
}

/// A sequence where a small moving block of set bits scrolls across the
/// frame, exercising the mixed skip/diff short-form and `BigCopy` paths.
pub fn scrolling_sequence(frame_count: usize) -> Vec<Frame> {
	(0..frame_count)
		.map(|i| {
			let mut bytes = [0u8; FRAME_SIZE];
			let start = (i * 7) % (FRAME_SIZE - 32);
			for b in bytes.iter_mut().skip(start).take(32) {
				*b = 0xff;
			}
			Frame::from_bytes(bytes)
		})
		.collect()
}

/// A sequence of long runs of a single repeated byte value, exercising the
/// `Repeat` flush path.
pub fn repeat_heavy_sequence(frame_count: usize) -> Vec<Frame> {
	(0..frame_count)
		.map(|i| {
			let mut bytes = [0u8; FRAME_SIZE];
			let value = (i % 256) as u8;
			for b in bytes.iter_mut().take(200).skip(50) {
				*b = value;
			}
			Frame::from_bytes(bytes)
		})
		.collect()
}

/// A pseudo-random sequence with no exploitable structure, exercising the
/// worst-case literal-copy path. Deterministic (a simple LCG), not a
/// cryptographic source.
pub fn noisy_sequence(frame_count: usize) -> Vec<Frame> {
	let mut state: u32 = 0x9e37_79b9;
	let mut next = || {
		state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
		(state >> 16) as u8
	};
	(0..frame_count)
		.map(|_| {
			let mut bytes = [0u8; FRAME_SIZE];
			for b in bytes.iter_mut() {
				*b = next();
			}
			Frame::from_bytes(bytes)
		})
		.collect()
}

/// Named frame counts used across the benchmark suite.
pub mod counts {
	/// A short clip.
	pub const SHORT: usize = 30;
	/// A longer clip.
	pub const LONG: usize = 300;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn solid_sequence_has_requested_length() {
		assert_eq!(solid_sequence(10).len(), 10);
	}

	#[test]
	fn scrolling_sequence_frames_differ() {
		let frames = scrolling_sequence(5);
		assert_ne!(frames[0], frames[1]);
	}

	#[test]
	fn noisy_sequence_is_deterministic() {
		let a = noisy_sequence(4);
		let b = noisy_sequence(4);
		assert_eq!(a, b);
	}
}
