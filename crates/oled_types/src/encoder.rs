//! Turns frame-to-frame diffs into a wire command stream.
//!
//! The encoder buffers a pending `(skip, diff)` pair, remembering which
//! side arrived first, and flushes the pair into commands once both sides
//! are non-empty, or at the end of a frame. This mirrors the reference
//! compressor's own flush table rather than any simpler scheme, because the
//! two sides of a pair genuinely combine differently depending on which
//! arrived first — see `flush` below.

use crate::command::Command;
use crate::frame::{FRAME_SIZE, Frame};
use crate::framer::{self, Run};

const MAX_BIG_CHUNK: usize = 256;
const MAX_SHORT: usize = 7;
const MAX_REPEAT: usize = 128;
const MIN_REPEAT_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
	Skip,
	Diff,
}

/// Buffers one pending skip/diff pair and flushes it into commands.
#[derive(Debug, Default)]
struct PairState {
	skip_count: u32,
	diff_bytes: Vec<u8>,
	first: Option<Side>,
}

impl PairState {
	fn push(&mut self, run: Run, out: &mut Vec<u8>) {
		let starting_empty = self.skip_count == 0 && self.diff_bytes.is_empty();
		match run {
			Run::Skip(n) => {
				if starting_empty {
					self.first = Some(Side::Skip);
				}
				self.skip_count += n;
			}
			Run::Diff(bytes) => {
				if starting_empty {
					self.first = Some(Side::Diff);
				}
				self.diff_bytes.extend(bytes);
			}
		}
		if self.skip_count > 0 && !self.diff_bytes.is_empty() {
			self.flush(false, out);
		}
	}

	fn finish(&mut self, out: &mut Vec<u8>) {
		self.flush(true, out);
	}

	fn flush(&mut self, final_flag: bool, out: &mut Vec<u8>) {
		match self.first {
			Some(Side::Skip) => self.flush_skip_first(final_flag, out),
			Some(Side::Diff) => self.flush_diff_first(final_flag, out),
			None => {}
		}
	}

	fn flush_skip_first(&mut self, final_flag: bool, out: &mut Vec<u8>) {
		while self.skip_count as usize >= MAX_BIG_CHUNK {
			emit_big_skip(MAX_BIG_CHUNK, out);
			self.skip_count -= MAX_BIG_CHUNK as u32;
		}
		if self.skip_count as usize > MAX_SHORT {
			emit_big_skip(self.skip_count as usize, out);
			self.skip_count = 0;
			if !final_flag && !self.diff_bytes.is_empty() && self.diff_bytes.len() <= MAX_SHORT {
				// The skip needed the big form anyway; defer the short diff
				// in case the next run pairs with it more favorably.
				self.first = Some(Side::Diff);
				return;
			}
		}

		if self.skip_count as usize <= MAX_SHORT
			&& !self.diff_bytes.is_empty()
			&& self.diff_bytes.len() <= MAX_SHORT
		{
			let skip = self.skip_count as u8;
			let bytes = std::mem::take(&mut self.diff_bytes);
			Command::ShortSkipCopy { skip, bytes }.encode(out);
			self.skip_count = 0;
			self.first = None;
			return;
		}

		if self.skip_count as usize <= MAX_SHORT && self.diff_bytes.len() > MAX_SHORT {
			if self.skip_count != 0 {
				Command::ShortSkipCopy { skip: self.skip_count as u8, bytes: Vec::new() }
					.encode(out);
				self.skip_count = 0;
			}
			let tail = process_long_diff(&self.diff_bytes, out);
			flush_literal_fully(&tail, out);
			self.diff_bytes.clear();
			self.first = None;
			return;
		}

		if self.skip_count > 0 && self.diff_bytes.is_empty() && final_flag {
			// Checks above already drained any non-empty diff, short or
			// long; a final flush reaching here has only a skip pending,
			// which keeps the short form regardless of its size.
			Command::ShortSkipCopy { skip: self.skip_count as u8, bytes: Vec::new() }
				.encode(out);
			self.skip_count = 0;
			self.first = None;
		}
	}

	fn flush_diff_first(&mut self, final_flag: bool, out: &mut Vec<u8>) {
		if self.diff_bytes.len() > MAX_SHORT {
			let tail = process_long_diff(&self.diff_bytes, out);
			self.diff_bytes = tail;
		}

		if !self.diff_bytes.is_empty() {
			if self.skip_count as usize <= MAX_SHORT {
				let bytes = std::mem::take(&mut self.diff_bytes);
				Command::ShortCopySkip { bytes, skip: self.skip_count as u8 }.encode(out);
				self.skip_count = 0;
			} else {
				let bytes = std::mem::take(&mut self.diff_bytes);
				Command::ShortCopySkip { bytes, skip: 0 }.encode(out);
				while self.skip_count as usize >= MAX_BIG_CHUNK {
					emit_big_skip(MAX_BIG_CHUNK, out);
					self.skip_count -= MAX_BIG_CHUNK as u32;
				}
				if self.skip_count as usize > MAX_SHORT {
					emit_big_skip(self.skip_count as usize, out);
					self.skip_count = 0;
				}
			}
		}

		if final_flag {
			while self.skip_count as usize >= MAX_BIG_CHUNK {
				emit_big_skip(MAX_BIG_CHUNK, out);
				self.skip_count -= MAX_BIG_CHUNK as u32;
			}
			if self.skip_count > 0 {
				// Always the big-skip escape here, even when the remaining
				// skip would fit the short form: a copy-first trailing
				// skip is never re-packaged into a short form on the final
				// flush.
				emit_big_skip(self.skip_count as usize, out);
				self.skip_count = 0;
			}
		}

		if self.diff_bytes.is_empty() && self.skip_count != 0 {
			self.first = Some(Side::Skip);
		} else if self.diff_bytes.is_empty() && self.skip_count == 0 {
			self.first = None;
		}
	}
}

fn emit_big_skip(len: usize, out: &mut Vec<u8>) {
	Command::BigSkip { len: len as u16 }.encode(out);
}

/// Splits `bytes` into `BigCopy` chunks of at most 256 bytes, leaving a
/// final 0..=7-byte remainder unencoded.
fn drain_big_chunks<'a>(mut bytes: &'a [u8], out: &mut Vec<u8>) -> &'a [u8] {
	while bytes.len() >= MAX_BIG_CHUNK {
		Command::BigCopy { bytes: bytes[..MAX_BIG_CHUNK].to_vec() }.encode(out);
		bytes = &bytes[MAX_BIG_CHUNK..];
	}
	if bytes.len() > MAX_SHORT {
		Command::BigCopy { bytes: bytes.to_vec() }.encode(out);
		bytes = &[];
	}
	bytes
}

/// Fully flushes `bytes` as copy commands: big chunks, then a trailing
/// short copy if anything remains.
fn flush_literal_fully(bytes: &[u8], out: &mut Vec<u8>) {
	let tail = drain_big_chunks(bytes, out);
	if !tail.is_empty() {
		Command::ShortCopySkip { bytes: tail.to_vec(), skip: 0 }.encode(out);
	}
}

/// Scans `bytes` left to right for runs of three or more identical bytes,
/// emitting `Repeat` commands (split at 128) for each, with any literal
/// bytes preceding a run flushed first. Returns the trailing segment after
/// the last run found (the whole slice, if none were found).
fn scan_repeats(bytes: &[u8], out: &mut Vec<u8>) -> Vec<u8> {
	let mut i = 0;
	let mut seg_start = 0;
	let n = bytes.len();
	while i < n {
		let value = bytes[i];
		let mut j = i + 1;
		while j < n && bytes[j] == value {
			j += 1;
		}
		let run_len = j - i;
		if run_len >= MIN_REPEAT_RUN {
			flush_literal_fully(&bytes[seg_start..i], out);
			let mut remaining = run_len;
			while remaining > 0 {
				let take = remaining.min(MAX_REPEAT);
				Command::Repeat { value, count: take as u16 }.encode(out);
				remaining -= take;
			}
			seg_start = j;
		}
		i = j;
	}
	bytes[seg_start..].to_vec()
}

/// Applies intra-diff repeat detection and big-copy splitting to `bytes`,
/// returning a remainder of at most 7 bytes still to be packaged by the
/// caller.
fn process_long_diff(bytes: &[u8], out: &mut Vec<u8>) -> Vec<u8> {
	let leftover = scan_repeats(bytes, out);
	drain_big_chunks(&leftover, out).to_vec()
}

/// Encodes one frame's worth of changes against `previous`, appending the
/// resulting commands to `out`.
fn encode_into(previous: &Frame, current: &Frame, pair: &mut PairState, out: &mut Vec<u8>) {
	for run in framer::diff(previous, current) {
		pair.push(run, out);
	}
	pair.finish(out);
}

/// Stateful encoder: owns the previous frame and the pending pair state
/// across repeated `encode_frame` calls.
#[derive(Debug)]
pub struct EncodeSession {
	previous: Frame,
	pair: PairState,
	frame_index: u64,
}

impl Default for EncodeSession {
	fn default() -> Self {
		Self::new()
	}
}

impl EncodeSession {
	/// Starts a new session with an implicit all-zero predecessor frame.
	pub fn new() -> Self {
		Self { previous: Frame::zeroed(), pair: PairState::default(), frame_index: 0 }
	}

	/// Encodes `frame` and returns the command bytes for it. The first call
	/// encodes an intra-frame form against the implicit zeroed predecessor;
	/// subsequent calls diff against the previously encoded frame.
	pub fn encode_frame(&mut self, frame: &Frame) -> Vec<u8> {
		let mut out = Vec::new();
		if self.frame_index == 0 {
			self.pair.push(Run::Diff(frame.as_bytes().to_vec()), &mut out);
			self.pair.finish(&mut out);
		} else {
			encode_into(&self.previous, frame, &mut self.pair, &mut out);
		}
		self.previous = frame.clone();
		self.frame_index += 1;
		out
	}

	/// Number of frames encoded so far.
	pub fn frame_count(&self) -> u64 {
		self.frame_index
	}
}
