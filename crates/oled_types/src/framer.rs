//! Splits the byte-wise difference between two frames into alternating
//! skip/diff runs.

use crate::frame::Frame;

/// A maximal span of unchanged bytes (`Skip`) or changed bytes (`Diff`)
/// between two frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
	/// `len` consecutive unchanged bytes.
	Skip(u32),
	/// Consecutive changed bytes, in `current`'s order.
	Diff(Vec<u8>),
}

/// Produces the alternating skip/diff runs between `previous` and
/// `current`. Runs never share a kind back to back, and their lengths sum
/// to exactly the frame size.
pub fn diff(previous: &Frame, current: &Frame) -> Vec<Run> {
	let prev = previous.as_bytes();
	let cur = current.as_bytes();

	let mut runs = Vec::new();
	let mut i = 0;
	while i < cur.len() {
		if prev[i] == cur[i] {
			let start = i;
			while i < cur.len() && prev[i] == cur[i] {
				i += 1;
			}
			runs.push(Run::Skip((i - start) as u32));
		} else {
			let start = i;
			while i < cur.len() && prev[i] != cur[i] {
				i += 1;
			}
			runs.push(Run::Diff(cur[start..i].to_vec()));
		}
	}
	runs
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::frame::FRAME_SIZE;

	#[test]
	fn identical_frames_yield_one_full_skip() {
		let a = Frame::zeroed();
		let b = Frame::zeroed();
		let runs = diff(&a, &b);
		assert_eq!(runs, vec![Run::Skip(FRAME_SIZE as u32)]);
	}

	#[test]
	fn single_changed_byte_brackets_a_diff_run() {
		let a = Frame::zeroed();
		let mut bytes = [0u8; FRAME_SIZE];
		bytes[10] = 0x7f;
		let b = Frame::from_bytes(bytes);
		let runs = diff(&a, &b);
		assert_eq!(runs, vec![Run::Skip(10), Run::Diff(vec![0x7f]), Run::Skip(1013)]);
	}

	#[test]
	fn runs_never_repeat_kind_and_sum_to_frame_size() {
		let a = Frame::zeroed();
		let mut bytes = [0u8; FRAME_SIZE];
		for (i, b) in bytes.iter_mut().enumerate() {
			if i % 3 == 0 {
				*b = 0xff;
			}
		}
		let b = Frame::from_bytes(bytes);
		let runs = diff(&a, &b);

		let total: usize = runs
			.iter()
			.map(|r| match r {
				Run::Skip(n) => *n as usize,
				Run::Diff(v) => v.len(),
			})
			.sum();
		assert_eq!(total, FRAME_SIZE);

		for pair in runs.windows(2) {
			let same_kind = matches!(
				(&pair[0], &pair[1]),
				(Run::Skip(_), Run::Skip(_)) | (Run::Diff(_), Run::Diff(_))
			);
			assert!(!same_kind);
		}
	}
}
