//! Drives a [`DisplayAdapter`] at a fixed frame rate from an encoded stream.

use std::io::Cursor;
use std::time::Duration;

use log::debug;

use crate::decoder::Decoder;
use crate::display::DisplayAdapter;
use crate::error::CodecError;

/// Plays back `data` (a sequence of encoded frames produced by
/// [`crate::encoder::EncodeSession`]) onto `adapter` at `fps` frames per
/// second. When `loop_forever` is set, playback restarts from the
/// beginning once the stream is exhausted instead of returning.
pub fn play(
	data: &[u8],
	fps: f64,
	loop_forever: bool,
	adapter: &mut dyn DisplayAdapter,
) -> Result<(), CodecError> {
	if fps <= 0.0 {
		return Err(CodecError::DecodeInput(format!("frame rate must be positive, got {fps}")));
	}
	let delay = Duration::from_secs_f64(1.0 / fps);

	loop {
		let mut cursor = Cursor::new(data);
		let mut frame_index = 0u64;
		while (cursor.position() as usize) < data.len() {
			Decoder::decode_frame(&mut cursor, adapter)?;
			debug!("played frame {frame_index}");
			frame_index += 1;
			std::thread::sleep(delay);
		}
		if !loop_forever {
			break;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::display::BufferAdapter;
	use crate::encoder::EncodeSession;
	use crate::frame::Frame;

	#[test_log::test]
	fn plays_every_frame_once_without_looping() {
		let mut session = EncodeSession::new();
		let first = Frame::zeroed();
		let mut bytes = [0u8; crate::frame::FRAME_SIZE];
		bytes[0] = 0xff;
		let second = Frame::from_bytes(bytes);

		let mut stream = session.encode_frame(&first);
		stream.extend(session.encode_frame(&second));

		let mut adapter = BufferAdapter::new();
		play(&stream, 10_000.0, false, &mut adapter).unwrap();
		assert_eq!(adapter.screen()[0], 0xff);
	}

	#[test]
	fn rejects_non_positive_frame_rate() {
		let mut adapter = BufferAdapter::new();
		let err = play(&[], 0.0, false, &mut adapter).unwrap_err();
		assert!(matches!(err, CodecError::DecodeInput(_)));
	}
}
