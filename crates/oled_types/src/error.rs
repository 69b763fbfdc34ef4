//! Error types for the OLED animation codec.

use thiserror::Error;

/// Errors produced while rasterizing, encoding, decoding, or playing back
/// an animation stream.
#[derive(Debug, Error)]
pub enum CodecError {
	/// The caller supplied source pixel data the rasterizer cannot accept
	/// (wrong bit depth, empty buffer, and so on).
	#[error("decode input rejected: {0}")]
	DecodeInput(String),

	/// A command stream did not follow the wire format: an opcode expected
	/// more bytes than remained, or a frame's commands moved the cursor
	/// past the end of the 1024-byte frame.
	#[error("malformed command stream: {0}")]
	StreamMalformed(String),

	/// The display adapter's underlying I/O (an I2C transaction, a write to
	/// a buffer) failed.
	#[error("display adapter I/O failed")]
	AdapterIo(#[from] std::io::Error),

	/// A hardware or transport resource failed to initialize (I2C bus open,
	/// controller init sequence).
	#[error("resource initialization failed: {0}")]
	ResourceInit(String),

	/// A value fell outside the range the operation requires (crop origin
	/// does not fit the source image, run length out of range, and so on).
	#[error("value out of bounds: {0}")]
	Bounds(String),
}
