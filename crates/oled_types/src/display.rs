//! The seam between the decoder and a real or simulated panel.

use crate::error::CodecError;
use crate::frame::FRAME_SIZE;

/// Receives cursor moves and pixel writes from a [`crate::decoder::Decoder`].
///
/// Implementors decide what "cursor" and "write" mean: a real SSD1306
/// transport issues I2C command/data transactions; [`BufferAdapter`] just
/// indexes into an array.
pub trait DisplayAdapter {
	/// Moves the write cursor to `offset` (0..1024, already wrapped by the
	/// caller).
	fn set_cursor(&mut self, offset: u16) -> Result<(), CodecError>;

	/// Writes `bytes` starting at the current cursor, advancing it by
	/// `bytes.len()`.
	fn write_block(&mut self, bytes: &[u8]) -> Result<(), CodecError>;
}

/// A [`DisplayAdapter`] backed by a plain in-memory frame buffer, used for
/// round-trip tests and by any consumer that wants decoded frames without
/// touching real hardware.
pub struct BufferAdapter {
	screen: [u8; FRAME_SIZE],
	cursor: usize,
}

impl Default for BufferAdapter {
	fn default() -> Self {
		Self::new()
	}
}

impl BufferAdapter {
	/// A fresh, all-zero buffer adapter.
	pub fn new() -> Self {
		Self { screen: [0u8; FRAME_SIZE], cursor: 0 }
	}

	/// The current contents of the simulated screen.
	pub fn screen(&self) -> &[u8; FRAME_SIZE] {
		&self.screen
	}
}

impl DisplayAdapter for BufferAdapter {
	fn set_cursor(&mut self, offset: u16) -> Result<(), CodecError> {
		self.cursor = offset as usize % FRAME_SIZE;
		Ok(())
	}

	fn write_block(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
		for &b in bytes {
			self.screen[self.cursor % FRAME_SIZE] = b;
			self.cursor += 1;
		}
		Ok(())
	}
}
