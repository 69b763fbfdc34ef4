//! Decodes a wire command stream, driving a [`DisplayAdapter`].

use std::io::Read;

use crate::command::{OP_BIG_COPY, OP_BIG_SKIP, OP_FORM_MASK, OP_REPEAT_MASK};
use crate::display::DisplayAdapter;
use crate::error::CodecError;
use crate::frame::FRAME_SIZE;

fn read_u8<R: Read>(reader: &mut R) -> Result<u8, CodecError> {
	let mut buf = [0u8; 1];
	reader.read_exact(&mut buf).map_err(|e| {
		CodecError::StreamMalformed(format!("unexpected end of stream reading opcode/length: {e}"))
	})?;
	Ok(buf[0])
}

fn read_exact<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, CodecError> {
	let mut buf = vec![0u8; len];
	reader.read_exact(&mut buf).map_err(|e| {
		CodecError::StreamMalformed(format!("unexpected end of stream reading {len} data bytes: {e}"))
	})?;
	Ok(buf)
}

/// Stateless decoder for the wire command stream.
pub struct Decoder;

impl Decoder {
	/// Decodes exactly one frame's worth of commands (cursor movement
	/// totalling [`FRAME_SIZE`] bytes) from `reader`, driving `adapter`.
	pub fn decode_frame<R: Read>(
		reader: &mut R,
		adapter: &mut dyn DisplayAdapter,
	) -> Result<(), CodecError> {
		let mut cursor: u32 = 0;
		adapter.set_cursor(0)?;

		while (cursor as usize) < FRAME_SIZE {
			let op = read_u8(reader)?;
			match op {
				OP_BIG_SKIP => {
					let len = read_u8(reader)? as u32 + 1;
					cursor += len;
					check_bounds(cursor)?;
					adapter.set_cursor((cursor % FRAME_SIZE as u32) as u16)?;
				}
				OP_BIG_COPY => {
					let len = read_u8(reader)? as u32 + 1;
					let bytes = read_exact(reader, len as usize)?;
					cursor += len;
					check_bounds(cursor)?;
					adapter.write_block(&bytes)?;
				}
				op if op & OP_REPEAT_MASK != 0 => {
					let count = (op & 0x7f) as u32 + 1;
					let value = read_u8(reader)?;
					cursor += count;
					check_bounds(cursor)?;
					adapter.write_block(&vec![value; count as usize])?;
				}
				op if op & OP_FORM_MASK == 0x00 => {
					let skip = ((op >> 3) & 0x07) as u32;
					let copy = (op & 0x07) as u32;
					if skip > 0 {
						cursor += skip;
						check_bounds(cursor)?;
						adapter.set_cursor((cursor % FRAME_SIZE as u32) as u16)?;
					}
					if copy > 0 {
						let bytes = read_exact(reader, copy as usize)?;
						cursor += copy;
						check_bounds(cursor)?;
						adapter.write_block(&bytes)?;
					}
				}
				_ => {
					// op & OP_FORM_MASK == 0x40, excluding the OP_BIG_COPY
					// escape handled above.
					let copy = ((op >> 3) & 0x07) as u32;
					let skip = (op & 0x07) as u32;
					if copy > 0 {
						let bytes = read_exact(reader, copy as usize)?;
						cursor += copy;
						check_bounds(cursor)?;
						adapter.write_block(&bytes)?;
					}
					if skip > 0 {
						cursor += skip;
						check_bounds(cursor)?;
						adapter.set_cursor((cursor % FRAME_SIZE as u32) as u16)?;
					}
				}
			}
		}

		Ok(())
	}
}

fn check_bounds(cursor: u32) -> Result<(), CodecError> {
	if cursor as usize > FRAME_SIZE {
		return Err(CodecError::StreamMalformed(format!(
			"command stream moved cursor to {cursor}, past the {FRAME_SIZE}-byte frame"
		)));
	}
	Ok(())
}
