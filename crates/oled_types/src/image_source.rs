//! The abstract collaborator that hands frames to the rasterizer.
//!
//! Decoding an animated image format and compositing disposal frames is
//! outside this crate's scope; anything that can produce composited,
//! packed-pixel frames one at a time implements this trait. The root
//! package's GIF-backed implementation lives alongside the CLI binaries
//! that use it.

use crate::error::CodecError;

/// One composited source frame, ready for [`crate::raster::rasterize`].
#[derive(Debug, Clone)]
pub struct SourceFrame {
	/// Width of `pixels` in pixels.
	pub width: usize,
	/// Height of `pixels` in pixels.
	pub height: usize,
	/// Bits per pixel of `pixels` (only 16bpp RGB565 is currently accepted
	/// downstream, see [`crate::raster::SUPPORTED_BPP`]).
	pub bits_per_pixel: u16,
	/// Bytes per row of `pixels`, which may exceed `width * bits_per_pixel / 8`
	/// if the source pads rows.
	pub pitch: usize,
	/// Row-major packed pixel data, `pitch * height` bytes.
	pub pixels: Vec<u8>,
}

/// Produces a sequence of composited frames.
pub trait ImageSource {
	/// Returns the next frame, or `None` once the source is exhausted.
	fn next_frame(&mut self) -> Result<Option<SourceFrame>, CodecError>;
}
