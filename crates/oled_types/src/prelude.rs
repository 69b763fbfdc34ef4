//! Prelude module for `oled_types`.
//!
//! # Examples
//!
//! ```no_run
//! use oled_types::prelude::*;
//!
//! let mut session = EncodeSession::new();
//! let frame = Frame::zeroed();
//! let bytes = session.encode_frame(&frame);
//! ```

#[doc(inline)]
pub use crate::command::Command;

#[doc(inline)]
pub use crate::decoder::Decoder;

#[doc(inline)]
pub use crate::display::{BufferAdapter, DisplayAdapter};

#[doc(inline)]
pub use crate::encoder::EncodeSession;

#[doc(inline)]
pub use crate::error::CodecError;

#[doc(inline)]
pub use crate::frame::{FRAME_SIZE, Frame, HEIGHT, WIDTH};

#[doc(inline)]
pub use crate::framer::{self, Run};

#[doc(inline)]
pub use crate::image_source::{ImageSource, SourceFrame};

#[doc(inline)]
pub use crate::player::play;

#[doc(inline)]
pub use crate::raster::rasterize;
