#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `oled-animator` losslessly compresses frame sequences for 128x64 SSD1306
//! panels and plays them back over Linux I2C.
//!
//! The codec itself lives in [`oled_internal::oled_types`]; this crate adds
//! the `oled-encode` and `oled-play` binaries on top of it.

pub use oled_internal::*;
