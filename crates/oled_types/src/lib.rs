//! Core codec for the lossless bit-packed animation format driven onto
//! SSD1306 128x64 monochrome OLED panels.
//!
//! # Pipeline
//!
//! ```text
//! packed-pixel source --[raster]--> Frame --[framer+encoder]--> bytes
//! bytes --[decoder]--> DisplayAdapter calls --[player]--> panel/buffer
//! ```
//!
//! This crate has no knowledge of GIFs, I2C, or any other transport; those
//! live in the binaries that use it. See [`image_source`] and [`display`]
//! for the seams where a real implementation plugs in.

pub mod command;
pub mod decoder;
pub mod display;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod framer;
pub mod image_source;
pub mod player;
pub mod raster;

pub mod prelude;
