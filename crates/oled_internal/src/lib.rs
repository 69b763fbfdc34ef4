//! Internal crate for `oled-animator`.
//!
//! Kept as its own crate for the same reason `oled_types` is kept free of
//! CLI/transport concerns: it gives the root package a single stable
//! re-export surface to build binaries against.
//!
//! # Examples
//!
//! ```rust
//! use oled_internal::prelude::*;
//!
//! let frame = Frame::zeroed();
//! let mut session = EncodeSession::new();
//! let _bytes = session.encode_frame(&frame);
//! ```

/// `use oled_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export oled_types for advanced usage.
pub use oled_types;
