//! Prelude module for `oled_internal`.

// Re-export everything from oled_types::prelude.
#[doc(inline)]
pub use oled_types::prelude::*;

// Re-export the entire oled_types module for advanced usage.
#[doc(inline)]
pub use oled_types;
