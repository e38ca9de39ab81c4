//! Utility functions and helpers

pub mod bits;
pub mod pattern;

pub use self::bits::{binary_string_of, invert, reverse, validate_bitstream};
pub use self::pattern::{find_first, highlight};
