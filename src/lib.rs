//! A library for locating a known number inside a textual bitstream
//!
//! The literal is read as binary, octal, decimal and hex in turn. Each
//! resulting bit pattern is searched for forward and reversed, against both
//! the bitstream and its bitwise inversion. This is useful when working out
//! how an unknown protocol (an RFID tag dump, say) lays out its fields.

pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod matcher;
pub mod models;
pub mod utils;

pub use matcher::{find_bits, match_all_orientations};

/// Version of findbits
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
