//! Constants used throughout findbits

pub mod bits;

use crate::models::Base;

/// Bases tried for every literal, in reporting order
pub const CANDIDATE_BASES: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hex];

/// Name the tool is invoked as in help text
pub const PROGRAM_NAME: &str = "findbits";

/// Literal used in the usage example
pub const EXAMPLE_NUMBER: &str = "73";

/// Bitstream used in the usage example
pub const EXAMPLE_BITSTREAM: &str = "0110010101110011";
