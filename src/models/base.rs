//! Numeric base model

use std::fmt;
use serde::Serialize;

/// Numeral system a literal is interpreted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Base {
    /// All bases in the order they are tried
    pub const ALL: [Base; 4] = crate::constants::CANDIDATE_BASES;

    /// Radix of the base
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }

    /// Human-readable name used in report headers
    pub fn label(self) -> &'static str {
        match self {
            Base::Binary => "BINARY",
            Base::Octal => "OCTAL",
            Base::Decimal => "DECIMAL",
            Base::Hex => "HEX",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
