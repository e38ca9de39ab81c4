//! Bit alphabet

/// Character for a cleared bit
pub const ZERO: char = '0';

/// Character for a set bit
pub const ONE: char = '1';

/// Check whether a character belongs to the bit alphabet
pub fn is_bit(c: char) -> bool {
    c == ZERO || c == ONE
}
