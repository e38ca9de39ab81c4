//! Bit string conversions

use crate::constants::bits::{is_bit, ONE, ZERO};
use crate::errors::{FindbitsError, FindbitsResult};
use crate::models::Base;

/// Derive the search pattern for a literal under a base.
///
/// Binary literals are returned exactly as typed so that leading zeros take
/// part in the search. Every other base is converted to its minimal
/// big-endian binary form, and a zero value produces an empty pattern.
pub fn binary_string_of(literal: &str, base: Base) -> FindbitsResult<String> {
    let radix = base.radix();
    let digits: Option<Vec<u32>> = literal.chars().map(|c| c.to_digit(radix)).collect();
    let digits = match digits {
        Some(digits) if !digits.is_empty() => digits,
        _ => {
            return Err(FindbitsError::InvalidLiteral {
                literal: literal.to_string(),
                base,
            })
        }
    };

    if base == Base::Binary {
        return Ok(literal.to_string());
    }

    Ok(digits_to_binary(&digits, radix))
}

/// Minimal big-endian binary form of a digit sequence; empty for zero.
///
/// The value is accumulated in little-endian 32-bit limbs, so literals of
/// any length convert.
pub fn digits_to_binary(digits: &[u32], radix: u32) -> String {
    let mut limbs: Vec<u32> = Vec::new();
    for &digit in digits {
        let mut carry = u64::from(digit);
        for limb in limbs.iter_mut() {
            let wide = u64::from(*limb) * u64::from(radix) + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
    }

    match limbs.split_last() {
        None => String::new(),
        Some((top, rest)) => {
            let mut out = format!("{:b}", top);
            for limb in rest.iter().rev() {
                out.push_str(&format!("{:032b}", limb));
            }
            out
        }
    }
}

/// Flip every bit. Other characters are left alone.
pub fn invert(bits: &str) -> String {
    bits.chars()
        .map(|c| match c {
            ZERO => ONE,
            ONE => ZERO,
            other => other,
        })
        .collect()
}

/// Reverse the bit order
pub fn reverse(bits: &str) -> String {
    bits.chars().rev().collect()
}

/// Reject a bitstream containing anything other than '0' and '1'
pub fn validate_bitstream(bitstream: &str) -> FindbitsResult<()> {
    match bitstream.chars().enumerate().find(|(_, c)| !is_bit(*c)) {
        Some((offset, character)) => Err(FindbitsError::InvalidBitstream { character, offset }),
        None => Ok(()),
    }
}
