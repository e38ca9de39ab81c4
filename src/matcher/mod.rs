//! Bit-pattern matcher
//!
//! Derives a pattern from a literal under every candidate base and searches a
//! bitstream for it in each orientation.

use log::{debug, info};

use crate::models::{Base, BaseReport, Orientation, Report, SearchResult};
use crate::utils::bits::{binary_string_of, invert, reverse};
use crate::utils::pattern::highlight;


/// Search a bitstream for a pattern in all four orientations.
///
/// The results come back in `Orientation::ALL` order: forward, reversed,
/// then both again against the inverted bitstream.
pub fn match_all_orientations(base: Base, pattern: &str, bitstream: &str) -> BaseReport {
    let reversed = reverse(pattern);
    let inverted = invert(bitstream);

    let results = Orientation::ALL
        .iter()
        .map(|&orientation| {
            let needle = if orientation.reverses_pattern() { reversed.as_str() } else { pattern };
            let haystack = if orientation.inverts_bitstream() { inverted.as_str() } else { bitstream };
            let location = highlight(needle, haystack);

            match &location {
                Some(m) => debug!("{} {} ({}): match at bit {}", base, orientation, needle, m.offset),
                None => debug!("{} {} ({}): not found", base, orientation, needle),
            }

            SearchResult {
                orientation,
                pattern: needle.to_string(),
                location,
            }
        })
        .collect();

    BaseReport {
        base,
        pattern: pattern.to_string(),
        reversed,
        inverted_bitstream: inverted,
        results,
    }
}

/// Search a bitstream for a literal under every candidate base.
///
/// Bases the literal does not parse under are left out of the report.
pub fn find_bits(literal: &str, bitstream: &str) -> Report {
    let mut bases = Vec::new();

    for base in Base::ALL {
        let pattern = match binary_string_of(literal, base) {
            Ok(pattern) => pattern,
            Err(e) => {
                debug!("Skipping {}: {}", base, e);
                continue;
            }
        };

        info!("Trying {} with pattern '{}'", base, pattern);
        bases.push(match_all_orientations(base, &pattern, bitstream));
    }

    Report {
        literal: literal.to_string(),
        bitstream: bitstream.to_string(),
        bases,
    }
}
