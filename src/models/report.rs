//! Search report model

use std::fmt;
use serde::Serialize;
use crate::models::base::Base;

/// One of the four pattern/bitstream orderings searched per base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Pattern as derived, bitstream as given
    Forward,
    /// Pattern reversed, bitstream as given
    Reverse,
    /// Pattern as derived, bitstream inverted
    InverseForward,
    /// Pattern reversed, bitstream inverted
    InverseReverse,
}

impl Orientation {
    /// All orientations in reporting order
    pub const ALL: [Orientation; 4] = [
        Orientation::Forward,
        Orientation::Reverse,
        Orientation::InverseForward,
        Orientation::InverseReverse,
    ];

    pub fn reverses_pattern(self) -> bool {
        matches!(self, Orientation::Reverse | Orientation::InverseReverse)
    }

    pub fn inverts_bitstream(self) -> bool {
        matches!(self, Orientation::InverseForward | Orientation::InverseReverse)
    }

    /// Short label for the pattern ordering, as printed in text reports
    pub fn label(self) -> &'static str {
        if self.reverses_pattern() {
            "Reverse"
        } else {
            "Forward"
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverts_bitstream() {
            write!(f, "Inverse/{}", self.label())
        } else {
            f.write_str(self.label())
        }
    }
}

/// A located pattern, with the bitstream split around it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Bit offset of the first matched bit
    pub offset: usize,
    /// Bits before the match
    pub prefix: String,
    /// The matched bits
    pub matched: String,
    /// Bits after the match
    pub suffix: String,
}

/// Outcome of a single search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub orientation: Orientation,
    /// Pattern variant that was searched for
    pub pattern: String,
    /// First match, if any
    pub location: Option<Match>,
}

impl SearchResult {
    pub fn offset(&self) -> Option<usize> {
        self.location.as_ref().map(|m| m.offset)
    }

    pub fn is_found(&self) -> bool {
        self.location.is_some()
    }
}

/// All searches run for one base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseReport {
    pub base: Base,
    /// Pattern derived from the literal under this base
    pub pattern: String,
    /// Pattern in reverse bit order
    pub reversed: String,
    /// Bitstream with every bit flipped
    pub inverted_bitstream: String,
    /// One result per orientation, in `Orientation::ALL` order
    pub results: Vec<SearchResult>,
}

impl BaseReport {
    /// Get the result for an orientation
    pub fn result(&self, orientation: Orientation) -> Option<&SearchResult> {
        self.results.iter().find(|r| r.orientation == orientation)
    }

    /// Number of orientations that matched
    pub fn match_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_found()).count()
    }
}

/// Full report for one literal against one bitstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Literal as typed
    pub literal: String,
    /// Bitstream as given
    pub bitstream: String,
    /// One entry per base the literal parsed under
    pub bases: Vec<BaseReport>,
}

impl Report {
    /// Get the report for a base, if the literal was valid in it
    pub fn base(&self, base: Base) -> Option<&BaseReport> {
        self.bases.iter().find(|b| b.base == base)
    }

    /// Whether any orientation under any base matched
    pub fn has_match(&self) -> bool {
        self.bases.iter().any(|b| b.match_count() > 0)
    }
}
