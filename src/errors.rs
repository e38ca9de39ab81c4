//! Error handling for findbits.
//!
//! This module provides the error type shared by the library and the binary.
//! Most of these errors never reach the user: a literal that does not parse
//! under one base simply causes that base to be skipped. Only argument
//! problems and strict-mode bitstream violations end a run.

use thiserror::Error;

use crate::models::Base;

/// Main error type for findbits.
///
/// Each variant corresponds to a specific category of errors, with a
/// descriptive message providing details about the specific error.
#[derive(Error, Debug)]
pub enum FindbitsError {
    /// The literal contains characters that are not digits of the base.
    #[error("invalid literal '{literal}' for {base}")]
    InvalidLiteral {
        /// Literal as typed on the command line.
        literal: String,
        /// Base the literal was interpreted under.
        base: Base,
    },

    /// The bitstream contains a character other than '0' or '1'.
    ///
    /// Only raised when strict validation is requested.
    #[error("invalid character '{character}' in bitstream at offset {offset}")]
    InvalidBitstream {
        /// Offending character.
        character: char,
        /// Character offset within the bitstream.
        offset: usize,
    },

    /// A flag on the command line is not recognised.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// Errors from JSON serialization of a report.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for findbits.
pub type FindbitsResult<T> = Result<T, FindbitsError>;
