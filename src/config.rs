//! Command line configuration
//!
//! Arguments are parsed by hand: two positionals plus a handful of flags.

use crate::constants::{EXAMPLE_BITSTREAM, EXAMPLE_NUMBER, PROGRAM_NAME};
use crate::errors::{FindbitsError, FindbitsResult};

/// Options for a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number to look for, interpreted under every candidate base
    pub literal: String,
    /// Bitstream to search
    pub bitstream: String,
    /// Print the report as JSON
    pub json: bool,
    /// Reject bitstreams containing anything other than '0' and '1'
    pub strict: bool,
    /// Enable debug logging
    pub verbose: bool,
    /// Positional arguments beyond the first two, which are not used
    pub ignored: Vec<String>,
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Version,
    Usage,
}

impl Command {
    /// Parse command line arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> FindbitsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positionals = Vec::new();
        let mut json = false;
        let mut strict = false;
        let mut verbose = false;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--version" | "-v" => return Ok(Command::Version),
                "--help" | "-h" => return Ok(Command::Usage),
                "--json" | "-j" => json = true,
                "--strict" | "-s" => strict = true,
                "--verbose" => verbose = true,
                flag if is_flag(flag) => {
                    return Err(FindbitsError::UnknownArgument(flag.to_string()));
                }
                positional => positionals.push(positional.to_string()),
            }
        }

        let mut positionals = positionals.into_iter();
        match (positionals.next(), positionals.next()) {
            (Some(literal), Some(bitstream)) => Ok(Command::Run(Config {
                literal,
                bitstream,
                json,
                strict,
                verbose,
                ignored: positionals.collect(),
            })),
            _ => Ok(Command::Usage),
        }
    }
}

/// A dash followed by a digit is a (negative) literal, not a flag
fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-') && chars.next().map_or(false, |c| !c.is_ascii_digit())
}

/// Usage text shown when the arguments are incomplete
pub fn usage(program: &str) -> String {
    format!(
        "\n\
        \t{program} - Search bitstream for a known number\n\
        \n\
        Usage: {program} [--json] [--strict] [--verbose] <NUMBER> <BITSTREAM>\n\
        \n\
        \tNUMBER will be converted to its BINARY equivalent for all valid\n\
        \tinstances of BINARY, OCTAL, DECIMAL and HEX, and the bitstream\n\
        \tand its inverse will be searched for a pattern match. Note that\n\
        \tNUMBER must be specified in BINARY to match leading zeros.\n\
        \n\
        Options:\n\
        \x20 --json, -j       Print the report as JSON\n\
        \x20 --strict, -s     Reject a BITSTREAM containing anything but 0 and 1\n\
        \x20 --verbose        Log every search to stderr\n\
        \x20 --version, -v    Show version information\n\
        \n\
        Example:\n\
        \n\
        \t{example_program} {EXAMPLE_NUMBER} {EXAMPLE_BITSTREAM}\n",
        example_program = PROGRAM_NAME,
    )
}
