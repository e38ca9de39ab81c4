//! Data models for bitstream search reports

pub mod base;
pub mod report;

pub use self::base::Base;
pub use self::report::{BaseReport, Match, Orientation, Report, SearchResult};
