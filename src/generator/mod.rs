//! Report generation
//!
//! Renders a search report either as the human-readable listing printed by
//! default, or as JSON for scripting.

pub mod text;

use crate::errors::FindbitsResult;
use crate::models::Report;

pub use self::text::render_text;

/// Render a report as pretty-printed JSON
pub fn render_json(report: &Report) -> FindbitsResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
