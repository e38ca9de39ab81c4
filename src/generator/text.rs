//! Plain text report

use crate::models::{BaseReport, Report, SearchResult};

/// Render a report in the classic listing format.
///
/// Each base gets a blank line and a `Trying <BASE>` header, followed by the
/// forward and reverse results against the bitstream and then, under an
/// `Inverse:` line showing the flipped bitstream, the same two searches
/// against it.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for base_report in &report.bases {
        push_base(&mut out, base_report);
    }
    out
}

fn push_base(out: &mut String, report: &BaseReport) {
    out.push('\n');
    out.push_str(&format!("Trying {}\n", report.base));

    let (plain, inverse): (Vec<&SearchResult>, Vec<&SearchResult>) = report
        .results
        .iter()
        .partition(|r| !r.orientation.inverts_bitstream());

    for result in plain {
        out.push_str(&result_line("  ", result));
    }
    out.push_str(&format!("  Inverse: ({})\n", report.inverted_bitstream));
    for result in inverse {
        out.push_str(&result_line("    ", result));
    }
}

fn result_line(indent: &str, result: &SearchResult) -> String {
    let outcome = match &result.location {
        Some(m) => format!("*** Match at bit {}: {}<{}>{}", m.offset, m.prefix, m.matched, m.suffix),
        None => "Not found".to_string(),
    };
    format!("{}{}: ({}) {}\n", indent, result.orientation.label(), result.pattern, outcome)
}
