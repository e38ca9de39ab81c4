//! Pattern matching utilities

use crate::models::Match;

/// Byte range of the leftmost occurrence of a non-empty needle
fn locate(needle: &str, haystack: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    haystack.find(needle).map(|start| (start, start + needle.len()))
}

/// Find the bit offset of the first occurrence of a pattern.
///
/// An empty needle never matches.
pub fn find_first(needle: &str, haystack: &str) -> Option<usize> {
    locate(needle, haystack).map(|(start, _)| haystack[..start].chars().count())
}

/// Find the first occurrence of a pattern and split the haystack around it
pub fn highlight(needle: &str, haystack: &str) -> Option<Match> {
    let (start, end) = locate(needle, haystack)?;

    Some(Match {
        offset: haystack[..start].chars().count(),
        prefix: haystack[..start].to_string(),
        matched: haystack[start..end].to_string(),
        suffix: haystack[end..].to_string(),
    })
}
