//! Truncated listing of a selector's matches

use std::fmt::Display;

use crate::index::Position;

/// Marker standing in for the elided matches.
pub const ELLIPSIS: &str = "...";

/// Renders `[p0, p1, ...]` for a selector's matches.
///
/// While the table has at most `limit` rows every match is listed (there
/// can be at most `limit` of them). Past that, only the first `limit - 1`
/// matches are listed, followed by the ellipsis and the *table's* last
/// element, which may or may not be one of the matches.
pub fn render<T: Display>(matches: &[Position], rows: &[T], limit: usize) -> String {
    let limit = limit.max(2);
    let mut parts: Vec<String> = Vec::with_capacity(limit + 1);

    match rows.last() {
        Some(last) if rows.len() > limit => {
            parts.extend(matches.iter().take(limit - 1).map(Position::to_string));
            parts.push(ELLIPSIS.to_string());
            parts.push(last.to_string());
        }
        _ => parts.extend(matches.iter().take(limit).map(Position::to_string)),
    }

    format!("[{}]", parts.join(", "))
}
