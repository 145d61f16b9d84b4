// Output formatting: terminal display for every command.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters, not bytes, so post content with accents or emoji is
/// never cut in the middle of a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

/// Human-readable post age, e.g. "3d" or "5h".
pub fn format_age(hours: i64) -> String {
    match hours {
        h if h < 1 => "now".to_string(),
        h if h < 48 => format!("{h}h"),
        h => format!("{}d", h / 24),
    }
}
