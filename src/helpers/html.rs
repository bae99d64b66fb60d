//! HTML helper functions

/// Truncate a string to `length` characters, appending "..." when cut
///
/// # Examples
/// ```ignore
/// truncate("Procedural Worlds", 10) // -> "Procedural..."
/// ```
pub fn truncate(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(length).collect();
        format!("{}...", truncated)
    }
}
