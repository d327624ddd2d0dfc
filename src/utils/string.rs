//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Split a space-separated list of names, trimming surrounding quotes
///
/// `"'foo bar'"` and `"foo  bar"` both yield `["foo", "bar"]`; an empty or
/// whitespace-only string yields no names.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
