//! Line format of the config file
//!
//! One entry per line, `key = value` or `key = "value"`. Blank lines and
//! lines without `=` carry no entry.

/// Split a line on its first `=` into trimmed `(key, raw_value)`.
///
/// Returns `None` for blank lines and lines without `=`. The value is
/// returned as written, quotes included.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (key, value) = trimmed.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Strip one pair of enclosing double quotes, if both are present
pub fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Whether `line` holds an entry for exactly `key` (case-sensitive)
pub fn matches_key(line: &str, key: &str) -> bool {
    split_entry(line).is_some_and(|(found, _)| found == key)
}

/// Line written over an existing entry. The value is used verbatim.
pub fn replaced_line(key: &str, value: &str) -> String {
    format!("{} = {}", key, value)
}

/// Line appended for a new entry. The value is always quoted.
pub fn appended_line(key: &str, value: &str) -> String {
    format!("{} = \"{}\"", key, value)
}
