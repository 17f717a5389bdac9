//! String utility functions

/// Split file content into lines the way a line-oriented reader sees them.
///
/// Unlike `str::lines()`, trailing blank lines are kept so that a
/// read-modify-write cycle does not silently drop them:
/// - `"a\n"` → `["a"]` (a single trailing newline is the terminator)
/// - `"a\n\n"` → `["a", ""]`
/// - `"a\r\nb\r\n"` → `["a", "b"]`
///
/// # Examples
///
/// ```
/// use noitaedit::utils::strings::split_lines;
///
/// assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
/// assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
/// assert_eq!(split_lines(""), Vec::<&str>::new());
/// ```
pub fn split_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<&str> = s
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // The empty piece after the final '\n' is the terminator, not a line.
    if s.ends_with('\n') && result.last() == Some(&"") {
        result.pop();
    }

    result
}

/// Join lines back into file content, terminating every line with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}
