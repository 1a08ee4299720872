// src/core/sanitize.rs

/// Integer right after the first `marker` in `s`: `"?mod=x&upload=42&y"` → 42.
///
/// Only the leading run of ASCII digits counts; `None` if the marker is missing
/// or not followed by a digit.
pub fn int_after_marker(s: &str, marker: &str) -> Option<i64> {
    let idx = s.find(marker)?;
    leading_int(&s[idx + marker.len()..])
}

/// Leading ASCII digits of `s` (after surrounding whitespace) as an integer.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Whole-string integer, tolerating surrounding whitespace.
pub fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
