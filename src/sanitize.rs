//! String utilities for resource strings
//!
//! Placeholder spans (`{...}`) are treated as opaque: their contents are never
//! altered by sanitization and are ignored by the collection case check.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Regex for matching placeholder spans: {anything but a closing brace}
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Characters never allowed in a path segment outside a placeholder
const DISALLOWED: &[char] = &['\\', '"', '<', '>', '|', '#', '?'];

/// Clean a raw resource string before it is split
///
/// Trims surrounding whitespace, drops spaces, non-whitespace control
/// characters and [`DISALLOWED`] characters that sit outside placeholder spans,
/// then removes at most one leading and one trailing slash. Other inner
/// whitespace is kept so blank segments can still be reported.
pub fn sanitize_resource(resource: &str) -> String {
    let trimmed = resource.trim();
    let mut result = String::with_capacity(trimmed.len());
    let mut last = 0;

    for span in PLACEHOLDER_REGEX.find_iter(trimmed) {
        push_clean(&mut result, &trimmed[last..span.start()]);
        result.push_str(span.as_str());
        last = span.end();
    }
    push_clean(&mut result, &trimmed[last..]);

    let res = result.strip_prefix('/').unwrap_or(&result);
    let res = res.strip_suffix('/').unwrap_or(res);
    res.to_string()
}

fn push_clean(out: &mut String, segment: &str) {
    out.extend(segment.chars().filter(|&c| {
        c != ' ' && !(c.is_control() && !c.is_whitespace()) && !DISALLOWED.contains(&c)
    }));
}

/// Check that a string holds no uppercase characters
pub fn is_lower_case(s: &str) -> bool {
    !s.chars().any(char::is_uppercase)
}

/// Byte range of the placeholder span in `s`, if any
///
/// Matches the first `{` with the first `}`; the span only counts when the
/// closing brace comes after the opening one. Nesting is not considered.
pub fn placeholder_span(s: &str) -> Option<Range<usize>> {
    let start = s.find('{')?;
    let end = s.find('}')?;
    (end > start).then(|| start..end + 1)
}

/// Remove the placeholder span, leaving only the literal text around it
pub fn strip_placeholder(s: &str) -> String {
    match placeholder_span(s) {
        Some(span) => format!("{}{}", &s[..span.start], &s[span.end..]),
        None => s.to_string(),
    }
}
