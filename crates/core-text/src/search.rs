//! Literal substring search-and-replace on a single line.
//!
//! Matches are found left to right and never overlap. After each
//! replacement the scan resumes immediately after the inserted text, so the
//! replacement is never rescanned (replacing `a` with `aa` terminates).

/// Replace every non-overlapping occurrence of `needle` in `haystack`.
/// Returns the rewritten text and the number of replacements. An empty
/// `needle` matches nothing.
pub fn replace_all(haystack: &str, needle: &str, replacement: &str) -> (String, usize) {
    if needle.is_empty() {
        return (haystack.to_string(), 0);
    }
    let mut out = String::with_capacity(haystack.len());
    let mut count = 0usize;
    let mut rest = haystack;
    while let Some(idx) = rest.find(needle) {
        out.push_str(&rest[..idx]);
        out.push_str(replacement);
        rest = &rest[idx + needle.len()..];
        count += 1;
    }
    out.push_str(rest);
    (out, count)
}

/// Count non-overlapping occurrences without rewriting.
pub fn count_matches(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
