use std::cmp::Ordering;

/// Substring test ignoring case.
///
/// `lowercase_needle` must already be lower-cased.
pub fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Compare two texts alphabetically, ignoring case.
///
/// Texts that only differ in case are ordered by their raw
/// representation, so the result is a total order.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
