//! Literal token matching over a line's characters.
//!
//! Offsets here are **0-based character indices** into a line (one less than the 1-based
//! column). They are signed because callers derive search windows by subtracting token
//! lengths from a column, which can go below zero near the start of a line.

/// Returns `true` iff `needle` occurs in `haystack` starting exactly at `offset`.
///
/// Never fails: a negative offset, or one where `offset + needle.len()` runs past the end of
/// `haystack`, simply yields `false`.
pub fn has_needle_at_offset(haystack: &[char], needle: &[char], offset: isize) -> bool {
    let Ok(offset) = usize::try_from(offset) else {
        return false;
    };
    match offset.checked_add(needle.len()) {
        Some(end) if end <= haystack.len() => haystack[offset..end] == *needle,
        _ => false,
    }
}

/// [`has_needle_at_offset`] over string slices, counting offsets in characters.
///
/// ```
/// use comment_toggle::matches_at;
///
/// assert!(matches_at("a /* b", "/*", 2));
/// assert!(!matches_at("a /* b", "/*", -1));
/// assert!(!matches_at("a /*", "/*", 3));
/// ```
pub fn matches_at(haystack: &str, needle: &str, offset: isize) -> bool {
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    has_needle_at_offset(&haystack, &needle, offset)
}

/// Index of the last occurrence of `needle` that starts at or before `from`.
pub fn last_index_of(haystack: &[char], needle: &[char], from: isize) -> Option<usize> {
    let from = usize::try_from(from).ok()?;
    let last_start = haystack.len().checked_sub(needle.len())?;
    (0..=from.min(last_start))
        .rev()
        .find(|&i| has_needle_at_offset(haystack, needle, i as isize))
}

/// Index of the first occurrence of `needle` that starts at or after `from`.
///
/// A negative `from` searches from the start of the line.
pub fn index_of(haystack: &[char], needle: &[char], from: isize) -> Option<usize> {
    let from = usize::try_from(from).unwrap_or(0);
    let last_start = haystack.len().checked_sub(needle.len())?;
    (from..=last_start).find(|&i| has_needle_at_offset(haystack, needle, i as isize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_match_bounds() {
        let hay = chars("ab*/");
        let needle = chars("*/");
        assert!(has_needle_at_offset(&hay, &needle, 2));
        assert!(!has_needle_at_offset(&hay, &needle, 1));
        assert!(!has_needle_at_offset(&hay, &needle, 3));
        assert!(!has_needle_at_offset(&hay, &needle, -2));
        assert!(!has_needle_at_offset(&hay, &needle, isize::MAX));
        assert!(has_needle_at_offset(&hay, &[], 4));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(matches_at("<!--x", "<!--", 0));
        assert!(!matches_at("REM x", "rem", 0));
    }

    #[test]
    fn test_match_counts_chars_not_bytes() {
        assert!(matches_at("é/*", "/*", 1));
        assert!(!matches_at("é/*", "/*", 2));
    }

    #[test]
    fn test_last_index_of() {
        let hay = chars("/* a */ /* b");
        let start = chars("/*");
        assert_eq!(last_index_of(&hay, &start, 100), Some(8));
        assert_eq!(last_index_of(&hay, &start, 8), Some(8));
        assert_eq!(last_index_of(&hay, &start, 7), Some(0));
        assert_eq!(last_index_of(&hay, &start, 0), Some(0));
        assert_eq!(last_index_of(&hay, &start, -1), None);
        assert_eq!(last_index_of(&chars("/"), &start, 5), None);
    }

    #[test]
    fn test_index_of() {
        let hay = chars("a */ b */");
        let end = chars("*/");
        assert_eq!(index_of(&hay, &end, -3), Some(2));
        assert_eq!(index_of(&hay, &end, 2), Some(2));
        assert_eq!(index_of(&hay, &end, 3), Some(7));
        assert_eq!(index_of(&hay, &end, 8), None);
        assert_eq!(index_of(&hay, &end, 50), None);
    }

    proptest! {
        #[test]
        fn matcher_agrees_with_slice_compare(
            hay in "[ab*/]{0,12}",
            needle in "[ab*/]{1,3}",
            offset in -4isize..16,
        ) {
            let h = chars(&hay);
            let n = chars(&needle);
            let expected = offset >= 0
                && (offset as usize) + n.len() <= h.len()
                && h[offset as usize..offset as usize + n.len()] == n[..];
            prop_assert_eq!(has_needle_at_offset(&h, &n, offset), expected);
        }

        #[test]
        fn index_searches_find_real_matches(hay in "[ab*/]{0,12}", from in -4isize..16) {
            let h = chars(&hay);
            let n = chars("*/");
            if let Some(i) = last_index_of(&h, &n, from) {
                prop_assert!(i as isize <= from);
                prop_assert!(has_needle_at_offset(&h, &n, i as isize));
            }
            if let Some(i) = index_of(&h, &n, from) {
                prop_assert!(i as isize >= from);
                prop_assert!(has_needle_at_offset(&h, &n, i as isize));
            }
        }
    }
}
