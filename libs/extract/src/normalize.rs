//! Case-insensitive string comparison.
//!
//! All filter matching in the search engine is "case-insensitive substring";
//! these helpers keep that definition in one place. `find_fold` additionally
//! returns a byte span valid for slicing the original string, which the
//! result mapper needs for highlighting.

/// Normalize free text for comparison: trim and lowercase.
pub fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Case-insensitive substring containment. An empty needle matches.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Byte span of the first case-insensitive occurrence of `needle` in
/// `haystack`, or `None` when the needle is empty or absent.
///
/// The span is computed against the original string, so it stays valid for
/// slicing even when lowercasing would change byte lengths.
pub fn find_fold(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        if let Some(len) = fold_prefix_len(&haystack[start..], needle) {
            return Some((start, start + len));
        }
    }
    None
}

/// Length in bytes of the prefix of `haystack` that case-insensitively
/// equals `needle`, when such a prefix ends on a char boundary.
fn fold_prefix_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut wanted = needle.chars().flat_map(char::to_lowercase);
    let mut pending = wanted.next();
    let mut consumed = 0;

    for c in haystack.chars() {
        for folded in c.to_lowercase() {
            match pending {
                Some(expected) if expected == folded => pending = wanted.next(),
                // Mismatch, or the needle ran out mid-character.
                _ => return None,
            }
        }
        consumed += c.len_utf8();
        if pending.is_none() {
            return Some(consumed);
        }
    }
    None
}
