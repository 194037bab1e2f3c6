// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case-insensitive substring containment shared by all providers.
//!
//! Plain containment only; fuzzy or typo-tolerant matching is deliberately
//! out of scope.

/// Position of the first case-insensitive occurrence of a needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Zero-based character offset; feeds the provider score formulas.
    pub char_pos: usize,
    /// Byte offset into the original (non-lowered) text, valid for slicing.
    pub byte_pos: usize,
}

/// Normalize a raw query for matching: trimmed and lower-cased.
///
/// Returns `None` for empty or whitespace-only input; no query means no
/// matches by policy, not by error.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Find the first case-insensitive occurrence of `needle_lower` in
/// `haystack`. The needle must already be lower-cased (see
/// [`normalize_query`]); an empty needle never matches.
pub fn find_ignore_case(haystack: &str, needle_lower: &str) -> Option<Hit> {
    if needle_lower.is_empty() {
        return None;
    }
    for (char_pos, (byte_pos, _)) in haystack.char_indices().enumerate() {
        if starts_with_ignore_case(&haystack[byte_pos..], needle_lower) {
            return Some(Hit { char_pos, byte_pos });
        }
    }
    None
}

fn starts_with_ignore_case(text: &str, needle_lower: &str) -> bool {
    let mut lowered = text.chars().flat_map(char::to_lowercase);
    needle_lower
        .chars()
        .all(|expected| lowered.next() == Some(expected))
}
