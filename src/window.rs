//! Longest window of distinct elements.
//!
//! A single left-to-right pass keeps the window `[start, i]` free of
//! repeats by remembering where each element was last seen. When the
//! current element was last seen inside the window, the window start jumps
//! just past that occurrence.

use ahash::AHashMap as HashMap;
use std::hash::Hash;
use std::ops::Range;

/// Returns the longest contiguous run of pairwise distinct elements.
///
/// When several runs share the maximum length the leftmost one wins. An
/// empty input yields an empty slice.
///
/// ```
/// use sequtils::longest_unique_window;
///
/// let window = longest_unique_window(&[1, 2, 1, 3, 4, 3]);
/// assert_eq!(window, &[2, 1, 3, 4]);
/// ```
pub fn longest_unique_window<T: Hash + Eq>(items: &[T]) -> &[T] {
    &items[unique_window_bounds(items)]
}

/// Returns the index range that [`longest_unique_window`] slices with.
pub fn unique_window_bounds<T: Hash + Eq>(items: &[T]) -> Range<usize> {
    scan(items.iter())
}

/// Character-level variant of [`longest_unique_window`] for text.
///
/// ```
/// use sequtils::longest_unique_substring;
///
/// assert_eq!(longest_unique_substring("abcabcbb"), "abc");
/// assert_eq!(longest_unique_substring("bbbbb"), "b");
/// ```
pub fn longest_unique_substring(text: &str) -> &str {
    let bounds = scan(text.chars());

    // Window bounds are char positions; map them onto byte offsets
    let byte_offset = |nth: usize| {
        text.char_indices()
            .nth(nth)
            .map_or(text.len(), |(offset, _)| offset)
    };

    &text[byte_offset(bounds.start)..byte_offset(bounds.end)]
}

fn scan<K, I>(elements: I) -> Range<usize>
where
    K: Hash + Eq,
    I: Iterator<Item = K>,
{
    let mut last_seen: HashMap<K, usize> = HashMap::new();
    let mut start = 0;
    let mut best_start = 0;
    let mut best_len = 0;

    for (i, element) in elements.enumerate() {
        match last_seen.get(&element) {
            Some(&seen) if seen >= start => start = seen + 1,
            _ => {
                let len = i - start + 1;
                if len > best_len {
                    best_len = len;
                    best_start = start;
                }
            }
        }
        last_seen.insert(element, i);
    }

    log::trace!(
        "unique window scan: best [{}, {}) over {} distinct elements",
        best_start,
        best_start + best_len,
        last_seen.len()
    );

    best_start..best_start + best_len
}
