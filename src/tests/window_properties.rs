use crate::window::{longest_unique_substring, longest_unique_window, unique_window_bounds};
use proptest::prelude::*;
use std::collections::HashSet;
use std::ops::Range;

/// Reference scan: checks every window and keeps the first longest one.
fn brute_force_bounds<T: std::hash::Hash + Eq>(items: &[T]) -> Range<usize> {
    let mut best = 0..0;
    for start in 0..items.len() {
        let mut seen = HashSet::new();
        let mut end = start;
        while end < items.len() && seen.insert(&items[end]) {
            end += 1;
        }
        if end - start > best.len() {
            best = start..end;
        }
    }
    best
}

fn all_distinct<T: std::hash::Hash + Eq>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|item| seen.insert(item))
}

proptest! {
    /// Property 1: Contiguity
    /// The result is the input slice at the reported bounds.
    #[test]
    fn prop_window_is_contiguous(input in prop::collection::vec(0u8..8, 0..100)) {
        let bounds = unique_window_bounds(&input);
        prop_assert!(bounds.end <= input.len());
        prop_assert_eq!(longest_unique_window(&input), &input[bounds]);
    }

    /// Property 2: Distinctness
    #[test]
    fn prop_window_elements_distinct(input in prop::collection::vec(0u8..8, 0..100)) {
        prop_assert!(all_distinct(longest_unique_window(&input)));
    }

    /// Property 3: Maximality and leftmost tie-break
    /// Matches an exhaustive search over every starting position.
    #[test]
    fn prop_window_matches_brute_force(input in prop::collection::vec(0u8..6, 0..60)) {
        prop_assert_eq!(unique_window_bounds(&input), brute_force_bounds(&input));
    }

    /// Property 4: Text and slice scans agree
    #[test]
    fn prop_substring_matches_char_window(text in "[a-eé日]{0,40}") {
        let chars: Vec<char> = text.chars().collect();
        let expected: String = longest_unique_window(&chars).iter().collect();
        prop_assert_eq!(longest_unique_substring(&text), expected.as_str());
    }
}

/// Bolero fuzz test: no panics and result stays distinct
#[cfg(test)]
#[test]
fn fuzz_window_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let window = longest_unique_window(input);
        assert!(window.len() <= input.len());
        assert!(all_distinct(window));
        if !input.is_empty() {
            assert!(!window.is_empty());
        }
    });
}
