//! # sequtils - Sequence Algorithms and Small Utilities
//!
//! Three independent sequence algorithms, each a pure function over its
//! input:
//! 1. **Merge sort**: stable divide-and-conquer sort into a new vector
//! 2. **Unique window**: longest contiguous run without repeated elements
//! 3. **Run-length coding**: `(value, count)` runs and a compact text form
//!
//! Alongside them sit thin helpers for text, JSON files, checksums, dates
//! and integer arithmetic.
//!
//! ## Example
//!
//! ```
//! use sequtils::{longest_unique_substring, merge_sort, rle_decode, rle_encode};
//!
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//! assert_eq!(longest_unique_substring("abcabcbb"), "abc");
//!
//! let encoded = rle_encode("aaabbc").unwrap();
//! assert_eq!(encoded, "a3b2c1");
//! assert_eq!(rle_decode(&encoded).unwrap(), "aaabbc");
//! ```
//!
//! ## Complexity
//!
//! - Merge sort: O(n log n) time, O(n) auxiliary space
//! - Unique window: O(n) time, O(k) space for k distinct elements
//! - Run-length coding: O(n) in both directions

mod calendar;
mod error;
mod files;
mod math;
mod merge_sort;
mod rle;
mod strings;
mod window;

#[cfg(test)]
mod tests;

pub use calendar::{date_str, days_diff, format_date, DEFAULT_DATE_FORMAT};
pub use error::{Error, Result};
pub use files::{checksum, create_dir, read_json, write_json, ChecksumAlgorithm, CHECKSUM_CHUNK_SIZE};
pub use math::{factorial, is_prime, FibonacciMemo};
pub use merge_sort::{merge_sort, merge_sort_by, merge_sorted, try_merge_sort};
pub use rle::{
    decode_runs, encode_runs, encode_to_string, expand_runs, rle_decode, rle_encode, runs,
    DecodedRuns, Run, Runs,
};
pub use strings::{capitalize_first, reverse_string};
pub use window::{longest_unique_substring, longest_unique_window, unique_window_bounds};
