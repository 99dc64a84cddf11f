//! Run-length coding.
//!
//! Sequences are described as ordered [`Run`]s of identical consecutive
//! values. The text form writes each run as the value followed by its
//! decimal count, so `"aaabbc"` becomes `"a3b2c1"`.
//!
//! The text form has no escaping. A value that is itself an ASCII digit
//! cannot be told apart from a count, and such input does not round-trip.
//! The decoder does not try to detect this.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::iter;

/// A maximal block of `count` consecutive copies of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run<T> {
    pub value: T,
    /// Number of consecutive occurrences (at least 1 when produced by [`runs`])
    pub count: usize,
}

impl<T> Run<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }
}

impl<T: Clone> Run<&T> {
    /// Converts a borrowed run into an owned one.
    pub fn cloned(self) -> Run<T> {
        Run::new(self.value.clone(), self.count)
    }
}

impl<T: fmt::Display> fmt::Display for Run<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.count)
    }
}

/// Iterator over the maximal runs of a slice.
///
/// Created by [`runs`].
pub struct Runs<'a, T> {
    remaining: &'a [T],
}

/// Splits a slice into its maximal runs of equal consecutive elements.
///
/// ```
/// use sequtils::{runs, Run};
///
/// let collected: Vec<Run<&char>> = runs(&['x', 'x', 'y']).collect();
/// assert_eq!(collected, vec![Run::new(&'x', 2), Run::new(&'y', 1)]);
/// ```
pub fn runs<T: PartialEq>(items: &[T]) -> Runs<'_, T> {
    Runs { remaining: items }
}

impl<'a, T: PartialEq> Iterator for Runs<'a, T> {
    type Item = Run<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.remaining.first()?;
        let count = self
            .remaining
            .iter()
            .take_while(|item| *item == first)
            .count();

        self.remaining = &self.remaining[count..];
        Some(Run::new(first, count))
    }
}

/// Encodes a slice as owned runs.
///
/// Fails with [`Error::EmptyInput`] when `items` is empty.
pub fn encode_runs<T: PartialEq + Clone>(items: &[T]) -> Result<Vec<Run<T>>> {
    if items.is_empty() {
        return Err(Error::EmptyInput("run-length encoding needs at least one element"));
    }

    Ok(runs(items).map(Run::cloned).collect())
}

/// Reverses [`encode_runs`], repeating each value `count` times.
///
/// Fails with [`Error::Overflow`] when the combined length of the runs
/// cannot be allocated.
pub fn expand_runs<T: Clone>(encoded: &[Run<T>]) -> Result<Vec<T>> {
    let total = encoded
        .iter()
        .try_fold(0usize, |acc, run| acc.checked_add(run.count))
        .ok_or(Error::Overflow("total run length exceeds usize"))?;

    let mut expanded = Vec::new();
    expanded
        .try_reserve(total)
        .map_err(|_| Error::Overflow("total run length cannot be allocated"))?;

    for run in encoded {
        expanded.extend(iter::repeat(run.value.clone()).take(run.count));
    }

    Ok(expanded)
}

/// Encodes any displayable slice into the text form.
///
/// Each run contributes the value's `Display` output followed by the count.
pub fn encode_to_string<T: PartialEq + fmt::Display>(items: &[T]) -> Result<String> {
    if items.is_empty() {
        return Err(Error::EmptyInput("run-length encoding needs at least one element"));
    }

    let mut encoded = String::new();
    for run in runs(items) {
        // Writing into a String cannot fail
        let _ = write!(encoded, "{run}");
    }

    Ok(encoded)
}

/// Run-length encodes text, one run per group of identical characters.
///
/// ```
/// use sequtils::rle_encode;
///
/// assert_eq!(rle_encode("aaabbc").unwrap(), "a3b2c1");
/// assert!(rle_encode("").is_err());
/// ```
pub fn rle_encode(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let Some(mut current) = chars.next() else {
        return Err(Error::EmptyInput("run-length encoding needs at least one character"));
    };

    let mut count = 1usize;
    let mut encoded = String::with_capacity(text.len());

    for ch in chars {
        if ch == current {
            count += 1;
        } else {
            flush_run(&mut encoded, current, count);
            current = ch;
            count = 1;
        }
    }
    flush_run(&mut encoded, current, count);

    log::trace!("rle encoded {} bytes into {} bytes", text.len(), encoded.len());
    Ok(encoded)
}

fn flush_run(buffer: &mut String, value: char, count: usize) {
    buffer.push(value);
    let _ = write!(buffer, "{count}");
}

/// Iterator over the runs written in encoded text.
///
/// Created by [`decode_runs`].
pub struct DecodedRuns<'a> {
    text: &'a str,
    offset: usize,
    count_offset: usize,
}

impl DecodedRuns<'_> {
    /// Byte offset where the count of the last yielded run starts.
    pub fn count_offset(&self) -> usize {
        self.count_offset
    }
}

/// Parses encoded text into runs without expanding them.
///
/// Each run is one value character followed by every ASCII digit that
/// immediately follows it. A value with no digits yields a run of count 0.
/// The only reported failure is a count too large for `usize`.
///
/// [`DecodedRuns::count_offset`] gives the byte offset of the most recently
/// parsed count.
pub fn decode_runs(text: &str) -> DecodedRuns<'_> {
    DecodedRuns {
        text,
        offset: 0,
        count_offset: 0,
    }
}

impl Iterator for DecodedRuns<'_> {
    type Item = Result<Run<char>>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.text[self.offset..].chars().next()?;

        let digits_start = self.offset + value.len_utf8();
        let digits_len = self.text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let digits = &self.text[digits_start..digits_start + digits_len];
        self.offset = digits_start + digits_len;
        self.count_offset = digits_start;

        if digits.is_empty() {
            return Some(Ok(Run::new(value, 0)));
        }

        Some(
            digits
                .parse::<usize>()
                .map(|count| Run::new(value, count))
                .map_err(|_| Error::CountOverflow {
                    offset: digits_start,
                }),
        )
    }
}

/// Decodes text produced by [`rle_encode`].
///
/// Fails with [`Error::CountOverflow`] when a count does not fit in
/// `usize` or the decoded text could not be allocated.
///
/// ```
/// use sequtils::rle_decode;
///
/// assert_eq!(rle_decode("a3b2c1").unwrap(), "aaabbc");
/// ```
pub fn rle_decode(text: &str) -> Result<String> {
    let mut decoded = String::with_capacity(text.len());

    let mut parsed = decode_runs(text);
    while let Some(run) = parsed.next() {
        let run = run.inspect_err(|err| log::debug!("rle decode failed: {err}"))?;

        let offset = parsed.count_offset();
        run.count
            .checked_mul(run.value.len_utf8())
            .and_then(|bytes| decoded.try_reserve(bytes).ok())
            .ok_or(Error::CountOverflow { offset })
            .inspect_err(|err| log::debug!("rle decode failed: {err}"))?;

        decoded.extend(iter::repeat(run.value).take(run.count));
    }

    Ok(decoded)
}
