//! Stable top-down merge sort.
//!
//! The sort works on positions rather than values: halves are sorted as
//! lists of input indices and the values are cloned once at the end. This
//! keeps the merge step cheap for large `T` and lets a failed comparison
//! report which input elements were involved.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::convert::Infallible;

/// Sorts a slice of totally ordered values into a new vector.
///
/// Equal elements keep their relative input order.
///
/// ```
/// use sequtils::merge_sort;
///
/// let sorted = merge_sort(&[5, 3, 1, 4, 1, 5, 9, 2, 6]);
/// assert_eq!(sorted, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Sorts a slice with a caller-supplied comparator.
///
/// The comparator must describe a total order; the result is stable with
/// respect to it.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let order = sort_indices(items.len(), &mut |a: usize, b: usize| {
        Ok::<_, Infallible>(compare(&items[a], &items[b]))
    });

    match order {
        Ok(order) => gather(items, order),
        Err(never) => match never {},
    }
}

/// Sorts a slice of partially ordered values.
///
/// Fails with [`Error::Comparison`] on the first pair of elements whose
/// `partial_cmp` is `None`, such as a `NaN` among floats.
///
/// ```
/// use sequtils::try_merge_sort;
///
/// assert_eq!(try_merge_sort(&[2.5, -1.0, 0.0]).unwrap(), vec![-1.0, 0.0, 2.5]);
/// assert!(try_merge_sort(&[1.0, f64::NAN]).is_err());
/// ```
pub fn try_merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Result<Vec<T>> {
    let order = sort_indices(items.len(), &mut |a: usize, b: usize| {
        items[a]
            .partial_cmp(&items[b])
            .ok_or_else(|| Error::Comparison { left: a, right: b })
    })
    .inspect_err(|err| log::debug!("merge sort aborted: {err}"))?;

    Ok(gather(items, order))
}

/// Merges two already sorted slices into one sorted vector.
///
/// On ties the element from `left` comes first.
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn gather<T: Clone>(items: &[T], order: Vec<usize>) -> Vec<T> {
    order.into_iter().map(|idx| items[idx].clone()).collect()
}

/// Returns the permutation of `0..len` that sorts the input.
fn sort_indices<E, F>(len: usize, compare: &mut F) -> std::result::Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> std::result::Result<Ordering, E>,
{
    sort_range(0, len, compare)
}

fn sort_range<E, F>(lo: usize, hi: usize, compare: &mut F) -> std::result::Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> std::result::Result<Ordering, E>,
{
    // Base case: zero or one element is already sorted
    if hi - lo <= 1 {
        return Ok((lo..hi).collect());
    }

    let mid = lo + (hi - lo) / 2;
    let left = sort_range(lo, mid, compare)?;
    let right = sort_range(mid, hi, compare)?;

    merge_indices(left, right, compare)
}

fn merge_indices<E, F>(
    left: Vec<usize>,
    right: Vec<usize>,
    compare: &mut F,
) -> std::result::Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> std::result::Result<Ordering, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // Only a strictly smaller right element jumps ahead
        if compare(left[i], right[j])? == Ordering::Greater {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    Ok(merged)
}
