//! Stable TimSort variant with strict left-to-right pairwise merging.
//!
//! Natural runs are detected and, if too short, extended with binary insertion sort up to
//! [`min_run::min_run_len`]. The resulting runs are then merged in adjacent pairs, pass after pass,
//! until a single run spans the whole slice. There is no galloping and no run stack with merge
//! invariants.

use std::cmp::Ordering;
use std::mem;

pub mod insertion;
pub mod merge;
pub mod min_run;
pub mod run;
pub mod timsort;

mod output;

pub use output::{sort_into, sort_into_by, sort_into_by_key};

/// Sorts the slice, preserving the initial order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. Inputs made of a few long ascending or strictly descending runs are sorted in close
/// to linear time.
///
/// Each merge allocates a temporary buffer as large as the two runs being merged, which is freed
/// again before the next merge starts.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the initial order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it initially held exactly once. That is also true if `compare` panics.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, preserving the initial order of equal elements.
///
/// `f` is called on every comparison, twice per comparison. Keys are not cached.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    stable_sort(v, |a, b| f(a).lt(&f(b)));
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    timsort::merge_sort(v, &mut is_less);
}
