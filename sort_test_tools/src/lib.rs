//! Patterns and a generic conformance suite for stable sort implementations.

use std::cmp::Ordering;

/// A sort implementation under test or benchmark.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod test_types;
