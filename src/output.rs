use std::cmp::Ordering;

/// Sorts the elements of `input` and appends them to `output` in ascending order.
///
/// `input` can be any iterator, for example over a `LinkedList`. Its elements are collected into
/// a `Vec` first, which is sorted in place with [`crate::sort`] and then moved into `output`.
#[inline]
pub fn sort_into<T, I, E>(input: I, output: &mut E)
where
    T: Ord,
    I: IntoIterator<Item = T>,
    E: Extend<T>,
{
    sort_into_by(input, output, |a, b| a.cmp(b));
}

/// Like [`sort_into`], but ordered by a comparator function. Stable.
#[inline]
pub fn sort_into_by<T, I, E, F>(input: I, output: &mut E, compare: F)
where
    I: IntoIterator<Item = T>,
    E: Extend<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buf = input.into_iter().collect::<Vec<T>>();
    crate::sort_by(&mut buf, compare);
    output.extend(buf);
}

/// Like [`sort_into`], but ordered by the key `f` extracts. Stable.
#[inline]
pub fn sort_into_by_key<T, K, I, E, F>(input: I, output: &mut E, f: F)
where
    I: IntoIterator<Item = T>,
    E: Extend<T>,
    F: FnMut(&T) -> K,
    K: Ord,
{
    let mut buf = input.into_iter().collect::<Vec<T>>();
    crate::sort_by_key(&mut buf, f);
    output.extend(buf);
}
