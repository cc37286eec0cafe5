/// Sorts `v` assuming `v[..offset]` is already sorted, using binary insertion.
///
/// Every element of `v[offset..]` is placed behind all elements of the sorted prefix it doesn't
/// compare less than, so equal elements keep their input order.
///
/// Comparisons are *O*(*k* \* log(*k*)), moves are *O*(*k*^2). Only meant to extend short runs up
/// to the minimum run length.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn binary_insertion_sort<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // An empty prefix is trivially sorted, start with the second element.
    let offset = offset.max(1);

    if len < 2 || offset >= len {
        return;
    }

    for i in offset..len {
        let pos = insertion_point(&v[..=i], is_less);

        // Nothing is moved while comparing, so a panic in `is_less` leaves `v` as it was.
        if pos < i {
            v[pos..=i].rotate_right(1);
        }
    }
}

/// Returns the first index `p` in the sorted `v[..v.len() - 1]` for which the last element of `v`
/// is less than `v[p]`, or `v.len() - 1` if there is none.
#[inline]
fn insertion_point<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let (sorted, tail) = v.split_at(v.len() - 1);
    let elem = &tail[0];

    let mut left = 0;
    let mut right = sorted.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if is_less(elem, &sorted[mid]) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    left
}
