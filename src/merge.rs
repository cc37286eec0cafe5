use std::mem;
use std::ptr;

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// The merge is stable, if an element of the right run is not less than an element of the left
/// run, the left one is placed first. Both runs are copied into a temporary buffer of `v.len()`
/// elements that is allocated here and freed before returning.
///
/// If either run is empty, nothing is compared or moved.
///
/// # Panics
///
/// Panics if `mid > v.len()`. If `is_less` panics, `v` still holds every element it initially
/// held exactly once, in unspecified order.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid <= len);

    if mid == 0 || mid == len || mem::size_of::<T>() == 0 {
        return;
    }

    // The length of `buf` stays 0, so that it only ever holds shallow copies of the contents of
    // `v` and never drops them, even if `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr();
    let arr_ptr = v.as_mut_ptr();

    // The merge process first copies both runs into `buf`. Then it traces both copies forwards,
    // comparing their next unconsumed elements and copying the lesser one back into `v`. As soon
    // as one of them is fully consumed, whatever is left of the other one is copied into the
    // remaining hole in `v`.
    //
    // Intermediate state of the process is always tracked by `hole`, which serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Fills the remaining hole in `v` once one of the runs is consumed.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // hole in `v` with the unconsumed ranges in `buf`, thus ensuring that `v` still holds every
    // object it initially held exactly once. Comparisons only ever look at the copies in `buf`,
    // and every copy is written back exactly once after its last comparison, so all effects of
    // `is_less` through interior mutability are observable in `v`.
    //
    // SAFETY: `buf` has capacity for `len` elements and doesn't overlap with `v`. `0 < mid < len`
    // so all pointers below stay in bounds of their allocations.
    let mut hole = unsafe {
        ptr::copy_nonoverlapping(arr_ptr, buf_ptr, len);

        MergeHole {
            left: buf_ptr,
            left_end: buf_ptr.add(mid),
            right: buf_ptr.add(mid),
            right_end: buf_ptr.add(len),
            dest: arr_ptr,
        }
    };

    while hole.left < hole.left_end && hole.right < hole.right_end {
        // Consume the lesser side.
        // If equal, prefer the left run to maintain stability.
        //
        // SAFETY: Both `left` and `right` point to unconsumed, initialized copies in `buf` and
        // `dest` points into the hole in `v`, which is exactly as large as both unconsumed ranges
        // together.
        unsafe {
            let take_right = is_less(&*hole.right, &*hole.left);
            let src = if take_right {
                let src = hole.right;
                hole.right = hole.right.add(1);
                src
            } else {
                let src = hole.left;
                hole.left = hole.left.add(1);
                src
            };

            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }
    }

    // Finally, `hole` gets dropped before `buf`. Whatever remains of either run is copied into
    // the hole in `v`.
    drop(hole);
}

// When dropped, copies the range `left..left_end` and then `right..right_end` into `dest..`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and these are pointers into the elements of `buf`
        // and `v`. The unconsumed ranges together are exactly as long as the hole in `v`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
