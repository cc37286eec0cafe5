/// Runs shorter than this are never accepted as they are, the length of the whole input is
/// halved until it drops below it.
pub const MIN_MERGE: usize = 32;

/// Computes the minimum length a run must reach before it is put into the run list.
///
/// The result is chosen so that `len / min_run` is a power of two, or slightly less than one.
/// That keeps the pairwise merge passes balanced. For `len >= MIN_MERGE` the result lies in
/// `MIN_MERGE / 2..=MIN_MERGE`, shorter inputs return `len` itself and are sorted as one run.
#[inline]
pub const fn min_run_len(mut len: usize) -> usize {
    // Becomes 1 if any 1 bit is shifted off.
    let mut r = 0;
    while len >= MIN_MERGE {
        r |= len & 1;
        len >>= 1;
    }

    len + r
}
