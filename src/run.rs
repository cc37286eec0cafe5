/// Finds the natural run at the beginning of the slice and makes it ascending.
///
/// Returns the length of the run. A run is either non-descending, `v[i + 1]` is not less than
/// `v[i]`, or strictly descending. Strictly descending runs are reversed in place, which can't
/// break stability since they contain no two equal neighbours.
///
/// Slices shorter than two elements are a run of their own length and are not compared.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn find_run<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return len;
    }

    let mut end = 2;

    if is_less(&v[1], &v[0]) {
        while end < len && is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        v[..end].reverse();
    } else {
        while end < len && !is_less(&v[end], &v[end - 1]) {
            end += 1;
        }
    }

    end
}
