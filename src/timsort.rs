use log::{debug, trace};

use crate::insertion::binary_insertion_sort;
use crate::merge::merge;
use crate::min_run::min_run_len;
use crate::run::find_run;

/// A sorted range `start..end` of the slice being sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimSortRun {
    pub start: usize,
    pub end: usize,
}

impl TimSortRun {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Sorts `v` stably: first splits it into runs of at least `min_run_len(v.len())` elements, then
/// merges adjacent runs pairwise, one pass after the other, until a single run remains.
pub fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let min_run = min_run_len(len);
    let mut runs = partition_into_runs(v, min_run, is_less);

    debug!(
        "timsort: len {len}, min_run {min_run}, {} initial runs",
        runs.len()
    );

    let mut pass = 0;
    while runs.len() > 1 {
        let new_runs = merge_pass(v, &runs, is_less);
        trace!(
            "timsort: merge pass {pass} reduced {} runs to {}",
            runs.len(),
            new_runs.len()
        );

        runs = new_runs;
        pass += 1;
    }

    // Finally, exactly one run must remain and it must span the whole slice.
    debug_assert!(runs.len() == 1 && runs[0] == TimSortRun { start: 0, end: len });
}

/// Splits `v` into consecutive sorted runs, covering all of `v` in order.
///
/// Each run is a natural run, extended with binary insertion sort to `min_run` elements if it is
/// shorter than that. Only the last run can end up shorter than `min_run`.
pub fn partition_into_runs<T, F>(v: &mut [T], min_run: usize, is_less: &mut F) -> Vec<TimSortRun>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut runs = Vec::new();

    let mut start = 0;
    while start < len {
        let run_len = find_run(&mut v[start..], is_less);
        let mut end = start + run_len;

        if run_len < min_run {
            // Always makes progress, even if `min_run` is 0.
            let forced_len = min_run.min(len - start).max(1);
            end = start + forced_len;
            binary_insertion_sort(&mut v[start..end], run_len, is_less);
        }

        runs.push(TimSortRun { start, end });
        start = end;
    }

    runs
}

/// Merges `runs[0]` with `runs[1]`, `runs[2]` with `runs[3]` and so on, and returns the merged
/// runs. If the number of runs is odd, the last one is carried over unmerged.
///
/// Runs must be adjacent and ordered, as returned by [`partition_into_runs`].
pub fn merge_pass<T, F>(v: &mut [T], runs: &[TimSortRun], is_less: &mut F) -> Vec<TimSortRun>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut new_runs = Vec::with_capacity((runs.len() + 1) / 2);

    for pair in runs.chunks(2) {
        match *pair {
            [left, right] => {
                debug_assert_eq!(left.end, right.start);

                merge(&mut v[left.start..right.end], left.len(), is_less);
                new_runs.push(TimSortRun {
                    start: left.start,
                    end: right.end,
                });
            }
            [odd] => new_runs.push(odd),
            _ => unreachable!(),
        }
    }

    new_runs
}
