use std::cmp::Reverse;
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// Currently limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_by_key(|&e| Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(saw_directions) {
        if direction == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| Reverse(e));
        }
    }

    vals
}

pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // ascending and descending randomly picked, with length in `range`.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let max_chunks = len / range.start.max(1);
    let saw_directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut i = 0;
    let mut l = 0;
    while l < len {
        let chunk_len = (chunk_lens[i] as usize).max(1);
        let chunk = &mut vals[l..(l + chunk_len).min(len)];

        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| Reverse(e));
        }

        i += 1;
        l += chunk_len;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| Reverse(e));

    vals
}

/// Makes every subsequent call to a random derived pattern yield new random values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation, which is
/// what tests want. For benchmarks it's advised to call this function.
pub fn disable_fixed_seed() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Using disable_fixed_seed conflicts with the external seed override.");
    }

    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed used for random patterns.
///
/// Picked once per process, unless `OVERRIDE_SEED` is set in the environment, in which case that
/// value is used to reproduce a previous run.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| {
            env::var("OVERRIDE_SEED")
                .ok()
                .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
                .unwrap_or_else(|| thread_rng().gen())
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn new_rng() -> StdRng {
    // Random seed, but printed by the test harness for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
