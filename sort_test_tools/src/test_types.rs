use std::cmp::Ordering;
use std::hint::black_box;

/// Very large stack value, moving it around is expensive.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    values: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0i64; 128];
        let mut val_i64 = val as i64;

        for elem in &mut values {
            *elem = val_i64;
            val_i64 = black_box(val_i64 + 1);
        }
        Self { values }
    }

    fn as_i64(&self) -> i64 {
        self.values[11] + self.values[55] + self.values[77]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_i64().cmp(&other.as_i64())
    }
}

/// A value that remembers its position in the input. Compares on `key` only, so sorting a slice
/// of them and checking that `idx` is ascending for equal keys verifies stability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub idx: usize,
}

impl Tagged {
    pub fn from_keys(keys: &[i32]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(idx, &key)| Self { key, idx })
            .collect()
    }

    /// `true` if `v` is ordered by key, and by input position within equal keys.
    pub fn is_stably_sorted(v: &[Self]) -> bool {
        v.windows(2)
            .all(|w| (w[0].key, w[0].idx) < (w[1].key, w[1].idx))
    }
}
