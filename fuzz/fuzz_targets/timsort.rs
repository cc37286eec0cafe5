#![no_main]

use libfuzzer_sys::fuzz_target;

// Keys are the high nibble of each byte, so there are plenty of equal keys, and the input position
// is kept around to tell them apart.
fuzz_target!(|data: &[u8]| {
    let mut v = data.iter().copied().enumerate().collect::<Vec<_>>();
    let mut expected = v.clone();

    stable_timsort::sort_by_key(&mut v, |&(_, byte)| byte >> 4);
    expected.sort_by_key(|&(_, byte)| byte >> 4);

    assert_eq!(v, expected);
});
