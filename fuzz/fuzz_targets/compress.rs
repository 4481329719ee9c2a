#![no_main]
use libfuzzer_sys::fuzz_target;
use rangecoder::compress;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        assert!(compress(data).is_err());
        return;
    }

    let first = compress(data).unwrap();
    assert!(first.len() >= 4);
    assert!(first.len() <= 3 * data.len() + 4);

    let second = compress(data).unwrap();
    assert_eq!(first, second);
});
