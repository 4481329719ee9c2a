use rangecoder::compress;

fn main() {
    // Mildly skewed input: mostly one byte with periodic interruptions,
    // enough to exercise both the fast path and renormalization.
    let mut data = vec![0xAAu8; 1 << 20];
    for (i, byte) in data.iter_mut().enumerate() {
        if i % 7 == 0 {
            *byte = (i % 251) as u8;
        }
    }

    for _ in 0..100 {
        let out = compress(&data).unwrap();
        assert!(out.len() >= 4);
    }
}
