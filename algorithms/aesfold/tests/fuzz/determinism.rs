use aesfold::hash;
use bolero::check;

#[test]
fn fuzz_determinism() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        assert_eq!(hash(data), hash(data), "Hash is not deterministic");

        // A copy at a different address (and alignment) must hash the same
        let mut shifted = vec![0u8; data.len() + 1];
        shifted[1..].copy_from_slice(data);
        assert_eq!(hash(&shifted[1..]), hash(data), "Alignment changed the hash");
    });
}

#[test]
fn fuzz_tail_extension() {
    check!().with_type::<(Vec<u8>, u8)>().for_each(|(data, byte)| {
        // Appending a non-zero byte inside the same block changes the padded tail
        if data.len() % 16 != 0 && *byte != 0 {
            let mut extended = data.clone();
            extended.push(*byte);
            assert_ne!(hash(data), hash(&extended), "Tail byte ignored");
        }
    });
}
