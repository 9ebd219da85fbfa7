#![no_main]
use huff::{build_code_table, build_tree, decode, encode, tally};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, noise) = data;
    if input.is_empty() {
        return;
    }

    let table = build_code_table(&build_tree(&tally(input.iter().copied())).unwrap());
    let bits = encode(&input, &table).unwrap();
    assert_eq!(decode(&table, &bits).unwrap(), input);

    // Arbitrary bits must decode or fail cleanly, never panic.
    let mut junk = huff::Bitstring::new();
    junk.extend(noise);
    let _ = decode(&table, &junk);
});
