#![no_main]

use arbitrary::Arbitrary;
use base64_external::{engine::general_purpose::STANDARD, Engine};
use libfuzzer_sys::fuzz_target;
use securebase::{SecureBase, TextEncoding};

#[derive(Arbitrary, Debug)]
struct Input {
    key: String,
    wide: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mode = if input.wide {
        TextEncoding::Wide
    } else {
        TextEncoding::Narrow
    };
    let codec = SecureBase::with_secret_key(mode, &input.key).expect("alphabet derivation");

    // Byte roundtrip
    let encoded = codec.encode_bytes(&input.data).expect("encode");
    assert_eq!(encoded.len() % 4, 0, "Encoded length is not a multiple of 4");
    let decoded = codec.decode_bytes(&encoded).expect("decode");
    assert_eq!(input.data, decoded, "Roundtrip failed");

    // Wire roundtrip
    let wire = codec.encode_wire(&input.data).expect("encode wire");
    assert_eq!(codec.decode_wire(&wire).expect("decode wire"), input.data);

    // Conformance with external crate for the standard alphabet
    if input.key.is_empty() {
        assert_eq!(encoded, STANDARD.encode(&input.data), "External crate encode mismatch");
    }
});
