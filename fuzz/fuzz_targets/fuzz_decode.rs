#![no_main]

use libfuzzer_sys::fuzz_target;
use securebase::{SecureBase, TextEncoding};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must never panic, and anything accepted must re-encode
    let codec = SecureBase::new(TextEncoding::Narrow);
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(decoded) = codec.decode_bytes(text) {
            let reencoded = codec.encode_bytes(&decoded).expect("encode");
            assert_eq!(reencoded.len(), text.len(), "Re-encoded length mismatch");
        }
    }

    let wide = SecureBase::new(TextEncoding::Wide);
    let _ = wide.decode_wire(data);
});
