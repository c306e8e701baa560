#![no_main]

use libfuzzer_sys::fuzz_target;
use securebase_keccak::Keccak;

fuzz_target!(|data: &[u8]| {
    let session = Keccak::new();
    for bits in [224, 256, 384, 512] {
        let first = session.hash(data, bits).expect("hash");
        assert_eq!(first.len(), bits / 8, "Digest length mismatch");
        assert_eq!(
            first,
            securebase_keccak::hash(data, bits).expect("hash"),
            "Session reuse mismatch"
        );
    }
    session.dispose();
    assert!(session.hash(data, 256).is_err(), "Disposed session accepted a call");
});
