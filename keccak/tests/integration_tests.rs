//! Integration tests for the sponge hash and hashing sessions

use hex_literal::hex;
use rand::{Rng, SeedableRng};
use securebase_keccak::{hash, Error, Keccak};
use std::sync::Arc;
use std::thread;

// ===== Known-answer vectors =====

#[test]
fn test_empty_256() {
    let session = Keccak::new();
    assert_eq!(
        session.hash(b"", 256).unwrap(),
        hex!("d5d2afc974aa2ff950b3e4fb3de2d6f3dde50a7ff94c1853e0d6d67086d61c57")
    );
}

#[test]
fn test_empty_512() {
    let session = Keccak::new();
    assert_eq!(
        session.hash(b"", 512).unwrap(),
        hex!(
            "a457cc8e2b98ef845a9230232a60b1486ff0efa536cc56ba0629373d158c7930"
            "c4092d19d13abd33c67c2e1c3dab6aa612192970aca5f692ef74aabc05330282"
        )
    );
}

#[test]
fn test_abc_common_sizes() {
    let session = Keccak::new();
    assert_eq!(
        session.hash(b"abc", 224).unwrap(),
        hex!("ebf440424902b986a4572840d0470dc2b1d5dc08daa7944e79d8afe3")
    );
    assert_eq!(
        session.hash(b"abc", 256).unwrap(),
        hex!("43cbcab1db69e556056ff8175ed0b8d6ce0683464b0b0bf9c054beae207ccd66")
    );
    assert_eq!(
        session.hash(b"abc", 384).unwrap(),
        hex!(
            "5750e3a09f20ba8553adccb310d6d049259c00986bdeeb85"
            "bde3c74f86d3461e27ec419aff43de94c900fd2db22bfcce"
        )
    );
}

#[test]
fn test_quick_brown_fox_512() {
    let digest = hash(b"The quick brown fox jumps over the lazy dog", 512).unwrap();
    assert_eq!(
        digest,
        hex!(
            "890976c14615586bcc1892ebbe2d9e80878f5ffb062d7fac05f4cb7600bc2f89"
            "93bb2055bb5d932af64dc3939acf0727a1f60d7c571932d6d35a4bc8922a775c"
        )
    );
}

#[test]
fn test_all_byte_values_256() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(
        hash(&data, 256).unwrap(),
        hex!("97b93645c5009f83cd1631494f1f1533854a4b2a8c767c1556f23bb7dc602224")
    );
}

#[test]
fn test_single_padding_byte() {
    // 135 bytes at rate 136: suffix and close bit share one byte
    let data = vec![b'a'; 135];
    assert_eq!(
        hash(&data, 256).unwrap(),
        hex!("3787e903578453019285d5c09c1d70a37ee1eadeb7faedbfeaeb122d962b6813")
    );
}

#[test]
fn test_full_padding_block() {
    let data = vec![b'a'; 136];
    assert_eq!(
        hash(&data, 256).unwrap(),
        hex!("d76b6faed906ffea13267b6d1e3a4a1b43f86bd3d79f75d65416cd23e6016233")
    );
}

#[test]
fn test_unaligned_rate() {
    // 200-bit digests use a 150-byte rate
    assert_eq!(
        hash(b"abc", 200).unwrap(),
        hex!("01c3d539b9fd979a6295464556dc59eaf3c5246f85aca40467")
    );
}

#[test]
fn test_smallest_digest() {
    assert_eq!(hash(b"", 8).unwrap(), vec![0x41u8]);
}

#[test]
fn test_not_sha3() {
    // SHA3-256 of the empty string
    let sha3_empty = hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
    assert_ne!(hash(b"", 256).unwrap(), sha3_empty);
}

// ===== Determinism and sensitivity =====

#[test]
fn test_deterministic_random_inputs() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EC0_BA5E);
    let session = Keccak::new();

    for _ in 0..50 {
        let len = rng.gen_range(0..600);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        for bits in [224, 256, 384, 512] {
            let first = session.hash(&data, bits).unwrap();
            let second = hash(&data, bits).unwrap();
            assert_eq!(first, second, "len {} bits {}", len, bits);
            assert_eq!(first.len(), bits / 8);
        }
    }
}

#[test]
fn test_single_bit_change() {
    let mut data = vec![0u8; 64];
    let original = hash(&data, 256).unwrap();
    data[17] ^= 0x01;
    assert_ne!(original, hash(&data, 256).unwrap());
}

#[test]
fn test_output_size_changes_digest() {
    let short = hash(b"abc", 256).unwrap();
    let long = hash(b"abc", 512).unwrap();
    assert_ne!(&short[..], &long[..32]);
}

// ===== Session lifecycle =====

#[test]
fn test_hash_after_dispose() {
    let session = Keccak::new();
    session.hash(b"data", 256).unwrap();
    session.dispose();
    assert_eq!(session.hash(b"data", 256), Err(Error::ObjectDisposed));
    assert_eq!(session.hash(b"data", 512), Err(Error::ObjectDisposed));
}

#[test]
fn test_dispose_is_idempotent() {
    let session = Keccak::new();
    session.dispose();
    session.dispose();
    assert!(session.is_disposed());
}

#[test]
fn test_invalid_output_lengths() {
    let session = Keccak::new();
    for bits in [0, 1, 7, 100, 800, 1024] {
        assert_eq!(
            session.hash(b"abc", bits),
            Err(Error::InvalidOutputLength(bits)),
            "bits {}",
            bits
        );
    }
}

#[test]
fn test_concurrent_hashing() {
    let session = Arc::new(Keccak::new());
    let expected = hash(b"shared session", 512).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                (0..50)
                    .map(|_| session.hash(b"shared session", 512).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for digest in handle.join().unwrap() {
            assert_eq!(digest, expected);
        }
    }
}

#[test]
fn test_concurrent_dispose() {
    let session = Arc::new(Keccak::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                if i == 0 {
                    session.dispose();
                }
                match session.hash(b"racing", 256) {
                    Ok(digest) => assert_eq!(digest.len(), 32),
                    Err(err) => assert_eq!(err, Error::ObjectDisposed),
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(session.is_disposed());
}
