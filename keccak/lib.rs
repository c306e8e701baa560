//! Keccak-family sponge hash with arbitrary output length.
//!
//! This crate implements:
//! - a 24-round permutation over a 1600-bit state of 25 lanes
//! - the sponge construction (padding with the `0x06` domain suffix, absorb,
//!   squeeze) with a rate derived from the requested digest size
//! - [`Keccak`], a reusable hashing session with secure disposal
//!
//! The permutation rotates every lane in place rather than relocating lanes,
//! so digests differ from the published SHA-3 vectors.
//!
//! # Example
//!
//! ```
//! use securebase_keccak::Keccak;
//!
//! let session = Keccak::new();
//! let digest = session.hash(b"", 256).unwrap();
//! assert_eq!(&digest[..4], &[0xd5u8, 0xd2, 0xaf, 0xc9]);
//! ```

mod error;
pub mod permutation;
mod session;
pub mod sponge;

pub use error::{Error, Result};
pub use permutation::keccak_f;
pub use session::{hash, Keccak};
pub use sponge::SpongeParams;
