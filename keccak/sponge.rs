//! Sponge construction over the 1600-bit permutation.
//!
//! The rate/capacity split is derived from the requested output length:
//! `capacity = 2 * output_bits / 8` and `rate = 200 - capacity` (both in
//! bytes).

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::permutation::{keccak_f, LANES};

/// State size in bytes (1600 bits)
pub const STATE_BYTES: usize = 200;

/// Domain separation suffix written into the first padding byte.
pub const DOMAIN_SUFFIX: u8 = 0x06;

/// Bit OR-ed into the final byte of the padded message.
pub const CLOSE_BIT: u8 = 0x80;

/// Rate and capacity of a sponge instance, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpongeParams {
    rate: usize,
    capacity: usize,
    output_len: usize,
}

impl SpongeParams {
    /// Derives the parameters for a digest of `output_bits` bits.
    ///
    /// Fails with [`Error::InvalidOutputLength`] when `output_bits` is zero,
    /// not a multiple of 8, or large enough to leave no positive rate.
    ///
    /// # Example
    ///
    /// ```
    /// use securebase_keccak::SpongeParams;
    ///
    /// let params = SpongeParams::for_output_bits(256).unwrap();
    /// assert_eq!(params.rate(), 136);
    /// assert_eq!(params.capacity(), 64);
    /// assert_eq!(params.output_len(), 32);
    /// ```
    pub fn for_output_bits(output_bits: usize) -> Result<Self> {
        if output_bits == 0 || output_bits % 8 != 0 {
            return Err(Error::InvalidOutputLength(output_bits));
        }
        let output_len = output_bits / 8;
        let capacity = output_len
            .checked_mul(2)
            .filter(|&c| c < STATE_BYTES)
            .ok_or(Error::InvalidOutputLength(output_bits))?;

        Ok(Self {
            rate: STATE_BYTES - capacity,
            capacity,
            output_len,
        })
    }

    /// Bytes absorbed per permutation call.
    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

/// Pads `message` to a multiple of `rate` bytes.
///
/// At least one padding byte is always appended, so a message that already
/// fills whole blocks gains a full block of padding. The first padding byte
/// carries [`DOMAIN_SUFFIX`] and the last byte of the buffer has [`CLOSE_BIT`]
/// set; with a single padding byte both land on the same byte.
///
/// The returned buffer holds a copy of the message and is wiped on drop.
pub fn pad(message: &[u8], rate: usize) -> Zeroizing<Vec<u8>> {
    debug_assert!(rate > 0, "rate must be positive");
    let pad_len = rate - (message.len() % rate);

    let mut padded = Zeroizing::new(Vec::with_capacity(message.len() + pad_len));
    padded.extend_from_slice(message);
    padded.resize(message.len() + pad_len, 0);

    padded[message.len()] = DOMAIN_SUFFIX;
    let last = padded.len() - 1;
    padded[last] |= CLOSE_BIT;
    padded
}

/// Absorbs an already padded message, one `rate`-sized block at a time.
///
/// Each block contributes its `rate / 8` little-endian words to the leading
/// lanes; trailing bytes of a block that do not fill a whole word are not
/// absorbed.
pub fn absorb(state: &mut [u64; LANES], padded: &[u8], rate: usize) {
    debug_assert!(rate > 0 && rate <= STATE_BYTES, "rate out of range");
    debug_assert!(padded.len() % rate == 0, "message is not padded to the rate");

    for block in padded.chunks(rate) {
        for (lane, word) in state.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(word);
            *lane ^= u64::from_le_bytes(bytes);
        }
        keccak_f(state);
    }
}

/// Fills `output` from the state, permuting between emissions.
///
/// Every emission reads up to [`STATE_BYTES`] bytes starting at lane 0, in
/// little-endian lane order, truncating the last lane when needed.
pub fn squeeze(state: &mut [u64; LANES], output: &mut [u8]) {
    let mut offset = 0;
    while offset < output.len() {
        let to_copy = (output.len() - offset).min(STATE_BYTES);
        let chunk = &mut output[offset..offset + to_copy];
        for (out, lane) in chunk.chunks_mut(8).zip(state.iter()) {
            let bytes = lane.to_le_bytes();
            out.copy_from_slice(&bytes[..out.len()]);
        }
        offset += to_copy;

        if offset < output.len() {
            keccak_f(state);
        }
    }
}
