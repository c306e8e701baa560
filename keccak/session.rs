//! Reusable, disposable hashing session.

use parking_lot::Mutex;
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::permutation::LANES;
use crate::sponge::{self, SpongeParams};

struct Inner {
    state: [u64; LANES],
    disposed: bool,
}

/// A hashing session owning one permutation state.
///
/// Calls are serialized through an internal lock, so a session can be shared
/// between threads; concurrent calls run one after another. Every call starts
/// from an all-zero state.
///
/// # Example
///
/// ```
/// use securebase_keccak::{Error, Keccak};
///
/// let session = Keccak::new();
/// let digest = session.hash(b"abc", 256).unwrap();
/// assert_eq!(digest.len(), 32);
///
/// session.dispose();
/// assert_eq!(session.hash(b"abc", 256), Err(Error::ObjectDisposed));
/// ```
pub struct Keccak {
    inner: Mutex<Inner>,
}

impl Keccak {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: [0u64; LANES],
                disposed: false,
            }),
        }
    }

    /// Hashes `input` into a digest of `output_bits` bits.
    ///
    /// `output_bits` selects the rate/capacity split; any positive multiple
    /// of 8 below 800 is accepted.
    pub fn hash(&self, input: &[u8], output_bits: usize) -> Result<Vec<u8>> {
        let mut inner = self.inner.lock();
        if inner.disposed {
            return Err(Error::ObjectDisposed);
        }

        let params = SpongeParams::for_output_bits(output_bits)?;
        trace!(
            input_len = input.len(),
            output_bits,
            rate = params.rate(),
            "hashing"
        );

        inner.state = [0u64; LANES];
        let padded = sponge::pad(input, params.rate());
        sponge::absorb(&mut inner.state, &padded, params.rate());

        let mut output = vec![0u8; params.output_len()];
        sponge::squeeze(&mut inner.state, &mut output);
        Ok(output)
    }

    /// Wipes the state and makes the session permanently unusable.
    ///
    /// Calling this more than once is a no-op.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock();
        if inner.disposed {
            return;
        }
        inner.state.zeroize();
        inner.disposed = true;
        debug!("hash session disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }
}

impl Default for Keccak {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Keccak {
    fn drop(&mut self) {
        self.inner.get_mut().state.zeroize();
    }
}

/// Hashes `input` with a temporary session that is disposed afterwards.
///
/// # Example
///
/// ```
/// let digest = securebase_keccak::hash(b"", 512).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash(input: &[u8], output_bits: usize) -> Result<Vec<u8>> {
    let session = Keccak::new();
    let digest = session.hash(input, output_bits);
    session.dispose();
    digest
}
