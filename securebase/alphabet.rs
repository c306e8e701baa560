//! Encoding alphabets, including the ones derived from a secret key.
//!
//! A keyed alphabet is built by hashing the key into a 512-bit digest,
//! turning the digest's lowercase hex form into a sequence of integers and
//! using those to permute [`EXTENDED_CHARSET`]. The first 64 symbols of the
//! permuted charset form the alphabet and the 65th is the padding symbol.

use std::fmt;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::Result;

/// Standard base64 alphabet (RFC 4648).
pub const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding symbol of the standard alphabet.
pub const STANDARD_PADDING: u8 = b'=';

/// Charset permuted by a secret key. All symbols are distinct printable ASCII.
pub const EXTENDED_CHARSET: &[u8; 91] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!\"#&'()*,-.:;<>?@[]\\^_{}|~/+=";

/// Digest size used to stretch the secret key.
pub const DIGEST_BITS: usize = 512;

/// Modulus applied to every derived key value (2^31 - 1).
pub const KEY_MODULUS: u64 = 2_147_483_647;

/// Marks bytes that are not part of the alphabet in the decode table.
const INVALID: u8 = 255;

/// Builds a decode lookup table for the given alphabet.
fn build_decode_table(symbols: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    for (i, &c) in symbols.iter().enumerate() {
        table[c as usize] = i as u8;
    }
    table
}

/// A 64-symbol alphabet with its padding symbol.
///
/// Keyed alphabets are secret material and are wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Alphabet {
    symbols: [u8; 64],
    padding: u8,
    decode_table: [u8; 256],
    keyed: bool,
}

impl Alphabet {
    fn from_parts(symbols: [u8; 64], padding: u8, keyed: bool) -> Self {
        Self {
            decode_table: build_decode_table(&symbols),
            symbols,
            padding,
            keyed,
        }
    }

    /// The standard base64 alphabet with `=` padding.
    pub fn standard() -> Self {
        Self::from_parts(*STANDARD_ALPHABET, STANDARD_PADDING, false)
    }

    /// Derives the alphabet for `secret_key`.
    ///
    /// An empty key yields [`Alphabet::standard`]. The same key always
    /// derives the same alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use securebase::Alphabet;
    ///
    /// let alphabet = Alphabet::from_secret_key("secret").unwrap();
    /// assert_eq!(alphabet.padding(), b'b');
    /// assert_eq!(alphabet, Alphabet::from_secret_key("secret").unwrap());
    /// assert_eq!(Alphabet::from_secret_key("").unwrap(), Alphabet::standard());
    /// ```
    pub fn from_secret_key(secret_key: &str) -> Result<Self> {
        if secret_key.is_empty() {
            return Ok(Self::standard());
        }

        let digest = Zeroizing::new(securebase_keccak::hash(secret_key.as_bytes(), DIGEST_BITS)?);
        let digest_hex = Zeroizing::new(hex::encode(&*digest));
        let key_values = derive_key_values(&digest_hex);

        let mut charset = Zeroizing::new(*EXTENDED_CHARSET);
        shuffle(&mut charset[..], &key_values);

        let mut symbols = [0u8; 64];
        symbols.copy_from_slice(&charset[..64]);
        let alphabet = Self::from_parts(symbols, charset[64], true);
        symbols.zeroize();

        debug!("derived keyed alphabet");
        Ok(alphabet)
    }

    /// The 64 symbols, indexed by 6-bit value.
    pub fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// Whether this alphabet was derived from a secret key.
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    #[inline]
    pub(crate) fn symbol(&self, value: u32) -> u8 {
        self.symbols[(value & 0x3F) as usize]
    }

    /// The 6-bit value of `symbol`, if it belongs to the alphabet.
    #[inline]
    pub(crate) fn value_of(&self, symbol: u8) -> Option<u8> {
        match self.decode_table[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keyed {
            return f.debug_struct("Alphabet").field("keyed", &true).finish_non_exhaustive();
        }
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .field("padding", &(self.padding as char))
            .finish()
    }
}

/// Turns the hex digest into one integer per character.
///
/// Entry `i` is the character code of `hex[i]` reduced modulo
/// [`KEY_MODULUS`]; the final entry stays zero.
fn derive_key_values(digest_hex: &str) -> Zeroizing<Vec<u64>> {
    let bytes = digest_hex.as_bytes();
    let mut values = Zeroizing::new(vec![0u64; bytes.len()]);

    for (value, &c) in values.iter_mut().zip(bytes).take(bytes.len().saturating_sub(1)) {
        // The accumulator is not carried across characters.
        let rolling = 0u64;
        *value = (rolling * 31 + u64::from(c)) % KEY_MODULUS;
    }
    values
}

/// Permutes `charset` once per key value, skipping the last value.
///
/// Each pass walks from the end of the charset down to index 1 and swaps
/// position `i` with `(i * key) % charset.len()`.
fn shuffle(charset: &mut [u8], keys: &[u64]) {
    let len = charset.len() as u64;
    for &key in keys.iter().take(keys.len().saturating_sub(1)) {
        for i in (1..charset.len()).rev() {
            let j = ((i as u64 * key) % len) as usize;
            charset.swap(i, j);
        }
    }
}
