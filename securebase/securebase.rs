//! Base64-style encoding with a secret-key-derived alphabet.
//!
//! Without a key, [`SecureBase`] behaves like standard padded base64. With a
//! key, the 64 symbols and the padding symbol are a deterministic permutation
//! of a larger charset, derived by hashing the key with the sponge hash from
//! `securebase-keccak`. Encoder and decoder must use the same key.
//!
//! # Example
//!
//! ```
//! use securebase::{SecureBase, TextEncoding};
//!
//! let plain = SecureBase::new(TextEncoding::Narrow);
//! assert_eq!(plain.encode_bytes(b"Man").unwrap(), "TWFu");
//!
//! let keyed = SecureBase::with_secret_key(TextEncoding::Narrow, "secret").unwrap();
//! let encoded = keyed.encode("Hello, World!").unwrap();
//! assert_eq!(keyed.decode(&encoded).unwrap(), "Hello, World!");
//! ```

use tracing::trace;

mod alphabet;
mod engine;
mod error;
mod text;

#[cfg(test)]
#[path = "securebase_tests.rs"]
mod tests;

pub use alphabet::{
    Alphabet, DIGEST_BITS, EXTENDED_CHARSET, KEY_MODULUS, STANDARD_ALPHABET, STANDARD_PADDING,
};
pub use engine::encoded_len;
pub use error::{Error, Result};
pub use text::{from_utf16le, to_utf16le, TextEncoding};

/// A codec bound to one alphabet and one text representation.
#[derive(Debug, Clone, Default)]
pub struct SecureBase {
    alphabet: Alphabet,
    encoding: TextEncoding,
}

impl SecureBase {
    /// A codec using the standard base64 alphabet.
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            alphabet: Alphabet::standard(),
            encoding,
        }
    }

    /// A codec whose alphabet is derived from `secret_key`.
    ///
    /// An empty key gives the same codec as [`SecureBase::new`].
    pub fn with_secret_key(encoding: TextEncoding, secret_key: &str) -> Result<Self> {
        Ok(Self {
            alphabet: Alphabet::from_secret_key(secret_key)?,
            encoding,
        })
    }

    /// Replaces the alphabet with the one derived from `secret_key`.
    ///
    /// On failure the current alphabet is kept.
    pub fn set_secret_key(&mut self, secret_key: &str) -> Result<()> {
        self.alphabet = Alphabet::from_secret_key(secret_key)?;
        Ok(())
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes raw bytes into symbol text.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<String> {
        trace!(input_len = data.len(), "encoding");
        String::from_utf8(engine::encode(data, &self.alphabet)).map_err(|_| Error::InvalidData)
    }

    /// Decodes symbol text into raw bytes.
    pub fn decode_bytes(&self, text: &str) -> Result<Vec<u8>> {
        trace!(input_len = text.len(), "decoding");
        engine::decode(text.as_bytes(), &self.alphabet)
    }

    /// Encodes raw bytes into the wire form of the symbol text: ASCII bytes
    /// in narrow mode, UTF-16LE in wide mode.
    pub fn encode_wire(&self, data: &[u8]) -> Result<Vec<u8>> {
        let symbols = self.encode_bytes(data)?;
        Ok(self.encoding.to_bytes(&symbols))
    }

    /// Decodes symbol text given in wire form.
    pub fn decode_wire(&self, wire: &[u8]) -> Result<Vec<u8>> {
        let symbols = self.encoding.to_text(wire)?;
        self.decode_bytes(&symbols)
    }

    /// Encodes a string.
    ///
    /// In wide mode the string is taken as UTF-16LE code units, otherwise as
    /// UTF-8 bytes.
    pub fn encode(&self, plaintext: &str) -> Result<String> {
        self.encode_bytes(&self.encoding.to_bytes(plaintext))
    }

    /// Decodes a string produced by [`SecureBase::encode`] in the same mode.
    pub fn decode(&self, text: &str) -> Result<String> {
        let bytes = self.decode_bytes(text)?;
        self.encoding.to_text(&bytes)
    }
}
