//! Narrow and wide (UTF-16LE) text representations.

use crate::error::{Error, Result};

/// How text crosses the codec boundary.
///
/// The mode is fixed when a codec is built. It only changes representation:
/// the symbol sequence of an encoding is the same in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Text is carried as 8-bit bytes (UTF-8 for plaintext).
    #[default]
    Narrow,
    /// Text is carried as UTF-16 little-endian code units.
    Wide,
}

impl TextEncoding {
    /// Bytes representing `text` in this mode.
    pub fn to_bytes(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Narrow => text.as_bytes().to_vec(),
            TextEncoding::Wide => to_utf16le(text),
        }
    }

    /// Reads back text represented in this mode.
    pub fn to_text(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Narrow => String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidData),
            TextEncoding::Wide => from_utf16le(bytes),
        }
    }
}

/// Encodes `text` as UTF-16 little-endian bytes.
pub fn to_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decodes UTF-16 little-endian bytes.
///
/// Fails on an odd byte count or unpaired surrogates.
pub fn from_utf16le(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidData);
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| Error::InvalidData)
}
