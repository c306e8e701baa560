//! The 3-byte to 4-symbol transform over an [`Alphabet`].

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Calculates the encoded length for a given input length.
///
/// Output is always padded, so the result is a multiple of 4.
///
/// # Example
///
/// ```
/// use securebase::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes `data` into alphabet symbols, padding the final group.
pub(crate) fn encode(data: &[u8], alphabet: &Alphabet) -> Vec<u8> {
    let mut output = Vec::with_capacity(encoded_len(data.len()));

    let mut chunks = data.chunks_exact(3);
    for group in &mut chunks {
        let chunk = (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2]);
        output.extend_from_slice(&[
            alphabet.symbol(chunk >> 18),
            alphabet.symbol(chunk >> 12),
            alphabet.symbol(chunk >> 6),
            alphabet.symbol(chunk),
        ]);
    }

    // Handle remaining bytes
    match *chunks.remainder() {
        [b0] => {
            let b0 = u32::from(b0);
            output.extend_from_slice(&[
                alphabet.symbol(b0 >> 2),
                alphabet.symbol((b0 & 0x03) << 4),
                alphabet.padding(),
                alphabet.padding(),
            ]);
        }
        [b0, b1] => {
            let (b0, b1) = (u32::from(b0), u32::from(b1));
            output.extend_from_slice(&[
                alphabet.symbol(b0 >> 2),
                alphabet.symbol(((b0 & 0x03) << 4) | (b1 >> 4)),
                alphabet.symbol((b1 & 0x0F) << 2),
                alphabet.padding(),
            ]);
        }
        _ => {}
    }

    output
}

fn reject(reason: &'static str) -> Error {
    debug!(reason, "rejecting encoded input");
    Error::InvalidData
}

/// Decodes alphabet symbols back into bytes.
///
/// The input must be a whole number of 4-symbol groups with at most two
/// trailing padding symbols.
pub(crate) fn decode(input: &[u8], alphabet: &Alphabet) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() % 4 != 0 {
        return Err(reject("length is not a multiple of 4"));
    }

    let padding_len = input
        .iter()
        .rev()
        .take_while(|&&c| c == alphabet.padding())
        .count();
    if padding_len > 2 {
        return Err(reject("too many padding symbols"));
    }

    let output_len = input.len() / 4 * 3 - padding_len;
    let symbols_end = input.len() - padding_len;
    let mut result = Vec::with_capacity(output_len);

    for (group_idx, group) in input.chunks_exact(4).enumerate() {
        let mut chunk = 0u32;
        for (j, &c) in group.iter().enumerate() {
            let value = if group_idx * 4 + j >= symbols_end {
                0
            } else {
                alphabet
                    .value_of(c)
                    .ok_or_else(|| reject("symbol outside the alphabet"))?
            };
            chunk = (chunk << 6) | u32::from(value);
        }

        let bytes = [(chunk >> 16) as u8, (chunk >> 8) as u8, chunk as u8];
        let take = (output_len - result.len()).min(3);
        result.extend_from_slice(&bytes[..take]);
    }

    Ok(result)
}
