//! Multi-rate padding: pad10*1 with a domain-separating suffix byte.

use crate::error::{KeccryptError, Result};

/// Pads `msg` out to a positive multiple of the byte rate.
///
/// The suffix byte is appended first (it carries the domain-separation
/// bits and the leading 1 of pad10*1), then zeros, and the final byte is
/// XORed with 0x80 for the trailing 1 bit. When only one padding byte
/// fits, the suffix and the trailing bit combine in that byte.
///
/// # Errors
/// Returns [`KeccryptError::InvalidSuffix`] if `suffix` is 0x00, which
/// would erase the leading pad bit.
pub fn pad10x1(msg: &[u8], rate_bits: usize, suffix: u8) -> Result<Vec<u8>> {
    if suffix == 0x00 {
        return Err(KeccryptError::InvalidSuffix);
    }
    Ok(apply(msg, rate_bits, suffix))
}

/// The padding itself, for callers that have already validated the suffix.
pub(crate) fn apply(msg: &[u8], rate_bits: usize, suffix: u8) -> Vec<u8> {
    let byte_rate = rate_bits / 8;
    let fill = byte_rate - (msg.len() % byte_rate);

    let mut out = Vec::with_capacity(msg.len() + fill);
    out.extend_from_slice(msg);
    out.push(suffix);
    out.resize(msg.len() + fill, 0x00);
    let last = out.len() - 1;
    out[last] ^= 0x80;
    out
}
