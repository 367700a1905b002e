//! Byte-array helpers shared by the scheme layer.

use subtle::ConstantTimeEq;

use crate::error::{KeccryptError, Result};

/// XOR of two equal-length byte strings.
pub(crate) fn xor_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(KeccryptError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Constant-time equality for authenticator verification. Unequal
/// lengths compare unequal without inspecting contents; equal-length
/// comparison never short-circuits.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_requires_equal_lengths() {
        assert_eq!(
            xor_bytes(&[0x0F, 0xF0], &[0xFF, 0x0F]).unwrap(),
            vec![0xF0, 0xFF]
        );
        assert_eq!(
            xor_bytes(&[1, 2, 3], &[1, 2]),
            Err(KeccryptError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn ct_eq_handles_lengths_and_contents() {
        assert!(ct_eq(b"same bytes", b"same bytes"));
        assert!(!ct_eq(b"same bytes", b"same byteZ"));
        assert!(!ct_eq(b"short", b"longer input"));
        assert!(ct_eq(b"", b""));
    }
}
