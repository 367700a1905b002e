//! Error types for keccrypt operations.

use thiserror::Error;

/// Errors surfaced by the sponge, curve, and scheme layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeccryptError {
    /// pad10*1 was given an all-zero suffix byte.
    #[error("padding suffix must contain at least one set bit")]
    InvalidSuffix,

    /// Two byte strings that must have equal length did not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The given coordinates do not satisfy the E-521 curve equation.
    #[error("coordinates are not a point on E-521")]
    NotOnCurve,

    /// No square root exists for the given x-coordinate during decompression.
    #[error("x-coordinate has no corresponding y on E-521")]
    NoSuchPoint,

    /// A byte decoder was handed input of the wrong length. For decoders
    /// that accept a trailing variable-length field, `expected` is the
    /// minimum acceptable length.
    #[error("bad encoding length: expected {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },

    /// Decryption tag verification failed. No plaintext is released.
    #[error("authentication failed")]
    AuthFail,
}

/// Type alias for results in keccrypt.
pub type Result<T> = core::result::Result<T, KeccryptError>;
