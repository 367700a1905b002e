//! High-level primitives built on KMACXOF256 and E-521: message digests
//! and tags, passphrase-derived key pairs, symmetric and elliptic
//! authenticated encryption, and Schnorr signatures.
//!
//! The cSHAKE customization strings used here ("D", "T", "S", "SKE",
//! "SKA", "K", "P", "PKE", "PKA", "N") are wire-format ABI: changing any
//! of them breaks compatibility with existing cryptograms, keys, and
//! signatures.

mod elliptic;
mod keypair;
mod signing;
mod symmetric;

pub use elliptic::{elliptic_decrypt, elliptic_encrypt, elliptic_encrypt_with_rng};
pub use keypair::{derive_keypair, derive_keypair_with_rng};
pub use signing::{sign, verify};
pub use symmetric::{symmetric_decrypt, symmetric_encrypt, symmetric_encrypt_with_rng};

use num_bigint::BigInt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::curve::{E521Point, POINT_BYTES};
use crate::error::{KeccryptError, Result};
use crate::hash::kmacxof256;

/// Tag and salt length in bytes (512 bits).
pub const TAG_BYTES: usize = 64;
/// Salt length for symmetric encryption, equal to the tag length.
pub const SALT_BYTES: usize = 64;
/// Offset at which a decoded signature splits into h and z.
const SIGNATURE_SPLIT: usize = 64;

/// Plain cryptographic hash of a message: KMACXOF256 with an empty key
/// under the "D" domain.
pub fn digest(msg: &[u8]) -> Vec<u8> {
    kmacxof256(b"", msg, TAG_BYTES, b"D")
}

/// Authentication tag for a message under a passphrase ("T" domain).
pub fn auth_tag(pw: &[u8], msg: &[u8]) -> Vec<u8> {
    kmacxof256(pw, msg, TAG_BYTES, b"T")
}

/// Derives the encryption/authentication key pair (k_e || k_a) from a
/// shared secret, as one 128-byte KMACXOF256 output to be split in half.
pub(crate) fn derive_key_halves(key: &[u8], custom: &[u8]) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(kmacxof256(key, b"", 2 * TAG_BYTES, custom))
}

/// A passphrase-derived E-521 key pair. The private scalar bytes are
/// zeroed when the pair is dropped.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_bytes: Vec<u8>,
    #[zeroize(skip)]
    public_key: E521Point,
}

impl KeyPair {
    /// The private scalar in signed big-endian form.
    pub fn private_bytes(&self) -> &[u8] {
        &self.private_bytes
    }

    /// The public point s * G.
    pub fn public_key(&self) -> &E521Point {
        &self.public_key
    }
}

/// The output of symmetric authenticated encryption: a 64-byte salt, a
/// ciphertext of the plaintext's length, and a 64-byte tag.
#[derive(Clone, Debug)]
pub struct SymmetricCryptogram {
    salt: [u8; SALT_BYTES],
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
}

impl SymmetricCryptogram {
    /// Assembles a cryptogram from its three components.
    pub fn new(salt: [u8; SALT_BYTES], ciphertext: Vec<u8>, tag: Vec<u8>) -> Self {
        SymmetricCryptogram {
            salt,
            ciphertext,
            tag,
        }
    }

    /// Rebuilds a cryptogram from the auxiliary encoding (`salt || tag`)
    /// and the separately carried ciphertext.
    ///
    /// # Errors
    /// Returns [`KeccryptError::BadLength`] when the auxiliary bytes
    /// cannot hold a salt and a full tag.
    pub fn from_parts(aux: &[u8], ciphertext: Vec<u8>) -> Result<Self> {
        if aux.len() < SALT_BYTES + TAG_BYTES {
            return Err(KeccryptError::BadLength {
                expected: SALT_BYTES + TAG_BYTES,
                actual: aux.len(),
            });
        }
        let mut salt = [0u8; SALT_BYTES];
        salt.copy_from_slice(&aux[..SALT_BYTES]);
        Ok(SymmetricCryptogram {
            salt,
            ciphertext,
            tag: aux[SALT_BYTES..].to_vec(),
        })
    }

    /// The auxiliary encoding `salt || tag`, carried alongside the
    /// ciphertext.
    pub fn aux_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_BYTES + self.tag.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.tag);
        out
    }

    pub fn salt(&self) -> &[u8; SALT_BYTES] {
        &self.salt
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn tag(&self) -> &[u8] {
        &self.tag
    }
}

/// The output of elliptic authenticated encryption: the ephemeral public
/// point Z = k * G, the ciphertext, and a 64-byte tag.
#[derive(Clone, Debug)]
pub struct EllipticCryptogram {
    ephemeral: E521Point,
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
}

impl EllipticCryptogram {
    /// Assembles a cryptogram from its three components.
    pub fn new(ephemeral: E521Point, ciphertext: Vec<u8>, tag: Vec<u8>) -> Self {
        EllipticCryptogram {
            ephemeral,
            ciphertext,
            tag,
        }
    }

    /// Rebuilds a cryptogram from the auxiliary encoding
    /// (`point || tag`) and the separately carried ciphertext.
    ///
    /// # Errors
    /// Returns [`KeccryptError::BadLength`] when the auxiliary bytes
    /// cannot hold a point and a full tag, or [`KeccryptError::NotOnCurve`]
    /// when the leading bytes decode to an invalid point.
    pub fn from_parts(aux: &[u8], ciphertext: Vec<u8>) -> Result<Self> {
        if aux.len() < POINT_BYTES + TAG_BYTES {
            return Err(KeccryptError::BadLength {
                expected: POINT_BYTES + TAG_BYTES,
                actual: aux.len(),
            });
        }
        let ephemeral = E521Point::from_bytes(&aux[..POINT_BYTES])?;
        Ok(EllipticCryptogram {
            ephemeral,
            ciphertext,
            tag: aux[POINT_BYTES..].to_vec(),
        })
    }

    /// The auxiliary encoding `point || tag`, carried alongside the
    /// ciphertext.
    pub fn aux_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(POINT_BYTES + self.tag.len());
        out.extend_from_slice(&self.ephemeral.to_bytes());
        out.extend_from_slice(&self.tag);
        out
    }

    pub fn ephemeral(&self) -> &E521Point {
        &self.ephemeral
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn tag(&self) -> &[u8] {
        &self.tag
    }
}

/// A Schnorr signature: the challenge h and the response z (mod r).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    h: BigInt,
    z: BigInt,
}

impl Signature {
    pub fn new(h: BigInt, z: BigInt) -> Self {
        Signature { h, z }
    }

    pub fn h(&self) -> &BigInt {
        &self.h
    }

    pub fn z(&self) -> &BigInt {
        &self.z
    }

    /// Serializes as `h || z`, both in minimal signed big-endian form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.h.to_signed_bytes_be();
        out.extend_from_slice(&self.z.to_signed_bytes_be());
        out
    }

    /// Parses a serialized signature: bytes [0, 64) are the signed
    /// big-endian challenge, the remainder the response.
    ///
    /// # Errors
    /// Returns [`KeccryptError::BadLength`] when there is nothing after
    /// the challenge field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() <= SIGNATURE_SPLIT {
            return Err(KeccryptError::BadLength {
                expected: SIGNATURE_SPLIT + 1,
                actual: bytes.len(),
            });
        }
        Ok(Signature {
            h: BigInt::from_signed_bytes_be(&bytes[..SIGNATURE_SPLIT]),
            z: BigInt::from_signed_bytes_be(&bytes[SIGNATURE_SPLIT..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_and_tagged() {
        let a = digest(b"message");
        assert_eq!(a.len(), TAG_BYTES);
        assert_eq!(a, digest(b"message"));
        assert_ne!(a, auth_tag(b"", b"message"));
    }

    #[test]
    fn symmetric_aux_round_trips() {
        let gram = SymmetricCryptogram::new([7u8; SALT_BYTES], vec![1, 2, 3], vec![9u8; TAG_BYTES]);
        let aux = gram.aux_bytes();
        assert_eq!(aux.len(), SALT_BYTES + TAG_BYTES);

        let back = SymmetricCryptogram::from_parts(&aux, vec![1, 2, 3]).unwrap();
        assert_eq!(back.salt(), gram.salt());
        assert_eq!(back.tag(), gram.tag());
    }

    #[test]
    fn symmetric_aux_rejects_short_input() {
        let err = SymmetricCryptogram::from_parts(&[0u8; 100], Vec::new()).unwrap_err();
        assert_eq!(
            err,
            KeccryptError::BadLength {
                expected: SALT_BYTES + TAG_BYTES,
                actual: 100
            }
        );
    }

    #[test]
    fn signature_codec_rejects_truncation() {
        assert_eq!(
            Signature::from_bytes(&[0u8; SIGNATURE_SPLIT]),
            Err(KeccryptError::BadLength {
                expected: SIGNATURE_SPLIT + 1,
                actual: SIGNATURE_SPLIT
            })
        );
    }
}
