//! Elliptic (ECDHIES-style) authenticated encryption under an E-521
//! public key.
//!
//! Encryption picks an ephemeral scalar k, derives the message keys from
//! the x-coordinate of W = k * P_pub, and ships Z = k * G so the holder
//! of the private scalar can recompute W.

use log::{debug, error};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::curve::{E521Point, GENERATOR, P};
use crate::error::{KeccryptError, Result};
use crate::hash::kmacxof256;
use crate::schemes::{derive_key_halves, EllipticCryptogram, SALT_BYTES, TAG_BYTES};
use crate::util::{ct_eq, xor_bytes};

/// Encrypts `msg` under the recipient's public key with an ephemeral
/// scalar drawn from the given RNG, which must be cryptographically
/// secure.
pub fn elliptic_encrypt_with_rng(
    msg: &[u8],
    public_key: &E521Point,
    rng: &mut dyn RngCore,
) -> Result<EllipticCryptogram> {
    debug!("elliptic encrypt: {} plaintext bytes", msg.len());

    let mut seed = Zeroizing::new([0u8; SALT_BYTES]);
    rng.fill_bytes(&mut seed[..]);
    let k = (BigInt::from_bytes_be(Sign::Plus, &seed[..]) * 4u32).mod_floor(&P);

    let shared = public_key.scalar_mul(&k);
    let ephemeral = GENERATOR.scalar_mul(&k);

    let shared_x = Zeroizing::new(shared.x().to_signed_bytes_be());
    let halves = derive_key_halves(&shared_x, b"P");
    let (ke, ka) = halves.split_at(TAG_BYTES);

    let mask = Zeroizing::new(kmacxof256(ke, b"", msg.len(), b"PKE"));
    let ciphertext = xor_bytes(msg, &mask)?;
    let tag = kmacxof256(ka, msg, TAG_BYTES, b"PKA");

    Ok(EllipticCryptogram::new(ephemeral, ciphertext, tag))
}

/// Encrypts `msg` under the recipient's public key with the thread RNG.
pub fn elliptic_encrypt(msg: &[u8], public_key: &E521Point) -> Result<EllipticCryptogram> {
    let mut rng = rand::rng();
    elliptic_encrypt_with_rng(msg, public_key, &mut rng)
}

/// Decrypts a cryptogram by re-deriving the private scalar from `pw` and
/// recomputing the shared point from the ephemeral Z. The tag is checked
/// in constant time before any plaintext is released.
///
/// # Errors
/// Returns [`KeccryptError::AuthFail`] when the recomputed tag does not
/// match; no plaintext is returned in that case.
pub fn elliptic_decrypt(gram: &EllipticCryptogram, pw: &[u8]) -> Result<Vec<u8>> {
    debug!("elliptic decrypt: {} ciphertext bytes", gram.ciphertext().len());

    let s_raw = Zeroizing::new(kmacxof256(pw, b"", TAG_BYTES, b"K"));
    // The encrypting side reduces its scalar mod p; s stays unreduced
    // here. Both are below 2^514, so the two conventions agree.
    let s = BigInt::from_bytes_be(Sign::Plus, &s_raw) * 4u32;
    let shared = gram.ephemeral().scalar_mul(&s);

    let shared_x = Zeroizing::new(shared.x().to_signed_bytes_be());
    let halves = derive_key_halves(&shared_x, b"P");
    let (ke, ka) = halves.split_at(TAG_BYTES);

    let mask = Zeroizing::new(kmacxof256(ke, b"", gram.ciphertext().len(), b"PKE"));
    let plaintext = Zeroizing::new(xor_bytes(gram.ciphertext(), &mask)?);
    let candidate = kmacxof256(ka, &plaintext, TAG_BYTES, b"PKA");

    if !ct_eq(gram.tag(), &candidate) {
        error!("elliptic decrypt: authentication tag mismatch");
        return Err(KeccryptError::AuthFail);
    }
    Ok(plaintext.to_vec())
}
