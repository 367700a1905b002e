//! Symmetric authenticated encryption under a passphrase.
//!
//! A fresh 64-byte salt is mixed with the passphrase through KMACXOF256
//! to derive an encryption key (XOR keystream) and an authentication key
//! (tag over the plaintext).

use log::{debug, error};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{KeccryptError, Result};
use crate::hash::kmacxof256;
use crate::schemes::{derive_key_halves, SymmetricCryptogram, SALT_BYTES, TAG_BYTES};
use crate::util::{ct_eq, xor_bytes};

/// Encrypts `msg` under `pw` with salt drawn from the given RNG, which
/// must be cryptographically secure.
pub fn symmetric_encrypt_with_rng(
    msg: &[u8],
    pw: &[u8],
    rng: &mut dyn RngCore,
) -> Result<SymmetricCryptogram> {
    debug!("symmetric encrypt: {} plaintext bytes", msg.len());

    let mut salt = [0u8; SALT_BYTES];
    rng.fill_bytes(&mut salt);

    let mut salted = Zeroizing::new(Vec::with_capacity(SALT_BYTES + pw.len()));
    salted.extend_from_slice(&salt);
    salted.extend_from_slice(pw);

    let halves = derive_key_halves(&salted, b"S");
    let (ke, ka) = halves.split_at(TAG_BYTES);

    let mask = Zeroizing::new(kmacxof256(ke, b"", msg.len(), b"SKE"));
    let ciphertext = xor_bytes(msg, &mask)?;
    let tag = kmacxof256(ka, msg, TAG_BYTES, b"SKA");

    Ok(SymmetricCryptogram::new(salt, ciphertext, tag))
}

/// Encrypts `msg` under `pw` with a salt from the thread RNG.
pub fn symmetric_encrypt(msg: &[u8], pw: &[u8]) -> Result<SymmetricCryptogram> {
    let mut rng = rand::rng();
    symmetric_encrypt_with_rng(msg, pw, &mut rng)
}

/// Decrypts a cryptogram under `pw`, verifying the tag in constant time
/// before any plaintext is released.
///
/// # Errors
/// Returns [`KeccryptError::AuthFail`] when the recomputed tag does not
/// match; no plaintext is returned in that case.
pub fn symmetric_decrypt(gram: &SymmetricCryptogram, pw: &[u8]) -> Result<Vec<u8>> {
    debug!("symmetric decrypt: {} ciphertext bytes", gram.ciphertext().len());

    let mut salted = Zeroizing::new(Vec::with_capacity(SALT_BYTES + pw.len()));
    salted.extend_from_slice(gram.salt());
    salted.extend_from_slice(pw);

    let halves = derive_key_halves(&salted, b"S");
    let (ke, ka) = halves.split_at(TAG_BYTES);

    let mask = Zeroizing::new(kmacxof256(ke, b"", gram.ciphertext().len(), b"SKE"));
    let plaintext = Zeroizing::new(xor_bytes(gram.ciphertext(), &mask)?);
    let candidate = kmacxof256(ka, &plaintext, TAG_BYTES, b"SKA");

    if !ct_eq(gram.tag(), &candidate) {
        error!("symmetric decrypt: authentication tag mismatch");
        return Err(KeccryptError::AuthFail);
    }
    Ok(plaintext.to_vec())
}
