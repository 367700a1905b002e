//! Passphrase-derived E-521 key pairs.

use log::debug;
use num_bigint::{BigInt, Sign};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::curve::GENERATOR;
use crate::hash::kmacxof256;
use crate::schemes::{KeyPair, SALT_BYTES, TAG_BYTES};

/// Derives a key pair from a passphrase: s = 4 * KMACXOF256(pw, "", 64,
/// "K") as an integer, private key the signed big-endian bytes of s,
/// public key s * G.
///
/// An empty passphrase is replaced by 64 bytes from the given RNG, which
/// must be cryptographically secure.
pub fn derive_keypair_with_rng(pw: &[u8], rng: &mut dyn RngCore) -> KeyPair {
    debug!("deriving key pair from a {}-byte passphrase", pw.len());

    let generated;
    let pw = if pw.is_empty() {
        let mut buf = vec![0u8; SALT_BYTES];
        rng.fill_bytes(&mut buf);
        generated = Zeroizing::new(buf);
        &generated[..]
    } else {
        pw
    };

    let s_raw = Zeroizing::new(kmacxof256(pw, b"", TAG_BYTES, b"K"));
    let s = BigInt::from_bytes_be(Sign::Plus, &s_raw) * 4u32;

    let private_bytes = s.to_signed_bytes_be();
    let public_key = GENERATOR.scalar_mul(&s);
    KeyPair {
        private_bytes,
        public_key,
    }
}

/// Derives a key pair from a passphrase, using the thread RNG if the
/// passphrase is empty.
pub fn derive_keypair(pw: &[u8]) -> KeyPair {
    let mut rng = rand::rng();
    derive_keypair_with_rng(pw, &mut rng)
}
