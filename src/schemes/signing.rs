//! Schnorr signatures over E-521.
//!
//! The nonce is derived deterministically from the private scalar and
//! the message, so signing needs no randomness and never reuses a nonce
//! across distinct messages.

use log::debug;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use zeroize::Zeroizing;

use crate::curve::{E521Point, GENERATOR, R};
use crate::hash::kmacxof256;
use crate::schemes::{Signature, TAG_BYTES};

/// Signs a message with the key pair derived from `pw`.
pub fn sign(msg: &[u8], pw: &[u8]) -> Signature {
    debug!("signing {} message bytes", msg.len());

    let s_raw = Zeroizing::new(kmacxof256(pw, b"", TAG_BYTES, b"K"));
    let s = BigInt::from_bytes_be(Sign::Plus, &s_raw) * 4u32;
    let s_bytes = Zeroizing::new(s.to_signed_bytes_be());

    let k_raw = Zeroizing::new(kmacxof256(&s_bytes, msg, TAG_BYTES, b"N"));
    let k = BigInt::from_bytes_be(Sign::Plus, &k_raw) * 4u32;

    let u = GENERATOR.scalar_mul(&k);
    let u_x = u.x().to_signed_bytes_be();
    let h = BigInt::from_bytes_be(Sign::Plus, &kmacxof256(&u_x, msg, TAG_BYTES, b"T"));

    let z = (&k - &h * &s).mod_floor(&R);
    Signature::new(h, z)
}

/// Verifies a signature against a message and the signer's public key:
/// recomputes U = z * G + h * P_pub and accepts iff the recomputed
/// challenge equals the transmitted one.
pub fn verify(sig: &Signature, msg: &[u8], public_key: &E521Point) -> bool {
    let u = GENERATOR
        .scalar_mul(sig.z())
        .add(&public_key.scalar_mul(sig.h()));

    let u_x = u.x().to_signed_bytes_be();
    let candidate = BigInt::from_bytes_be(Sign::Plus, &kmacxof256(&u_x, msg, TAG_BYTES, b"T"));
    candidate == *sig.h()
}
