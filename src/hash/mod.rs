//! The FIPS 202 / SP 800-185 hash family: SHA-3, SHAKE, cSHAKE, and
//! KMACXOF, all running on the sponge from [`crate::sponge`].
//!
//! Every function is pure and produces exactly the requested number of
//! output bytes.

use crate::encoding::{bytepad, encode_string, right_encode};
use crate::keccak::STATE_BYTES;
use crate::sponge::KeccakSponge;

/// Sponge capacity in bits for the 128-bit-strength XOFs.
const CAPACITY_128: usize = 256;
/// Sponge capacity in bits for the 256-bit-strength XOFs.
const CAPACITY_256: usize = 512;

/// Domain-separation suffix for the fixed-length SHA-3 digests.
const SHA3_SUFFIX: u8 = 0x06;
/// Domain-separation suffix for plain SHAKE.
const SHAKE_SUFFIX: u8 = 0x1F;
/// Domain-separation suffix for customized SHAKE (cSHAKE).
const CSHAKE_SUFFIX: u8 = 0x04;

/// SHA3-224 message digest.
pub fn sha3_224(msg: &[u8]) -> [u8; 28] {
    sha3(msg)
}

/// SHA3-256 message digest.
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
    sha3(msg)
}

/// SHA3-384 message digest.
pub fn sha3_384(msg: &[u8]) -> [u8; 48] {
    sha3(msg)
}

/// SHA3-512 message digest.
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
    sha3(msg)
}

/// Fixed-length SHA-3: capacity is twice the digest length, one squeeze,
/// truncated to the digest.
fn sha3<const N: usize>(msg: &[u8]) -> [u8; N] {
    let mut sponge = KeccakSponge::new(2 * N * 8, SHA3_SUFFIX);
    sponge.absorb_all(msg);
    let block = sponge.squeeze();
    let mut out = [0u8; N];
    out.copy_from_slice(&block[..N]);
    out
}

/// SHAKE128 extendable-output function.
pub fn shake128(msg: &[u8], out_len: usize) -> Vec<u8> {
    shake(msg, out_len, CAPACITY_128, SHAKE_SUFFIX)
}

/// SHAKE256 extendable-output function.
pub fn shake256(msg: &[u8], out_len: usize) -> Vec<u8> {
    shake(msg, out_len, CAPACITY_256, SHAKE_SUFFIX)
}

/// cSHAKE128 with a function name `name` and customization string
/// `custom`. With both strings empty this is exactly SHAKE128.
pub fn cshake128(msg: &[u8], out_len: usize, name: &[u8], custom: &[u8]) -> Vec<u8> {
    cshake(msg, out_len, name, custom, CAPACITY_128)
}

/// cSHAKE256 with a function name `name` and customization string
/// `custom`. With both strings empty this is exactly SHAKE256.
pub fn cshake256(msg: &[u8], out_len: usize, name: &[u8], custom: &[u8]) -> Vec<u8> {
    cshake(msg, out_len, name, custom, CAPACITY_256)
}

/// KMACXOF128: extendable-output keyed MAC over cSHAKE128.
pub fn kmacxof128(key: &[u8], msg: &[u8], out_len: usize, custom: &[u8]) -> Vec<u8> {
    kmacxof(key, msg, out_len, custom, CAPACITY_128)
}

/// KMACXOF256: extendable-output keyed MAC over cSHAKE256.
pub fn kmacxof256(key: &[u8], msg: &[u8], out_len: usize, custom: &[u8]) -> Vec<u8> {
    kmacxof(key, msg, out_len, custom, CAPACITY_256)
}

fn shake(msg: &[u8], out_len: usize, capacity: usize, suffix: u8) -> Vec<u8> {
    let mut sponge = KeccakSponge::new(capacity, suffix);
    sponge.absorb_all(msg);

    let mut out = Vec::with_capacity(out_len + sponge.byte_rate());
    while out.len() < out_len {
        out.extend_from_slice(&sponge.squeeze());
    }
    out.truncate(out_len);
    out
}

fn cshake(msg: &[u8], out_len: usize, name: &[u8], custom: &[u8], capacity: usize) -> Vec<u8> {
    if name.is_empty() && custom.is_empty() {
        return shake(msg, out_len, capacity, SHAKE_SUFFIX);
    }

    let byte_rate = (STATE_BYTES * 8 - capacity) / 8;
    let mut prefix = encode_string(name);
    prefix.extend_from_slice(&encode_string(custom));

    let mut input = bytepad(&prefix, byte_rate);
    input.extend_from_slice(msg);
    shake(&input, out_len, capacity, CSHAKE_SUFFIX)
}

/// newX = bytepad(encode_string(K), rate) || X || right_encode(0); the
/// trailing `right_encode(0)` is what makes this the XOF variant.
fn kmacxof(key: &[u8], msg: &[u8], out_len: usize, custom: &[u8], capacity: usize) -> Vec<u8> {
    let byte_rate = (STATE_BYTES * 8 - capacity) / 8;
    let mut input = bytepad(&encode_string(key), byte_rate);
    input.extend_from_slice(msg);
    input.extend_from_slice(&right_encode(0));
    cshake(&input, out_len, b"KMAC", custom, capacity)
}
