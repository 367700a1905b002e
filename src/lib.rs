//! # keccrypt
//!
//! A self-contained cryptographic primitives library built on the Keccak
//! sponge and the E-521 Edwards curve:
//!
//! - the Keccak-f[1600] permutation and a generic duplex sponge;
//! - SHA3-{224,256,384,512}, SHAKE128/256, cSHAKE128/256, and
//!   KMACXOF128/256 per FIPS 202 and NIST SP 800-185;
//! - E-521 point arithmetic with compression and a fixed-width byte codec;
//! - passphrase-derived key pairs, symmetric and elliptic authenticated
//!   encryption, and Schnorr signatures, all keyed through KMACXOF256.
//!
//! The crate is a pure, single-threaded value transformer: nothing here
//! spawns work or holds global state, and randomness enters only through
//! the `_with_rng` entry points (the plain variants draw from the thread
//! RNG).
//!
//! ## Example
//! ```rust
//! use keccrypt::{symmetric_decrypt, symmetric_encrypt};
//!
//! fn main() -> keccrypt::Result<()> {
//!     let cryptogram = symmetric_encrypt(b"attack at dawn", b"hunter2")?;
//!     let plaintext = symmetric_decrypt(&cryptogram, b"hunter2")?;
//!     assert_eq!(plaintext, b"attack at dawn");
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//! All fallible operations return [`KeccryptError`]. Decryption reports
//! tag mismatches as [`KeccryptError::AuthFail`] and never releases
//! unauthenticated plaintext.

#![forbid(unsafe_code)]

pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keccak;
pub mod pad;
pub mod schemes;
pub mod sponge;
mod util;

pub use curve::{E521Point, POINT_BYTES};
pub use error::{KeccryptError, Result};
pub use schemes::{
    auth_tag, derive_keypair, derive_keypair_with_rng, digest, elliptic_decrypt,
    elliptic_encrypt, elliptic_encrypt_with_rng, sign, symmetric_decrypt, symmetric_encrypt,
    symmetric_encrypt_with_rng, verify, EllipticCryptogram, KeyPair, Signature,
    SymmetricCryptogram,
};
pub use sponge::KeccakSponge;
