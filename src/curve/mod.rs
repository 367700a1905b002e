//! The Edwards curve E-521: x^2 + y^2 = 1 + d*x^2*y^2 over GF(2^521 - 1)
//! with d = -376014, cofactor 4, and a prime-order subgroup of order
//! [`R`]. This module owns the public curve constants and the shared
//! field helpers; the point type lives in [`point`].

pub mod point;

pub use point::E521Point;

use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// The field prime p = 2^521 - 1 (a Mersenne prime).
pub static P: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 521u32) - 1u32);

/// The curve parameter d = -376014.
pub static D: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(-376014));

/// Subtracted from 2^519 to produce the subgroup order [`R`].
static R_OFFSET: LazyLock<BigInt> = LazyLock::new(|| {
    BigInt::parse_bytes(
        b"337554763258501705789107630418782636071904961214051226618635150085779108655765",
        10,
    )
    .expect("valid decimal literal")
});

/// Order of the prime subgroup: r = 2^519 - R'. The curve carries 4r
/// points in total.
pub static R: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 519u32) - &*R_OFFSET);

/// The public generator G: x = 4 and the even root of the curve equation.
pub static GENERATOR: LazyLock<E521Point> = LazyLock::new(|| {
    E521Point::from_x(&BigInt::from(4), false).expect("generator x-coordinate has a root")
});

/// Fixed length of an encoded point: both coordinates in signed
/// big-endian form, each padded to the signed byte length of p. That is
/// 66 bytes per coordinate, the 521 magnitude bits plus a sign bit.
pub const POINT_BYTES: usize = 132;

/// Compute a square root of `v` mod `p` with the given least significant
/// bit, if one exists. Requires p = 3 (mod 4), which admits the
/// `v^((p+1)/4)` shortcut; the candidate is verified by squaring.
pub fn sqrt(v: &BigInt, p: &BigInt, lsb: bool) -> Option<BigInt> {
    debug_assert!(p.bit(0) && p.bit(1));
    if v.is_zero() {
        return Some(BigInt::zero());
    }
    let mut root = v.modpow(&((p >> 2u32) + 1u32), p);
    if root.bit(0) != lsb {
        root = p - &root;
    }
    ((&root * &root - v).mod_floor(p).is_zero()).then_some(root)
}

/// Multiplicative inverse modulo p.
///
/// Every denominator this crate inverts is produced by the complete
/// Edwards formulas (d is a non-square, so 1 +- d*x1*x2*y1*y2 is never
/// zero) or by decompression of a field element, so the inverse exists.
pub(crate) fn invert(a: &BigInt) -> BigInt {
    a.modinv(&P).expect("denominator invertible modulo the field prime")
}
