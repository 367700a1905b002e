//! Points on E-521: validated construction, complete Edwards arithmetic,
//! decompression, and the fixed-width byte codec.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::curve::{self, D, P, POINT_BYTES};
use crate::error::{KeccryptError, Result};

/// An immutable point on E-521.
///
/// Every value of this type satisfies the curve equation: the public
/// constructors validate their inputs, and the group operations preserve
/// membership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct E521Point {
    x: BigInt,
    y: BigInt,
}

impl E521Point {
    /// Builds a point from affine coordinates, rejecting pairs that do
    /// not lie on the curve.
    pub fn new(x: BigInt, y: BigInt) -> Result<Self> {
        let point = E521Point { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(KeccryptError::NotOnCurve)
        }
    }

    /// The neutral element O = (0, 1).
    pub fn identity() -> Self {
        E521Point {
            x: BigInt::zero(),
            y: BigInt::one(),
        }
    }

    /// Decompresses a point from its x-coordinate by solving
    /// y^2 = (1 - x^2) / (1 - d*x^2) for the root whose least significant
    /// bit matches `lsb`.
    pub fn from_x(x: &BigInt, lsb: bool) -> Result<Self> {
        let xx = (x * x).mod_floor(&P);
        let top = (BigInt::one() - &xx).mod_floor(&P);
        let bot = (BigInt::one() - &*D * &xx).mod_floor(&P);
        let radicand = (top * curve::invert(&bot)).mod_floor(&P);

        let y = curve::sqrt(&radicand, &P, lsb).ok_or(KeccryptError::NoSuchPoint)?;
        Ok(E521Point { x: x.clone(), y })
    }

    /// The x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Whether the coordinates satisfy x^2 + y^2 = 1 + d*x^2*y^2 (mod p).
    /// The identity is accepted by a short-circuit.
    pub fn is_on_curve(&self) -> bool {
        if self.x.is_zero() && self.y.is_one() {
            return true;
        }
        let xx = (&self.x * &self.x).mod_floor(&P);
        let yy = (&self.y * &self.y).mod_floor(&P);
        let left = (&xx + &yy).mod_floor(&P);
        let right = (BigInt::one() + (&*D * xx).mod_floor(&P) * yy).mod_floor(&P);
        left == right
    }

    /// Complete Edwards addition:
    /// x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2),
    /// y3 = (y1*y2 - x1*x2) / (1 - d*x1*x2*y1*y2).
    ///
    /// Because d is a non-square, the denominators are never zero and the
    /// formula covers every input pair, including doubling.
    pub fn add(&self, other: &E521Point) -> E521Point {
        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);

        let base = ((((x1 * x2).mod_floor(&P) * y1).mod_floor(&P) * y2).mod_floor(&P) * &*D)
            .mod_floor(&P);

        let x_num = ((x1 * y2).mod_floor(&P) + (y1 * x2).mod_floor(&P)).mod_floor(&P);
        let x_den = (BigInt::one() + &base).mod_floor(&P);
        let x3 = (x_num * curve::invert(&x_den)).mod_floor(&P);

        let y_num = ((y1 * y2).mod_floor(&P) - (x1 * x2).mod_floor(&P)).mod_floor(&P);
        let y_den = (BigInt::one() - &base).mod_floor(&P);
        let y3 = (y_num * curve::invert(&y_den)).mod_floor(&P);

        let sum = E521Point { x: x3, y: y3 };
        debug_assert!(sum.is_on_curve());
        sum
    }

    /// 2P, as P + P.
    pub fn double(&self) -> E521Point {
        self.add(self)
    }

    /// The Edwards negative: (-x mod p, y).
    pub fn negate(&self) -> E521Point {
        E521Point {
            x: (-&self.x).mod_floor(&P),
            y: self.y.clone(),
        }
    }

    /// k * P by most-significant-bit-first double-and-add, starting from
    /// the identity. Defined for any nonnegative k; 0 * P = O. A negative
    /// scalar is treated by its magnitude.
    pub fn scalar_mul(&self, k: &BigInt) -> E521Point {
        let magnitude = k.magnitude();
        let mut acc = E521Point::identity();
        for i in (0..magnitude.bits()).rev() {
            acc = acc.double();
            if magnitude.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Serializes the point as both coordinates in signed big-endian
    /// form, each left-padded (with 0x00, or 0xFF for a negative value)
    /// to half of [`POINT_BYTES`].
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let mut out = [0u8; POINT_BYTES];
        let half = POINT_BYTES / 2;
        let x_bytes = self.x.to_signed_bytes_be();
        let y_bytes = self.y.to_signed_bytes_be();

        if self.x.sign() == Sign::Minus {
            out[..half - x_bytes.len()].fill(0xFF);
        }
        if self.y.sign() == Sign::Minus {
            out[half..POINT_BYTES - y_bytes.len()].fill(0xFF);
        }
        out[half - x_bytes.len()..half].copy_from_slice(&x_bytes);
        out[POINT_BYTES - y_bytes.len()..].copy_from_slice(&y_bytes);
        out
    }

    /// Parses the two signed big-endian halves and validates the result
    /// against the curve equation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != POINT_BYTES {
            return Err(KeccryptError::BadLength {
                expected: POINT_BYTES,
                actual: bytes.len(),
            });
        }
        let half = POINT_BYTES / 2;
        let x = BigInt::from_signed_bytes_be(&bytes[..half]);
        let y = BigInt::from_signed_bytes_be(&bytes[half..]);
        E521Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::GENERATOR;

    #[test]
    fn identity_is_on_curve() {
        assert!(E521Point::identity().is_on_curve());
        assert_eq!(
            E521Point::new(BigInt::zero(), BigInt::one()).unwrap(),
            E521Point::identity()
        );
    }

    #[test]
    fn rejects_off_curve_coordinates() {
        assert_eq!(
            E521Point::new(BigInt::from(1), BigInt::from(1)),
            Err(KeccryptError::NotOnCurve)
        );
    }

    #[test]
    fn negation_cancels() {
        let g = GENERATOR.clone();
        assert_eq!(g.add(&g.negate()), E521Point::identity());
    }

    #[test]
    fn codec_round_trips_the_generator() {
        let encoded = GENERATOR.to_bytes();
        assert_eq!(encoded.len(), POINT_BYTES);
        let decoded = E521Point::from_bytes(&encoded).unwrap();
        assert_eq!(decoded, *GENERATOR);
    }

    #[test]
    fn codec_rejects_wrong_lengths() {
        assert_eq!(
            E521Point::from_bytes(&[0u8; 131]),
            Err(KeccryptError::BadLength {
                expected: POINT_BYTES,
                actual: 131
            })
        );
    }
}
