//! Group-law and codec tests for E-521.

use keccrypt::curve::{E521Point, GENERATOR, P, POINT_BYTES, R};
use keccrypt::KeccryptError;

use num_bigint::BigInt;
use num_integer::Integer;
use rand::Rng;

fn g() -> E521Point {
    GENERATOR.clone()
}

fn identity() -> E521Point {
    E521Point::identity()
}

#[test]
fn small_scalar_arithmetic() {
    let two_g = g().scalar_mul(&BigInt::from(2));
    let four_g = g().scalar_mul(&BigInt::from(4));

    assert_eq!(g().scalar_mul(&BigInt::from(0)), identity());
    assert_eq!(g().scalar_mul(&BigInt::from(1)), g());
    assert_eq!(two_g, g().add(&g()));
    assert_eq!(two_g, g().double());
    assert_eq!(four_g, two_g.double());
    assert_eq!(
        four_g,
        g().scalar_mul(&BigInt::from(2)).scalar_mul(&BigInt::from(2))
    );
    assert_ne!(four_g, identity());
}

#[test]
fn generator_times_group_order_is_identity() {
    assert_eq!(g().scalar_mul(&R), identity());
}

#[test]
fn negation_is_the_group_inverse() {
    assert_eq!(g().add(&g().negate()), identity());
    let p = g().scalar_mul(&BigInt::from(97));
    assert_eq!(p.add(&p.negate()), identity());
}

#[test]
fn addition_is_consistent_with_scalars() {
    // (P + Q) for P = G, Q = 2G lands exactly on 3G.
    let three_g = g().scalar_mul(&BigInt::from(3));
    let sum = g().add(&g().double());
    assert_eq!(sum.x(), three_g.x());
    assert_eq!(sum.y(), three_g.y());
}

#[test]
fn distributive_laws_hold_for_random_scalars() {
    let mut rng = rand::rng();
    for _ in 0..4 {
        let k = BigInt::from(rng.random::<u32>());
        let t = BigInt::from(rng.random::<u32>());

        let k_g = g().scalar_mul(&k);
        let t_g = g().scalar_mul(&t);

        assert_eq!(g().scalar_mul(&(&k + 1u32)), k_g.add(&g()));
        assert_eq!(g().scalar_mul(&(&k + &t)), k_g.add(&t_g));
    }
}

#[test]
fn curve_is_closed_under_the_operations() {
    let p = g().scalar_mul(&BigInt::from(12345));
    let q = g().scalar_mul(&BigInt::from(67890));
    assert!(p.is_on_curve());
    assert!(q.is_on_curve());
    assert!(p.add(&q).is_on_curve());
    assert!(p.double().is_on_curve());
    assert!(p.negate().is_on_curve());
}

#[test]
fn generator_decompresses_from_its_x() {
    let recovered = E521Point::from_x(GENERATOR.x(), false).unwrap();
    assert_eq!(recovered, *GENERATOR);

    // The odd root is p - y, the other solution of the curve equation.
    let odd = E521Point::from_x(GENERATOR.x(), true).unwrap();
    assert!(odd.is_on_curve());
    assert!(odd.y().bit(0));
    assert_eq!((odd.y() + GENERATOR.y()).mod_floor(&P), BigInt::from(0));
}

#[test]
fn decompression_failures_surface_as_no_such_point() {
    // Roughly half of all x-coordinates have no matching y; whichever
    // these are, the error kind must be NoSuchPoint and every success
    // must land on the curve.
    for x in 2u32..=40 {
        match E521Point::from_x(&BigInt::from(x), false) {
            Ok(point) => {
                assert!(point.is_on_curve());
                assert_eq!(point.x(), &BigInt::from(x));
            }
            Err(err) => assert_eq!(err, KeccryptError::NoSuchPoint),
        }
    }
}

#[test]
fn codec_round_trips_random_points() {
    for k in [1u32, 2, 3, 1000, 123456] {
        let point = g().scalar_mul(&BigInt::from(k));
        let bytes = point.to_bytes();
        assert_eq!(bytes.len(), POINT_BYTES);
        assert_eq!(E521Point::from_bytes(&bytes).unwrap(), point);
    }
}

#[test]
fn codec_rejects_bad_input() {
    assert_eq!(
        E521Point::from_bytes(&[0u8; 64]).unwrap_err(),
        KeccryptError::BadLength {
            expected: POINT_BYTES,
            actual: 64
        }
    );

    // A valid length whose halves are not a curve point.
    let mut bytes = GENERATOR.to_bytes();
    bytes[POINT_BYTES - 1] ^= 0x01;
    assert_eq!(
        E521Point::from_bytes(&bytes).unwrap_err(),
        KeccryptError::NotOnCurve
    );
}

#[test]
fn off_curve_coordinates_are_rejected() {
    assert_eq!(
        E521Point::new(BigInt::from(2), BigInt::from(3)).unwrap_err(),
        KeccryptError::NotOnCurve
    );
    // The identity's special case still holds.
    assert!(E521Point::new(BigInt::from(0), BigInt::from(1)).is_ok());
}
