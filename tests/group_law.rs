//! Group law properties over `y^2 = x^3 + 5x + 1 mod 1009`, a curve of prime order 1039.

use elliptic::{CurveContext, CurvePoint, EllipticError};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ORDER: i64 = 1039;

fn curve() -> CurveContext {
    CurveContext::new(1009, 5, 1).unwrap()
}

fn generator(ctx: &CurveContext) -> CurvePoint {
    CurvePoint::from_affine(0, 1, ctx).unwrap()
}

/// `n * P` as `P + (n - 1) * P`, one addition at a time.
fn repeated_add(p: &CurvePoint, n: i64, ctx: &CurveContext) -> CurvePoint {
    if n < 0 {
        return repeated_add(&p.negate(), -n, ctx);
    }
    (0..n).fold(CurvePoint::infinity(ctx), |acc, _| p.add(&acc).unwrap())
}

/// Points as multiples of the generator, identity included.
fn any_point() -> impl Strategy<Value = CurvePoint> {
    (0..ORDER).prop_map(|k| generator(&curve()).scalar_multiply(k).unwrap())
}

proptest! {
    #[test]
    fn double_negation(p in any_point()) {
        prop_assert_eq!(p.negate().negate(), p);
    }

    #[test]
    fn identity(p in any_point()) {
        let infinity = CurvePoint::infinity(&curve());
        prop_assert_eq!(p.add(&infinity).unwrap(), p.clone());
        prop_assert_eq!(infinity.add(&p).unwrap(), p);
    }

    #[test]
    fn inverse_element(p in any_point()) {
        prop_assert_eq!(p.add(&p.negate()).unwrap(), CurvePoint::infinity(&curve()));
        prop_assert_eq!(p.subtract(&p).unwrap(), CurvePoint::infinity(&curve()));
    }

    #[test]
    fn commutativity(p in any_point(), q in any_point()) {
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn associativity(p in any_point(), q in any_point(), r in any_point()) {
        let left = p.add(&q).unwrap().add(&r).unwrap();
        let right = p.add(&q.add(&r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn double_negates_star(p in any_point(), q in any_point()) {
        prop_assert_eq!(p.add(&q).unwrap(), p.combine(&q).unwrap().negate());
    }

    #[test]
    fn small_scalars(p in any_point()) {
        prop_assert_eq!(p.scalar_multiply(0).unwrap(), CurvePoint::infinity(&curve()));
        prop_assert_eq!(p.scalar_multiply(1).unwrap(), p.clone());
        prop_assert_eq!(p.scalar_multiply(-1).unwrap(), p.negate());
        prop_assert_eq!(p.scalar_multiply(2).unwrap(), p.add(&p).unwrap());
    }

    #[test]
    fn double_and_add_matches_repeated_addition(k in 0..ORDER, n in -40_i64..40) {
        let ctx = curve();
        let p = generator(&ctx).scalar_multiply(k).unwrap();
        prop_assert_eq!(p.scalar_multiply(n).unwrap(), repeated_add(&p, n, &ctx));
    }

    #[test]
    fn scalar_distributes(a in -2000_i64..2000, b in -2000_i64..2000) {
        let g = generator(&curve());
        let sum = g.scalar_multiply(a).unwrap().add(&g.scalar_multiply(b).unwrap()).unwrap();
        prop_assert_eq!(g.scalar_multiply(a + b).unwrap(), sum);
    }

    #[test]
    fn projective_representatives(k in 1..ORDER, z in 1_u32..1009) {
        let ctx = curve();
        let p = generator(&ctx).scalar_multiply(k).unwrap();
        let (x, y) = (p.affine_x().unwrap(), p.affine_y().unwrap());
        let scaled = CurvePoint::new(x * z, y * z, z, &ctx).unwrap();
        prop_assert_eq!(scaled, p);
    }

    #[test]
    fn inverse_times_value(n in any::<i64>()) {
        let p = 1009_u32;
        prop_assume!(n.rem_euclid(p as i64) != 0);
        let inverse = elliptic::inverse(n, p).unwrap();
        let product = (BigInt::from(inverse) * n).mod_floor(&BigInt::from(p));
        prop_assert_eq!(product, BigInt::from(1));
    }
}

#[test]
fn inverse_of_multiple_of_modulus() {
    for n in [0_i64, 1009, -1009, 1009 * 1009] {
        assert_eq!(
            elliptic::inverse(n, 1009),
            Err(EllipticError::DivisionByZero { modulus: BigUint::from(1009_u32) }),
        );
    }
}

#[test]
fn triple_via_addition() {
    let ctx = curve();
    let g = generator(&ctx);
    let tripled = g.add(&g.add(&g).unwrap()).unwrap();
    assert_eq!(g.scalar_multiply(3).unwrap(), tripled);
    assert_eq!((&g * 3).unwrap(), CurvePoint::from_affine(775, 671, &ctx).unwrap());
}

#[test]
fn random_points_generate_the_group() {
    let ctx = curve();
    let mut rng = StdRng::seed_from_u64(7);
    let p = CurvePoint::random(&ctx, &mut rng).unwrap();
    let q = CurvePoint::random(&ctx, &mut rng).unwrap();

    assert_eq!((&p * ORDER).unwrap(), CurvePoint::infinity(&ctx));
    assert_eq!((&(&p + &q).unwrap() - &q).unwrap(), p);
}

#[test]
fn context_snapshot() {
    let mut ctx = CurveContext::new(7, 2, 1).unwrap();
    let p = CurvePoint::from_affine(1, 2, &ctx).unwrap();
    ctx.set_modulus(13).unwrap();

    assert_eq!(p.scalar_multiply(5).unwrap(), p.scalar_multiply(0).unwrap());
    assert!(CurvePoint::from_affine(1, 5, &ctx).is_err());
}

/// `n * P` as `P + (n - 1) * P`, keeping the error of the first failing addition.
fn recursive_multiple(p: &CurvePoint, n: i64, ctx: &CurveContext) -> Result<CurvePoint, EllipticError> {
    match n {
        0 => Ok(CurvePoint::infinity(ctx)),
        n if n < 0 => recursive_multiple(&p.negate(), -n, ctx),
        n => p.add(&recursive_multiple(p, n - 1, ctx)?),
    }
}

#[test]
fn scalar_multiply_with_two_torsion() {
    for (modulus, a, b) in [(7, 1, 0), (11, 3, 0), (7, -1, 0), (13, 1, 0)] {
        let ctx = CurveContext::new(modulus, a, b).unwrap();
        let points = (0..modulus)
            .flat_map(|x| (0..modulus).map(move |y| (x, y)))
            .filter_map(|(x, y)| CurvePoint::from_affine(x, y, &ctx).ok());

        for p in points {
            for n in -9..=9 {
                assert_eq!(p.scalar_multiply(n), recursive_multiple(&p, n, &ctx), "{} * {}", n, p);
            }
        }
    }
}
