use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::Rng;
use crate::curves::context::{Curve, CurveContext};
use crate::curves::projective::ProjectivePoint;
use crate::error::{EllipticError, Result};
use crate::field::field::Field;
use crate::field::field_element::FieldElement;
use crate::utils::bit_iter::BitIter;
use crate::utils::s_tonelli::tonelli_shanks;

const RANDOM_ATTEMPTS: usize = 128;

/// A projective point on `y^2 = x^3 + ax + b`, checked on construction.
///
/// Points are immutable values bound to the [`Curve`] snapshot they were
/// validated against; every group operation returns a new point.
#[derive(Debug, Clone)]
pub struct CurvePoint {
    point: ProjectivePoint,
    curve: Curve,
}

// https://www.hyperelliptic.org/EFD/g1p/auto-shortw.html
impl CurvePoint {
    pub fn new(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
        ctx: &CurveContext,
    ) -> Result<Self> {
        Self::on_curve(ProjectivePoint::new(x, y, z, ctx.field())?, ctx.curve())
    }

    pub fn from_affine(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        ctx: &CurveContext,
    ) -> Result<Self> {
        Self::on_curve(ProjectivePoint::from_affine(x, y, ctx.field()), ctx.curve())
    }

    /// The identity element `(0, 1, 0)`.
    pub fn infinity(ctx: &CurveContext) -> Self {
        Self::infinity_on(ctx.curve())
    }

    /// Both points with affine `x`, `None` when `x^3 + ax + b` has no square root.
    pub fn lift_x(x: impl Into<BigInt>, ctx: &CurveContext) -> Option<(Self, Self)> {
        let curve = ctx.curve();
        let field = curve.field();
        let x = field.get(x);
        let rhs = x.pow(3_u32) + field.get(curve.a().clone()) * x.clone() + field.get(curve.b().clone());

        let (r1, r2) = tonelli_shanks(&rhs)?;
        // composite moduli
        if r1.pow(2_u32) != rhs {
            return None;
        }

        let lift = |y: BigUint| {
            Self::on_curve(ProjectivePoint::from_affine(x.value().clone(), y, field), curve.clone()).ok()
        };
        Some((lift(r1.into_value())?, lift(r2.into_value())?))
    }

    /// Samples `x` uniformly until it lifts to the curve.
    pub fn random<R: Rng + ?Sized>(ctx: &CurveContext, rng: &mut R) -> Option<Self> {
        for _ in 0..RANDOM_ATTEMPTS {
            let x = rng.gen_biguint_below(ctx.modulus());
            if let Some((p1, p2)) = Self::lift_x(x, ctx) {
                return Some(if rng.gen_bool(0.5) { p1 } else { p2 });
            }
        }
        log::debug!("no curve point found after {} attempts on {}", RANDOM_ATTEMPTS, ctx);
        None
    }

    fn infinity_on(curve: Curve) -> Self {
        Self {
            point: ProjectivePoint::infinity(curve.field()),
            curve,
        }
    }

    fn on_curve(point: ProjectivePoint, curve: Curve) -> Result<Self> {
        if !point.belongs_to(curve.a().clone(), curve.b().clone()) {
            log::debug!("{} is not on curve ({}, {}) modulo {}", point.as_point(), curve.a(), curve.b(), curve.field());
            return Err(EllipticError::NotOnCurve {
                a: curve.a().clone(),
                b: curve.b().clone(),
                modulus: curve.field().order().clone(),
            });
        }
        Ok(Self { point, curve })
    }

    pub fn as_projective(&self) -> &ProjectivePoint {
        &self.point
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn x(&self) -> &BigUint {
        self.point.x()
    }

    pub fn y(&self) -> &BigUint {
        self.point.y()
    }

    pub fn z(&self) -> &BigUint {
        self.point.z()
    }

    pub fn is_infinity(&self) -> bool {
        self.point.is_infinity()
    }

    pub fn affine_x(&self) -> Result<BigUint> {
        self.point.affine_x()
    }

    pub fn affine_y(&self) -> Result<BigUint> {
        self.point.affine_y()
    }

    fn affine<'a>(&self, field: &'a Field) -> Result<(FieldElement<'a>, FieldElement<'a>)> {
        Ok((
            FieldElement::new(field, self.affine_x()?),
            FieldElement::new(field, self.affine_y()?),
        ))
    }

    fn same_curve(&self, other: &Self) -> Result<()> {
        if self.curve != other.curve {
            return Err(EllipticError::CurveMismatch);
        }
        Ok(())
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return Self::infinity_on(self.curve.clone());
        }
        Self {
            point: self.point.negated(),
            curve: self.curve.clone(),
        }
    }

    /// The star law: third intersection of the chord (or tangent) through
    /// `self` and `other` with the curve. The group addition is its negation.
    ///
    /// Doubling a point with `y = 0` fails with `DivisionByZero`.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        self.same_curve(other)?;
        if self.is_infinity() {
            return Ok(other.negate());
        }
        if other.is_infinity() {
            return Ok(self.negate());
        }

        let curve = &self.curve;
        let field = curve.field();
        let (xp, yp) = self.affine(field)?;
        let (xq, yq) = other.affine(field)?;

        let (lambda, kappa) = if self == other {
            let slope = (field.get(3) * xp.pow(2_u32) + field.get(curve.a().clone()))
                .checked_div(field.get(2) * yp.clone())
                .map_err(|e| {
                    log::debug!("vertical tangent at {}: {}", self, e);
                    e
                })?;
            let kappa = slope.pow(2_u32) - field.get(2) * xp.clone();
            (slope, kappa)
        } else if xp == xq {
            log::trace!("vertical chord through {} and {}", self, other);
            return Ok(Self::infinity_on(curve.clone()));
        } else {
            let slope = (yq - yp.clone()).checked_div(xq.clone() - xp.clone())?;
            let kappa = slope.pow(2_u32) - xp.clone() - xq;
            (slope, kappa)
        };

        let y = lambda * (kappa.clone() - xp) + yp;
        log::trace!("{} * {} = ({}, {})", self, other, kappa, y);
        Self::on_curve(
            ProjectivePoint::from_affine(kappa.into_value(), y.into_value(), field),
            curve.clone(),
        )
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::infinity_on(self.curve.clone()).combine(&self.combine(other)?)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.add(&other.negate())
    }

    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    // finite with `y = 0`, its own negation
    fn is_two_torsion(&self) -> bool {
        !self.is_infinity() && self.y().is_zero()
    }

    /// `n * self` by double-and-add, negative `n` included.
    ///
    /// Agrees with `self + (n - 1) * self`: that recursion only ever doubles
    /// `self`, so it fails with `DivisionByZero` exactly when `self` has
    /// `y = 0` and `|n| >= 2`. Intermediate points of order 2 double to infinity.
    pub fn scalar_multiply(&self, n: impl Into<BigInt>) -> Result<Self> {
        let n = n.into();
        match n.sign() {
            Sign::NoSign => Ok(Self::infinity_on(self.curve.clone())),
            Sign::Minus => self.negate().scalar_multiply(-n),
            Sign::Plus => {
                let (_, n) = n.into_parts();
                if self.is_two_torsion() && !n.is_one() {
                    return self.double();
                }
                BitIter::from(&n).try_fold(Self::infinity_on(self.curve.clone()), |acc, bit| {
                    let acc = if acc.is_two_torsion() {
                        Self::infinity_on(self.curve.clone())
                    } else {
                        acc.double()?
                    };
                    if bit {
                        self.add(&acc)
                    } else {
                        Ok(acc)
                    }
                })
            }
        }
    }
}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl Eq for CurvePoint {}

impl Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.point)
    }
}

impl Neg for &CurvePoint {
    type Output = CurvePoint;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for &CurvePoint {
    type Output = Result<CurvePoint>;
    fn add(self, rhs: Self) -> Self::Output {
        CurvePoint::add(self, rhs)
    }
}

impl Sub for &CurvePoint {
    type Output = Result<CurvePoint>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<N: Into<BigInt>> Mul<N> for &CurvePoint {
    type Output = Result<CurvePoint>;
    fn mul(self, n: N) -> Self::Output {
        self.scalar_multiply(n)
    }
}
