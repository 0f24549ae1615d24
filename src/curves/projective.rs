use std::fmt::{Display, Formatter};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use crate::curves::point::Point;
use crate::error::{EllipticError, Result};
use crate::field::field::Field;

/// A point of the projective plane over `Z/pZ`.
///
/// Triples with `Z = 0` are infinity points, the others have homogeneous
/// coordinates `(X/Z, Y/Z)`. Equality is projective: triples equal up to a
/// non-zero factor denote the same point.
#[derive(Debug, Clone)]
pub struct ProjectivePoint {
    point: Point,
}

impl ProjectivePoint {
    pub fn new(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
        field: &Field,
    ) -> Result<Self> {
        let point = Point::new(x, y, z, field);
        if point.x().is_zero() && point.y().is_zero() && point.z().is_zero() {
            return Err(EllipticError::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// `(x, y, 1)`
    pub fn from_affine(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        field: &Field,
    ) -> Self {
        Self {
            point: Point::new(x, y, 1, field),
        }
    }

    /// `(0, 1, 0)`
    pub fn infinity(field: &Field) -> Self {
        Self {
            point: Point::new(0, 1, 0, field),
        }
    }

    pub fn field(&self) -> &Field {
        self.point.field()
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

    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// `(X, -Y, Z)`, the affine `(x, -y)` of a finite point.
    pub(crate) fn negated(&self) -> Self {
        let field = self.field();
        Self {
            point: Point::new(
                self.x().clone(),
                -BigInt::from(self.y().clone()),
                self.z().clone(),
                field,
            ),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z().is_zero()
    }

    pub fn affine_x(&self) -> Result<BigUint> {
        if self.is_infinity() {
            return Err(EllipticError::UndefinedCoordinate);
        }
        self.field().div_mod(self.x(), self.z())
    }

    pub fn affine_y(&self) -> Result<BigUint> {
        if self.is_infinity() {
            return Err(EllipticError::UndefinedCoordinate);
        }
        self.field().div_mod(self.y(), self.z())
    }

    /// Checks the Weierstrass equation `X^3 + aXZ^2 + bZ^3 - Y^2Z = 0` only;
    /// the only infinity point on a curve is `(0, 1, 0)`.
    pub fn belongs_to(&self, a: impl Into<BigInt>, b: impl Into<BigInt>) -> bool {
        let field = self.field();
        if self.is_infinity() {
            return *self == ProjectivePoint::infinity(field);
        }

        let (x, y, z) = (
            field.get(self.x().clone()),
            field.get(self.y().clone()),
            field.get(self.z().clone()),
        );
        let lhs = x.pow(3_u32) + field.get(a) * x.clone() * z.pow(2_u32) + field.get(b) * z.pow(3_u32);
        (lhs - y.pow(2_u32) * z).is_zero()
    }

    // `u1 * v2 == u2 * v1`, i.e. `u1 / v1 == u2 / v2` without dividing
    fn same_ratio(&self, u1: &BigUint, v1: &BigUint, u2: &BigUint, v2: &BigUint) -> bool {
        let field = self.field();
        field.mul_mod(u1.clone(), v2.clone()) == field.mul_mod(u2.clone(), v1.clone())
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        if self.field() != other.field() {
            return false;
        }
        match (self.is_infinity(), other.is_infinity()) {
            // same `Y/X`, all infinity points with `X = 0` included
            (true, true) => self.same_ratio(self.y(), self.x(), other.y(), other.x()),
            (false, false) => {
                self.same_ratio(self.x(), self.z(), other.x(), other.z())
                    && self.same_ratio(self.y(), self.z(), other.y(), other.z())
            }
            _ => false,
        }
    }
}

impl Eq for ProjectivePoint {}

impl Display for ProjectivePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_infinity() {
            return write!(f, "infinity");
        }
        match (self.affine_x(), self.affine_y()) {
            (Ok(x), Ok(y)) => write!(f, "({}, {})", x, y),
            // `Z` is a zero divisor of a composite modulus
            _ => write!(f, "{}", self.point),
        }
    }
}
