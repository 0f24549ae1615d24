use std::fmt::{Display, Formatter};
use std::str::FromStr;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use crate::error::{EllipticError, Result};
use crate::field::field::Field;

/// Field modulus and Weierstrass coefficients `y^2 = x^3 + ax + b`.
///
/// Changing it only affects points constructed afterwards: every point keeps
/// the [`Curve`] snapshot it was validated against.
///
/// Neither primality of the modulus nor non-singularity (`4a^3 + 27b^2 != 0`)
/// is checked on construction or update. A composite modulus surfaces as
/// `NotInvertible`, a singular curve as `DivisionByZero` when doubling a point
/// with `y = 0`. Call [`CurveContext::validate`] for the singularity check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveContext {
    field: Field,
    a: BigInt,
    b: BigInt,
}

impl CurveContext {
    pub fn new(
        p: impl Into<BigInt>,
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
    ) -> Result<Self> {
        Ok(Self {
            field: Field::new(p)?,
            a: a.into(),
            b: b.into(),
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn modulus(&self) -> &BigUint {
        self.field.order()
    }

    pub fn set_modulus(&mut self, p: impl Into<BigInt>) -> Result<()> {
        self.field = Field::new(p)?;
        Ok(())
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn set_a(&mut self, a: impl Into<BigInt>) {
        self.a = a.into();
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn set_b(&mut self, b: impl Into<BigInt>) {
        self.b = b.into();
    }

    pub fn set_curve(&mut self, a: impl Into<BigInt>, b: impl Into<BigInt>) {
        self.set_a(a);
        self.set_b(b);
    }

    /// Coefficients reduced against the current modulus.
    pub fn curve(&self) -> Curve {
        Curve {
            a: self.field.reduce(&self.a),
            b: self.field.reduce(&self.b),
            field: self.field.clone(),
        }
    }

    /// `-16 * (4a^3 + 27b^2) mod p`
    pub fn discriminant(&self) -> BigUint {
        self.curve().discriminant()
    }

    /// Opt-in strict mode: rejects singular curves. Primality is still not checked.
    pub fn validate(&self) -> Result<()> {
        let curve = self.curve();
        if curve.discriminant().is_zero() {
            log::debug!("curve ({}, {}) is singular modulo {}", curve.a, curve.b, self.field);
            return Err(EllipticError::SingularCurve {
                a: curve.a,
                b: curve.b,
                modulus: self.field.order().clone(),
            });
        }
        Ok(())
    }
}

/// Parses `"p a b"`, whitespace separated.
impl FromStr for CurveContext {
    type Err = EllipticError;
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: String| EllipticError::Parse {
            input: s.to_string(),
            reason,
        };

        let values = s
            .split_whitespace()
            .map(|part| part.parse::<BigInt>().map_err(|e| parse_error(e.to_string())))
            .collect::<Result<Vec<_>>>()?;

        match <[BigInt; 3]>::try_from(values) {
            Ok([p, a, b]) => CurveContext::new(p, a, b),
            Err(values) => Err(parse_error(format!("expected 3 integers, got {}", values.len()))),
        }
    }
}

impl Display for CurveContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {} mod {}", self.a, self.b, self.field)
    }
}

/// Immutable snapshot of a [`CurveContext`], carried by every curve point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curve {
    field: Field,
    a: BigUint,
    b: BigUint,
}

impl Curve {
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub fn discriminant(&self) -> BigUint {
        let field = &self.field;
        let a = field.get(self.a.clone());
        let b = field.get(self.b.clone());
        let delta = field.get(4) * a.pow(3_u32) + field.get(27) * b.pow(2_u32);
        (field.get(-16) * delta).into_value()
    }
}
