use std::fmt::{Display, Formatter};
use std::str::FromStr;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use crate::error::{EllipticError, Result};
use crate::field::field_element::FieldElement;
use crate::utils::bit_iter::BitIter;
use crate::utils::xgcd::u_xgcd;

/// The ring `Z/pZ`, a field when `order` is prime.
///
/// Primality is never checked: with a composite order `inv` fails with
/// `NotInvertible` on zero divisors and the curve group law stops being one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BigUint", into = "BigUint"))]
pub struct Field {
  order: BigUint,
}

impl TryFrom<BigUint> for Field {
  type Error = EllipticError;
  fn try_from (order: BigUint) -> Result<Self> {
    Field::new(order)
  }
}

impl From<Field> for BigUint {
  fn from (field: Field) -> Self {
    field.order
  }
}

impl FromStr for Field {
  type Err = EllipticError;
  fn from_str (s: &str) -> Result<Self> {
    let order: BigInt = s.trim().parse().map_err(|e: num_bigint::ParseBigIntError| EllipticError::Parse {
      input: s.to_string(),
      reason: e.to_string(),
    })?;
    Field::new(order)
  }
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.order)
  }
}

impl<'a> Field {
  pub fn new (order: impl Into<BigInt>) -> Result<Field> {
    let order = order.into();
    match order.to_biguint() {
      Some(order) if order > BigUint::one() => Ok(Field { order }),
      _ => Err(EllipticError::InvalidModulus(order)),
    }
  }

  pub fn order (&self) -> &BigUint {
    &self.order
  }

  /// Representative of `v` in `[0, order - 1]`, negative input included.
  pub fn reduce (&self, v: &BigInt) -> BigUint {
    let (_, magnitude) = v.mod_floor(&BigInt::from(self.order.clone())).into_parts();
    magnitude
  }

  pub fn get (&'a self, v: impl Into<BigInt>) -> FieldElement<'a> {
    FieldElement::new(self, self.reduce(&v.into()))
  }

  pub fn one (&'a self) -> FieldElement<'a> {
    FieldElement {
      field: self,
      value: BigUint::one(),
    }
  }

  pub(crate) fn sub_mod (&self, a: BigUint, b: BigUint) -> BigUint {
    if a >= b {
      a - b
    } else {
      self.neg_mod(b - a)
    }
  }

  pub(crate) fn add_mod (&self, a: BigUint, b: BigUint) -> BigUint {
    (a + b) % &self.order
  }

  pub(crate) fn mul_mod (&self, a: BigUint, b: BigUint) -> BigUint {
    (a * b) % &self.order
  }

  pub(crate) fn neg_mod (&self, a: BigUint) -> BigUint {
    if a.is_zero() {
      a
    } else {
      &self.order - a
    }
  }

  // square-and-multiply over the bits of `exponent`, highest first
  pub(crate) fn pow_mod (&self, base: &BigUint, exponent: &BigUint) -> BigUint {
    let base = base % &self.order;
    BitIter::from(exponent).fold(BigUint::one(), |acc, bit| {
      let acc = self.mul_mod(acc.clone(), acc);
      if bit {
        self.mul_mod(acc, base.clone())
      } else {
        acc
      }
    })
  }

  // inverse of `x` is `x ** -1 = 1/x` so that `x` multiplied by inversed `x` is `1`
  pub(crate) fn inv (&self, a: &BigUint) -> Result<BigUint> {
    let a = a % &self.order;
    if a.is_zero() {
      return Err(EllipticError::DivisionByZero { modulus: self.order.clone() });
    }
    if a.is_one() {
      return Ok(a);
    }

    let (x, _, g) = u_xgcd(&a, &self.order);
    if !g.is_one() {
      return Err(EllipticError::NotInvertible { value: a, modulus: self.order.clone() });
    }

    // because x can be negative
    Ok(self.reduce(&x))
  }

  pub(crate) fn div_mod (&self, n: &BigUint, q: &BigUint) -> Result<BigUint> {
    Ok(self.mul_mod(n.clone(), self.inv(q)?))
  }
}
