use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use num_traits::Zero;
use crate::error::Result;
use crate::field::field::Field;

/// Scratch arithmetic value borrowed from a `Field`, always reduced.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldElement<'a> {
  pub(crate) field: &'a Field,
  pub(crate) value: BigUint,
}

impl Debug for FieldElement<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}

impl Display for FieldElement<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}

impl<'a> FieldElement<'a> {
  pub fn new(field: &'a Field, value: BigUint) -> Self {
    Self {
      field,
      value: value % field.order(),
    }
  }

  pub fn value (&self) -> &BigUint {
    &self.value
  }

  pub fn into_value (self) -> BigUint {
    self.value
  }

  /// Division fails instead of panicking, as `0` has no inverse.
  pub fn checked_div (self, rhs: Self) -> Result<FieldElement<'a>> {
    Ok(FieldElement {
      field: self.field,
      value: self.field.div_mod(&self.value, &rhs.value)?,
    })
  }

  pub fn pow (&self, exponent: impl Into<BigUint>) -> FieldElement<'a> {
    FieldElement {
      field: self.field,
      value: self.field.pow_mod(&self.value, &exponent.into()),
    }
  }

  pub fn is_zero (&self) -> bool {
    self.value.is_zero()
  }
}

impl<'a> Add for FieldElement<'a> {
  type Output = Self;
  fn add (self, rhs: Self) -> Self::Output {
    FieldElement {
      field: self.field,
      value: self.field.add_mod(self.value, rhs.value),
    }
  }
}

impl<'a> Sub for FieldElement<'a> {
  type Output = Self;
  fn sub (self, rhs: Self) -> Self::Output {
    FieldElement {
      field: self.field,
      value: self.field.sub_mod(self.value, rhs.value),
    }
  }
}

impl<'a> Mul for FieldElement<'a> {
  type Output = Self;
  fn mul (self, rhs: Self) -> Self::Output {
    FieldElement {
      field: self.field,
      value: self.field.mul_mod(self.value, rhs.value),
    }
  }
}

impl<'a> Neg for FieldElement<'a> {
  type Output = FieldElement<'a>;
  fn neg (self) -> Self::Output {
    FieldElement {
      field: self.field,
      value: self.field.neg_mod(self.value),
    }
  }
}
