//! Modular arithmetic on plain integers in `Z/pZ`.
//!
//! Every argument is reduced modulo `base` first, so negative input is fine.
//! `base` should be prime; it is only required to be at least 2.

use num_bigint::{BigInt, BigUint};
use crate::error::Result;
use crate::field::field::Field;

/// Inverse of `n` in `Z/pZ`, within `[1, base - 1]`.
///
/// ```
/// use elliptic::field::arithmetic::inverse;
/// use num_bigint::BigUint;
///
/// assert_eq!(inverse(4, 5).unwrap(), BigUint::from(4_u8));
/// assert_eq!(inverse(-666, 5).unwrap(), BigUint::from(4_u8));
/// assert!(inverse(10, 5).is_err());
/// ```
pub fn inverse (n: impl Into<BigInt>, base: impl Into<BigInt>) -> Result<BigUint> {
  let field = Field::new(base)?;
  let n = field.reduce(&n.into());
  field.inv(&n)
}

/// `n / q` in `Z/pZ`.
///
/// ```
/// use elliptic::field::arithmetic::divide;
/// use num_bigint::BigUint;
///
/// assert_eq!(divide(3, 2, 11).unwrap(), BigUint::from(7_u8));
/// assert_eq!(divide(-666, 4, 5).unwrap(), BigUint::from(1_u8));
/// ```
pub fn divide (n: impl Into<BigInt>, q: impl Into<BigInt>, base: impl Into<BigInt>) -> Result<BigUint> {
  let field = Field::new(base)?;
  let n = field.reduce(&n.into());
  let q = field.reduce(&q.into());
  field.div_mod(&n, &q)
}

/// `x ** y` in `Z/pZ` for a non-negative exponent.
pub fn expo (x: impl Into<BigInt>, y: &BigUint, base: impl Into<BigInt>) -> Result<BigUint> {
  let field = Field::new(base)?;
  let x = field.reduce(&x.into());
  Ok(field.pow_mod(&x, y))
}
