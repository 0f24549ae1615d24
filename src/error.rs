use num_bigint::{BigInt, BigUint};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EllipticError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EllipticError {
  /// Inverse or division of a value that is `0` modulo the field order.
  #[error("divided by 0 modulo {modulus}")]
  DivisionByZero { modulus: BigUint },

  /// Non-zero value sharing a factor with a composite modulus.
  #[error("{value} has no inverse modulo {modulus}")]
  NotInvertible { value: BigUint, modulus: BigUint },

  #[error("point (0, 0, 0) is not projective")]
  InvalidPoint,

  #[error("creating point out of curve ({a}, {b}) modulo {modulus}")]
  NotOnCurve { a: BigUint, b: BigUint, modulus: BigUint },

  #[error("infinity cannot have homogeneous coordinates")]
  UndefinedCoordinate,

  #[error("points belong to different curves")]
  CurveMismatch,

  #[error("modulus {0} is smaller than 2")]
  InvalidModulus(BigInt),

  #[error("curve ({a}, {b}) is singular modulo {modulus}")]
  SingularCurve { a: BigUint, b: BigUint, modulus: BigUint },

  #[error("cannot parse {input:?}: {reason}")]
  Parse { input: String, reason: String },
}
