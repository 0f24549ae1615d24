//! Point arithmetic on elliptic curves `y^2 = x^3 + ax + b` over `Z/pZ`.
//!
//! ```
//! use elliptic::{CurveContext, CurvePoint};
//!
//! let ctx = CurveContext::new(7, 2, 1).unwrap();
//! let p = CurvePoint::from_affine(1, 2, &ctx).unwrap();
//! let q = (&(&p * 18).unwrap() + &p).unwrap();
//! assert_eq!(q.to_string(), "(1, 5)");
//! ```

pub mod curves;
pub mod error;
pub mod field;
pub mod utils;

pub use curves::context::{Curve, CurveContext};
pub use curves::point::Point;
pub use curves::projective::ProjectivePoint;
pub use curves::weierstrass::CurvePoint;
pub use error::{EllipticError, Result};
pub use field::arithmetic::{divide, expo, inverse};
pub use field::field::Field;
