use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

// unsigned remainders, signed Bezout coefficients - no overflow near the modulus
// source - https://jeffhurchalla.com/2018/10/13/implementing-the-extended-euclidean-algorithm-with-unsigned-inputs/
/// Returns `(x, y, g)` such that `a * x + b * y = g = gcd(a, b)`.
pub fn u_xgcd (a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigUint) {
  let mut r = (a.clone(), b.clone());
  let mut s = (BigInt::one(), BigInt::zero());
  let mut t = (BigInt::zero(), BigInt::one());

  while !r.1.is_zero() {
    let q = &r.0 / &r.1;
    let rem = &r.0 - &q * &r.1;
    let q = BigInt::from(q);

    let s_next = &s.0 - &q * &s.1;
    let t_next = &t.0 - &q * &t.1;

    r = (r.1, rem);
    s = (s.1, s_next);
    t = (t.1, t_next);
  }

  (s.0, t.0, r.0)
}
