use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use crate::field::field_element::FieldElement;

/// Tonelli-Shanks algorithm
/// Find `r` for given quadratic residue `x`, such that `r^2 = x mod p`, where p is prime
/// According to Euler's criterion, in such field root exists iff `x^{(p-1)/2} = 1 mod p`
pub fn tonelli_shanks<'a>(x: &FieldElement<'a>) -> Option<(FieldElement<'a>, FieldElement<'a>)> {
    let field = x.field;
    let p = field.order();
    let one = field.one();
    let one_inv = -one.clone(); // p - 1

    if x.is_zero() || p == &BigUint::from(2_u8) {
        return Some((x.clone(), x.clone()));
    }

    let half = (p - 1_u32) >> 1_u32;
    if x.pow(half.clone()) != one {
        return None;
    }

    let mut q = p - 1_u32;
    let mut ss: u64 = 0;
    while q.is_even() {
        ss += 1;
        q >>= 1_u32;
    }

    if ss == 1 {
        let r1 = x.pow((p + 1_u32) >> 2_u32);
        return Some((r1.clone(), -r1));
    }

    // any non-residue; composite moduli may have none
    let mut z = field.get(2);
    while z.pow(half.clone()) != one_inv {
        z = z + one.clone();
        if z.is_zero() {
            return None;
        }
    }

    let mut c = z.pow(q.clone());
    let mut r = x.pow((&q + 1_u32) >> 1_u32);
    let mut t = x.pow(q);
    let mut m = ss;

    loop {
        if t.value.is_one() {
            return Some((r.clone(), -r));
        }
        let mut i = 0;
        let mut zz = t.clone();
        while !zz.value.is_one() {
            zz = zz.clone() * zz;
            i += 1;
            if i == m {
                return None;
            }
        }
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.clone() * b;
        }
        c = b.clone() * b.clone();
        t = t * c.clone();
        r = r * b;
        m = i;
    }
}

#[cfg(test)]
mod tests {
    use crate::field::field::Field;
    use super::*;

    #[test]
    fn test () {
        fn run (p: u64, n: u64, r: Option<(u64, u64)>) {
            let field = Field::new(p).unwrap();
            assert_eq!(
                tonelli_shanks(&field.get(n)),
                r.map(|(r1, r2)| (field.get(r1), field.get(r2)))
            )
        }

        run(13, 10, Some((7, 6)));
        run(101, 56, Some((37, 64)));
        run(10009, 1030, Some((1632, 8377)));
        run(100049, 44402, Some((30468, 69581)));
        run(1000000009, 665820697, Some((378633312, 621366697)));
        run(1000000000039, 881398088036, Some((791399408049, 208600591990)));
    }

    #[test]
    fn non_residue () {
        let field = Field::new(13).unwrap();
        assert_eq!(tonelli_shanks(&field.get(5)), None);
        let field = Field::new(7).unwrap();
        assert_eq!(tonelli_shanks(&field.get(3)), None);
    }

    #[test]
    fn zero () {
        let field = Field::new(13).unwrap();
        assert_eq!(tonelli_shanks(&field.get(0)), Some((field.get(0), field.get(0))));
    }
}
