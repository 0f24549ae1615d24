use std::fmt::{Display, Formatter};
use num_bigint::{BigInt, BigUint};
use crate::field::field::Field;

/// Raw coordinate triple in `Z/pZ`, compared component-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    field: Field,
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Point {
    pub fn new(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
        field: &Field,
    ) -> Self {
        Self {
            x: field.reduce(&x.into()),
            y: field.reduce(&y.into()),
            z: field.reduce(&z.into()),
            field: field.clone(),
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn z(&self) -> &BigUint {
        &self.z
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
