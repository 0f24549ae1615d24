pub mod context;
pub mod point;
pub mod projective;
pub mod weierstrass;
