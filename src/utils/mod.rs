pub mod bit_iter;
pub mod s_tonelli;
pub mod xgcd;
