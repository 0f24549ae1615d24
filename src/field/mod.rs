pub mod arithmetic;
#[allow(clippy::module_inception)]
pub mod field;
pub mod field_element;
