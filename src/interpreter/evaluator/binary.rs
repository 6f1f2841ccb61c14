/// Dispatch of binary operations, including the short-circuiting logical
/// operators.
pub mod core;
/// Arithmetic and string concatenation.
pub mod arithmetic;
/// Ordering comparisons and strict equality.
pub mod comparison;
