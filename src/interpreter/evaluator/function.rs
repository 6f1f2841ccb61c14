/// The built-in function registry.
///
/// Declares the standard built-ins with their arities and lets hosts register
/// their own.
pub mod builtin;
/// Function call evaluation.
///
/// Resolves the callee, checks arguments and runs user functions in their own
/// call frame.
pub mod core;
/// The `print` and `println` functions.
///
/// Write the rendering of their arguments to the context's output.
pub mod print;
/// The `len`, `type`, `str` and `num` functions.
pub mod inspect;
/// The `assert` function.
pub mod assert;
