use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin::single_argument,
        },
        value::core::Value,
    },
};

/// Fails the run unless the argument is true.
///
/// The argument is coerced to `Bool`, so `0` and `nil` fail as well.
///
/// # Errors
/// - `AssertionFailed` carrying the position of the call.
/// - `TypeError` if the argument has no truth value.
///
/// # Example
/// ```
/// use seta::interpreter::{
///     evaluator::{core::Context, function::assert::assert_fn},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
///
/// assert_eq!(assert_fn(&mut context, &[Value::Bool(true)], 0).unwrap(), Value::Bool(true));
/// assert!(assert_fn(&mut context, &[Value::Number(0.0)], 0).is_err());
/// ```
pub fn assert_fn(_: &mut Context, args: &[Value], position: usize) -> EvalResult<Value> {
    if single_argument("assert", args)?.to_bool("assert")? {
        Ok(Value::Bool(true))
    } else {
        Err(RuntimeError::AssertionFailed { position })
    }
}
