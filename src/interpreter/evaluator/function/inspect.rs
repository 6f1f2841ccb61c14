use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        function::builtin::single_argument,
    },
    value::core::{Value, ValueKind},
};

/// Returns the number of elements of an array, or of characters of a string.
///
/// # Errors
/// `TypeError` for any other kind of value.
///
/// # Example
/// ```
/// use seta::interpreter::{
///     evaluator::{core::Context, function::inspect::len},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
///
/// assert_eq!(len(&mut context, &[Value::from("héllo")], 0).unwrap(), Value::Number(5.0));
/// assert!(len(&mut context, &[Value::Number(5.0)], 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn len(_: &mut Context, args: &[Value], _: usize) -> EvalResult<Value> {
    match single_argument("len", args)? {
        Value::Array(items) => Ok(Value::Number(items.len() as f64)),
        Value::String(s) => Ok(Value::Number(s.chars().count() as f64)),
        other => Err(other.type_error(ValueKind::Array, "len")),
    }
}

/// Returns the kind name of a value, such as `"Number"` or `"Nil"`.
pub fn type_of(_: &mut Context, args: &[Value], _: usize) -> EvalResult<Value> {
    Ok(Value::String(single_argument("type", args)?.kind().to_string()))
}

/// Returns the rendering of a value as a string, the same text `print` writes.
///
/// # Example
/// ```
/// use seta::{
///     interpret,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let value = interpret("str([1, 2.5, \"a\"])", &mut Context::new()).unwrap();
/// assert_eq!(value, Value::from("[1, 2.5, \"a\"]"));
/// ```
pub fn render(_: &mut Context, args: &[Value], _: usize) -> EvalResult<Value> {
    Ok(Value::String(single_argument("str", args)?.to_string()))
}

/// Converts a number, or a string holding one, to a number.
///
/// Surrounding whitespace in the string is ignored.
///
/// # Errors
/// `TypeError` if the value is neither a number nor a string that parses as
/// one.
///
/// # Example
/// ```
/// use seta::interpreter::{
///     evaluator::{core::Context, function::inspect::num},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
///
/// assert_eq!(num(&mut context, &[Value::from(" 2.5 ")], 0).unwrap(), Value::Number(2.5));
/// assert!(num(&mut context, &[Value::from("two")], 0).is_err());
/// ```
pub fn num(_: &mut Context, args: &[Value], _: usize) -> EvalResult<Value> {
    let value = single_argument("num", args)?;
    match value {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::String(s) => s.trim()
                              .parse::<f64>()
                              .map(Value::Number)
                              .map_err(|_| value.type_error(ValueKind::Number, "num")),
        other => Err(other.type_error(ValueKind::Number, "num")),
    }
}
