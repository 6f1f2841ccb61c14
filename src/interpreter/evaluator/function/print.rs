use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Writes the arguments to the context's output, separated by spaces, without
/// a trailing newline.
///
/// Accepts any number of arguments. Each value is formatted using its
/// `Display` implementation, so strings are written without quotes.
///
/// # Parameters
/// - `context`: Interpreter state holding the output sink.
/// - `args`: Values to write.
/// - `position`: Position of the call for error reporting.
///
/// # Returns
/// `Value::Nil`.
///
/// # Example
/// ```
/// use seta::interpreter::{
///     evaluator::{core::Context, function::print::print},
///     value::{core::Value, output::BufferOutput},
/// };
///
/// let output = BufferOutput::new();
/// let mut context = Context::with_output(Box::new(output.clone()));
///
/// let result = print(&mut context, &[Value::from("x ="), Value::Number(42.0)], 0).unwrap();
///
/// assert_eq!(result, Value::Nil);
/// assert_eq!(output.contents(), "x = 42");
/// ```
pub fn print(context: &mut Context, args: &[Value], position: usize) -> EvalResult<Value> {
    write_joined(context, args, "", position)
}

/// Same as [`print`], followed by a newline.
pub fn println(context: &mut Context, args: &[Value], position: usize) -> EvalResult<Value> {
    write_joined(context, args, "\n", position)
}

fn write_joined(context: &mut Context,
                args: &[Value],
                terminator: &str,
                position: usize)
                -> EvalResult<Value> {
    let mut text = args.iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(" ");
    text.push_str(terminator);

    context.output
           .write_str(&text)
           .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                               position })?;
    Ok(Value::Nil)
}
