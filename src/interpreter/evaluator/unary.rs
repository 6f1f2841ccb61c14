use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Plus`: returns the operand, which must be a number.
    /// - `Not`: boolean negation. The result is always a `Bool`.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// // Boolean not, also on numbers
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Number(0.0)).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// // Unary plus rejects non-numbers
    /// assert!(Context::eval_unary(UnaryOperator::Plus, &Value::from("5")).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let name = op.to_string();

        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.to_number(&name)?)),
            UnaryOperator::Plus => Ok(Value::Number(value.to_number(&name)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.to_bool(&name)?)),
        }
    }
}
