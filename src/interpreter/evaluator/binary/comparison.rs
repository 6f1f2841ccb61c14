use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an ordering comparison of the form `Value <Operator> Value`.
    ///
    /// Both operands are coerced to numbers; strings are not ordered.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};

        let name = op.to_string();
        let l = left.to_number(&name)?;
        let r = right.to_number(&name)?;

        Ok(Value::Bool(match op {
                           Less => l < r,
                           Greater => l > r,
                           LessEqual => l <= r,
                           GreaterEqual => l >= r,
                           _ => unreachable!("eval_comparison used with non ordering operator"),
                       }))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Equality is strict: values of different kinds are never equal, so
    /// `1 == "1"` is `false`.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let one = Value::Number(1.0);
    ///
    /// assert_eq!(Context::eval_equality(BinaryOperator::Equal, &one, &Value::from("1")),
    ///            Value::Bool(false));
    /// assert_eq!(Context::eval_equality(BinaryOperator::NotEqual, &one, &Value::Number(2.0)),
    ///            Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let equal = left == right;
        Value::Bool(if op == BinaryOperator::NotEqual { !equal } else { equal })
    }
}
