use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates when both operands are strings. In every other case
    /// both operands are coerced to numbers first, so `"a" + 1` is a type
    /// error rather than a concatenation. Division is real division.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Pow`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `right_position`: Source position of the right operand.
    ///
    /// # Errors
    /// - `TypeError` if an operand is not a number.
    /// - `DivisionByZero` if the right operand of `/` is zero.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                       &Value::from("a"),
    ///                                       &Value::from("b"),
    ///                                       0).unwrap();
    /// assert_eq!(joined, Value::from("ab"));
    ///
    /// let half = Context::eval_arithmetic(BinaryOperator::Div,
    ///                                     &Value::Number(7.0),
    ///                                     &Value::Number(2.0),
    ///                                     0).unwrap();
    /// assert_eq!(half, Value::Number(3.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           right_position: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        if op == Add
           && let (Value::String(a), Value::String(b)) = (left, right)
        {
            return Ok(Value::String(format!("{a}{b}")));
        }

        let name = op.to_string();
        let l = left.to_number(&name)?;
        let r = right.to_number(&name)?;

        let result = match op {
            Add => l + r,
            Sub => l - r,
            Mul => l * r,
            Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position: right_position });
                }
                l / r
            },
            Pow => l.powf(r),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
        };

        Ok(Value::Number(result))
    }
}
