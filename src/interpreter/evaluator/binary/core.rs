use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operator node.
    ///
    /// `and` and `or` evaluate their right operand only when the left one does
    /// not already decide the result. Every other operator evaluates the left
    /// operand, then the right one, and hands both values to
    /// [`Context::eval_binary`].
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node)
                                 -> EvalResult<Value> {
        match op {
            BinaryOperator::And | BinaryOperator::Or => self.eval_logic(op, left, right),
            _ => {
                let left_value = self.evaluate(left)?;
                let right_value = self.evaluate(right)?;
                Self::eval_binary(op, &left_value, &right_value, right.position())
            },
        }
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, ordering operators to
    /// `eval_comparison` and equality operators to `eval_equality`. The logical
    /// operators coerce both values to `Bool`; use [`Context::evaluate`] on a
    /// node to get their short-circuiting behaviour.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `right_position`: Source position of the right operand, reported by
    ///   `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 0);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       right_position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Pow => {
                Self::eval_arithmetic(op, left, right, right_position)
            },
            Less | Greater | LessEqual | GreaterEqual => Self::eval_comparison(op, left, right),
            Equal | NotEqual => Ok(Self::eval_equality(op, left, right)),
            And => Ok(Value::Bool(left.to_bool("and")? && right.to_bool("and")?)),
            Or => Ok(Value::Bool(left.to_bool("or")? || right.to_bool("or")?)),
        }
    }

    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is coerced to `Bool`. If it decides the result (`false`
    /// for `and`, `true` for `or`) the right operand is never evaluated.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     interpret,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // `missing` is never looked up.
    /// let value = interpret("false and missing", &mut Context::new()).unwrap();
    /// assert_eq!(value, Value::Bool(false));
    /// ```
    fn eval_logic(&mut self, op: BinaryOperator, left: &Node, right: &Node) -> EvalResult<Value> {
        let name = op.to_string();
        let left = self.evaluate(left)?.to_bool(&name)?;

        let decided = match op {
            BinaryOperator::And => !left,
            _ => left,
        };
        if decided {
            return Ok(Value::Bool(left));
        }

        Ok(Value::Bool(self.evaluate(right)?.to_bool(&name)?))
    }
}
