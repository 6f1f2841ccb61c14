use crate::{
    ast::{ElifBranch, Node},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a block in a fresh scope.
    ///
    /// The scope is pushed before the first statement and popped after the
    /// last one, or as soon as a statement fails. Declarations made inside the
    /// block are therefore gone once it is left.
    ///
    /// # Returns
    /// The value of the last statement, or `Nil` for an empty block.
    pub fn eval_compound(&mut self, statements: &[Node]) -> EvalResult<Value> {
        self.push_scope();
        let result = self.eval_statements(statements);
        self.pop_scope();
        result
    }

    /// Evaluates a conditional.
    ///
    /// The condition is coerced to `Bool`. If it is false, each `elif`
    /// condition is tried in source order and the first true one selects its
    /// block. If none match, the `else` block runs when present.
    ///
    /// # Returns
    /// The value of the selected block, or `Nil` if no block ran.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     interpret,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let source = "val n = 2
    ///               if n == 1 -> \"one\" . elif n == 2 -> \"two\" . else -> \"many\" .";
    /// let value = interpret(source, &mut Context::new()).unwrap();
    ///
    /// assert_eq!(value, Value::from("two"));
    /// ```
    pub fn eval_if(&mut self,
                   condition: &Node,
                   then_block: &Node,
                   elifs: &[ElifBranch],
                   else_block: Option<&Node>)
                   -> EvalResult<Value> {
        if self.evaluate(condition)?.to_bool("if")? {
            return self.evaluate(then_block);
        }

        for branch in elifs {
            if self.evaluate(&branch.condition)?.to_bool("elif")? {
                return self.evaluate(&branch.block);
            }
        }

        match else_block {
            Some(block) => self.evaluate(block),
            None => Ok(Value::Nil),
        }
    }
}
