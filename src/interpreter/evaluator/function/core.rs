use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::CallFrame,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it evaluates the arguments, verifies arity and executes the
    /// builtin. Otherwise the name must resolve to a user function.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions, evaluated left to right in the
    ///   caller's frame.
    /// - `position`: Position of the call for error reporting.
    ///
    /// # Errors
    /// - `NotFoundFunction` if the name resolves to nothing.
    /// - `NotAFunction` if it resolves to a value of another kind.
    /// - `IncorrectArgNumber` if the argument count does not match.
    /// - Any error raised while evaluating the arguments or the body.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Node],
                            position: usize)
                            -> EvalResult<Value> {
        if let Some(builtin) = self.builtins.get(name).copied() {
            let args = self.eval_arguments(arguments)?;
            builtin.arity.check(name, args.len())?;
            return (builtin.func)(self, &args, position);
        }

        let def = match self.find_var(name) {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(other) => {
                return Err(RuntimeError::NotAFunction { value: other.describe(),
                                                        position });
            },
            None => {
                return Err(RuntimeError::NotFoundFunction { name: name.to_string(),
                                                            position });
            },
        };

        let args = self.eval_arguments(arguments)?;
        self.call_function(&def, args, position)
    }

    /// Executes a user-defined function with already evaluated arguments.
    ///
    /// A new call frame is pushed with each parameter declared in its base
    /// scope, holding the corresponding argument. The body runs directly in
    /// that scope and sees only its own frame and the global frame. The frame
    /// is popped whether the body succeeds or fails.
    ///
    /// # Errors
    /// - `IncorrectArgNumber` if `args` does not match the parameter list.
    /// - `RecursionTooDeep` if the call would exceed the configured depth.
    /// - Any error raised by the body.
    ///
    /// # Returns
    /// The value of the last statement of the body, or `Nil`.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let Node::Program { statements, .. } = parse_source("fn add(a, b) -> a + b .").unwrap() else {
    ///     unreachable!()
    /// };
    /// let Node::Function(add) = &statements[0] else { unreachable!() };
    ///
    /// let mut context = Context::new();
    /// let sum = context.call_function(add, vec![Value::Number(1.0), Value::Number(2.0)], 0).unwrap();
    ///
    /// assert_eq!(sum, Value::Number(3.0));
    /// assert!(context.call_function(add, vec![Value::Number(1.0)], 0).is_err());
    /// ```
    pub fn call_function(&mut self,
                         def: &FunctionDef,
                         args: Vec<Value>,
                         position: usize)
                         -> EvalResult<Value> {
        if args.len() != def.params.len() {
            return Err(RuntimeError::IncorrectArgNumber { expected: def.params.len(),
                                                          got:      args.len(),
                                                          function: def.name.clone(), });
        }

        let limit = self.config.max_call_depth;
        if self.frames.len() >= limit {
            return Err(RuntimeError::RecursionTooDeep { limit, position });
        }

        self.push_frame(CallFrame::with_bindings(def.params.iter().cloned().zip(args)));
        let result = self.eval_statements(&def.body);
        self.pop_frame();
        result
    }

    /// Evaluates argument expressions left to right.
    fn eval_arguments(&mut self, arguments: &[Node]) -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.evaluate(argument))
                 .collect()
    }
}
