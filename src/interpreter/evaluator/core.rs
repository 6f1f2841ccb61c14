use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::builtin::{Builtin, standard_builtins},
            scope::CallFrame,
        },
        value::{
            core::Value,
            output::{Output, StandardOutput},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on nested user function calls.
pub const MAX_CALL_DEPTH: usize = 100;

/// Tunable limits of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many user function calls may be active at once before a call fails
    /// with `RecursionTooDeep`.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: MAX_CALL_DEPTH }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the permanent global frame, the
/// stack of active call frames, the built-in function table and the sink that
/// built-ins write their output to.
///
/// ## Usage
///
/// `Context` is created once and reused for running programs. Global
/// declarations made by one run stay visible to the next.
///
/// ```
/// use seta::{
///     interpret,
///     interpreter::{
///         evaluator::core::Context,
///         value::{core::Value, output::BufferOutput},
///     },
/// };
///
/// let output = BufferOutput::new();
/// let mut context = Context::with_output(Box::new(output.clone()));
///
/// interpret("val greeting = \"hi\"", &mut context).unwrap();
/// let value = interpret("print(greeting); len(greeting)", &mut context).unwrap();
///
/// assert_eq!(value, Value::Number(2.0));
/// assert_eq!(output.contents(), "hi");
/// ```
pub struct Context {
    /// The global frame. It is never popped.
    pub(crate) global:   CallFrame,
    /// Frames of the user function calls currently executing, innermost last.
    pub(crate) frames:   Vec<CallFrame>,
    pub(crate) builtins: HashMap<String, Builtin>,
    pub(crate) output:   Box<dyn Output>,
    pub(crate) config:   Config,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that writes to standard output and uses the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(StandardOutput))
    }

    /// Creates a context that writes to `output`.
    #[must_use]
    pub fn with_output(output: Box<dyn Output>) -> Self {
        Self { global: CallFrame::default(),
               frames: Vec::new(),
               builtins: standard_builtins(),
               output,
               config: Config::default() }
    }

    /// Replaces the configuration of this context.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::evaluator::core::{Config, Context};
    ///
    /// let context = Context::new().with_config(Config { max_call_depth: 8 });
    /// assert_eq!(context.config().max_call_depth, 8);
    /// ```
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a parsed program.
    ///
    /// Top-level statements are evaluated in order directly in the global
    /// frame. The value of the last statement is returned, or `Nil` for an
    /// empty program.
    ///
    /// # Errors
    /// The first runtime error aborts the run. Frames and scopes opened while
    /// evaluating are closed before the error is returned.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let program = parse_source("val x = 2; x * 21").unwrap();
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.run(&program).unwrap(), Value::Number(42.0));
    /// ```
    pub fn run(&mut self, program: &Node) -> EvalResult<Value> {
        match program {
            Node::Program { statements, .. } => self.eval_statements(statements),
            other => self.evaluate(other),
        }
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the dispatch point of the evaluator. Statements evaluate to
    /// `Nil` unless they produce a value (blocks and conditionals yield the
    /// value of their last statement).
    ///
    /// # Errors
    /// Any of the [`RuntimeError`] kinds. A `Program` node is only valid as the
    /// root handed to [`Context::run`]; anywhere else it raises
    /// `NotImplemented`.
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Program { position, .. } => {
                Err(RuntimeError::NotImplemented { node:     node.kind_name().to_string(),
                                                   position: *position, })
            },
            Node::Compound { statements, .. } => self.eval_compound(statements),
            Node::VarDecl { name, value, .. } => {
                let value = self.evaluate(value)?;
                self.decl_var(name, value);
                Ok(Value::Nil)
            },
            Node::VarSet { name,
                           value,
                           position, } => {
                let value = self.evaluate(value)?;
                self.set_var(name, value, *position)?;
                Ok(Value::Nil)
            },
            Node::If { condition,
                       then_block,
                       elifs,
                       else_block,
                       .. } => self.eval_if(condition, then_block, elifs, else_block.as_deref()),
            Node::Function(def) => {
                self.decl_var(&def.name, Value::Function(Rc::clone(def)));
                Ok(Value::Nil)
            },
            Node::Call { name,
                         arguments,
                         position, } => self.eval_call(name, arguments, *position),
            Node::Identifier { name, position } => {
                self.find_var(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::NotFoundVar { name:     name.clone(),
                                                               position: *position, })
            },
            Node::Number { value, .. } => Ok(Value::Number(*value)),
            Node::String { value, .. } => Ok(Value::String(value.clone())),
            Node::Bool { value, .. } => Ok(Value::Bool(*value)),
            Node::Nil { .. } => Ok(Value::Nil),
            Node::Unary { op, operand, .. } => {
                let value = self.evaluate(operand)?;
                Self::eval_unary(*op, &value)
            },
            Node::Array { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.evaluate(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Node::Binary { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Evaluates statements in order in the current scope and returns the
    /// value of the last one, or `Nil` if there are none.
    pub(crate) fn eval_statements(&mut self, statements: &[Node]) -> EvalResult<Value> {
        let mut last = Value::Nil;
        for statement in statements {
            last = self.evaluate(statement)?;
        }
        Ok(last)
    }
}
