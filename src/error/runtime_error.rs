use crate::interpreter::value::core::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A node reached the evaluator in a position where it has no evaluation
    /// rule.
    NotImplemented {
        /// Short description of the node.
        node:     String,
        /// Byte offset of the node.
        position: usize,
    },
    /// The right operand of `/` was zero.
    DivisionByZero {
        /// Byte offset of the right operand.
        position: usize,
    },
    /// A value could not be coerced to the type an operation needs.
    TypeError {
        /// The kind the operation required.
        expected:  ValueKind,
        /// Rendering of the value that was found.
        got:       String,
        /// The operation that attempted the coercion.
        operation: String,
    },
    /// A call site passed the wrong number of arguments.
    IncorrectArgNumber {
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments supplied.
        got:      usize,
        /// The called function.
        function: String,
    },
    /// Read of, or assignment to, a variable that was never declared.
    NotFoundVar {
        /// The variable name.
        name:     String,
        /// Byte offset of the reference.
        position: usize,
    },
    /// Call to a name that is neither a built-in nor a declared function.
    NotFoundFunction {
        /// The called name.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// The call target resolved to a value that is not a function.
    NotAFunction {
        /// Rendering of the value found under the called name.
        value:    String,
        /// Byte offset of the call.
        position: usize,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionTooDeep {
        /// The configured maximum call depth.
        limit:    usize,
        /// Byte offset of the call that exceeded it.
        position: usize,
    },
    /// An `assert` built-in received a false condition.
    AssertionFailed {
        /// Byte offset of the call.
        position: usize,
    },
    /// The output sink refused a write.
    Output {
        /// Description of the underlying I/O failure.
        details:  String,
        /// Byte offset of the call that wrote.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source the error refers to.
    ///
    /// Coercion and arity errors describe values rather than places, so they
    /// have none.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::NotImplemented { position, .. }
            | Self::DivisionByZero { position }
            | Self::NotFoundVar { position, .. }
            | Self::NotFoundFunction { position, .. }
            | Self::NotAFunction { position, .. }
            | Self::RecursionTooDeep { position, .. }
            | Self::AssertionFailed { position }
            | Self::Output { position, .. } => Some(*position),
            Self::TypeError { .. } | Self::IncorrectArgNumber { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotImplemented { node, .. } => write!(f, "Cannot evaluate {node} here."),
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::TypeError { expected,
                              got,
                              operation, } => {
                write!(f, "Type error: '{operation}' expected {expected}, found {got}.")
            },
            Self::IncorrectArgNumber { expected,
                                       got,
                                       function, } => write!(f,
                                                             "Function '{function}' expects {expected} argument(s), but {got} were given."),
            Self::NotFoundVar { name, .. } => write!(f, "Unknown variable '{name}'."),
            Self::NotFoundFunction { name, .. } => write!(f, "Unknown function '{name}'."),
            Self::NotAFunction { value, .. } => write!(f, "{value} is not a function."),
            Self::RecursionTooDeep { limit, .. } => {
                write!(f, "Recursion too deep: more than {limit} nested calls.")
            },
            Self::AssertionFailed { .. } => write!(f, "Assertion failed."),
            Self::Output { details, .. } => write!(f, "Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
