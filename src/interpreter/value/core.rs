use std::rc::Rc;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// declarations, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison, equality and logical operators.
    Bool(bool),
    /// A reference to a user-defined function.
    Function(Rc<FunctionDef>),
    /// An ordered sequence of values. Arrays are never mutated after they are
    /// built, so sharing the storage behaves like copying it.
    Array(Rc<Vec<Self>>),
    /// The absence of a value.
    Nil,
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Function`]
    Function,
    /// [`Value::Array`]
    Array,
    /// [`Value::Nil`]
    Nil,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::String => "String",
            Self::Bool => "Bool",
            Self::Function => "Function",
            Self::Array => "Array",
            Self::Nil => "Nil",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

/// Strict equality: both values must have the same kind and equal contents.
/// Functions are equal only when they refer to the same definition.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }
}

impl Value {
    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
    /// assert_eq!(Value::Nil.kind(), ValueKind::Nil);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Function(_) => ValueKind::Function,
            Self::Array(_) => ValueKind::Array,
            Self::Nil => ValueKind::Nil,
        }
    }

    /// Coerces the value to an `f64`, or returns an error if not numeric.
    ///
    /// Only `Value::Number` converts; strings are never parsed implicitly.
    ///
    /// # Parameters
    /// - `operation`: Name of the operation asking, used in the error.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(10.0).to_number("+").unwrap(), 10.0);
    /// assert!(Value::from("10").to_number("+").is_err());
    /// ```
    pub fn to_number(&self, operation: &str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.type_error(ValueKind::Number, operation)),
        }
    }

    /// Coerces the value to `bool`, or returns an error if it has no truth
    /// value.
    ///
    /// Booleans convert to themselves, numbers are true when non-zero and
    /// `nil` is false. Strings, arrays and functions are rejected.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::value::core::Value;
    ///
    /// assert!(Value::Bool(true).to_bool("if").unwrap());
    /// assert!(!Value::Number(0.0).to_bool("if").unwrap());
    /// assert!(!Value::Nil.to_bool("if").unwrap());
    /// assert!(Value::from("yes").to_bool("if").is_err());
    /// ```
    pub fn to_bool(&self, operation: &str) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(n) => Ok(*n != 0.0),
            Self::Nil => Ok(false),
            _ => Err(self.type_error(ValueKind::Bool, operation)),
        }
    }

    /// Builds the `TypeError` raised when this value cannot become `expected`.
    #[must_use]
    pub fn type_error(&self, expected: ValueKind, operation: &str) -> RuntimeError {
        RuntimeError::TypeError { expected,
                                  got: self.describe(),
                                  operation: operation.to_string() }
    }

    /// Rendering used in diagnostics: strings are quoted, everything else is
    /// shown as by [`Display`](std::fmt::Display).
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::String(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(def) => write!(f, "<fn {}>", def.name),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}", value.describe())?;
                }

                write!(f, "]")
            },
            Self::Nil => write!(f, "nil"),
        }
    }
}
