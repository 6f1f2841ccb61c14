use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{assert, inspect, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the interpreter state, a slice of evaluated argument
/// values and the position of the call.
pub type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts any number of arguments, none included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Errors
    /// Returns `IncorrectArgNumber` naming `function` if it does not.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::evaluator::function::builtin::Arity;
    ///
    /// assert!(Arity::Exact(1).check("len", 1).is_ok());
    /// assert!(Arity::Exact(1).check("len", 2).is_err());
    /// assert!(Arity::Any.check("print", 0).is_ok());
    /// ```
    pub fn check(self, function: &str, got: usize) -> EvalResult<()> {
        match self {
            Self::Exact(expected) if expected != got => {
                Err(RuntimeError::IncorrectArgNumber { expected,
                                                       got,
                                                       function: function.to_string() })
            },
            _ => Ok(()),
        }
    }
}

/// Returns the only argument of a one-argument builtin.
///
/// Builtins are plain functions a host may call or register directly, so they
/// check their own arguments instead of trusting the registry.
///
/// # Errors
/// `IncorrectArgNumber` naming `function` unless exactly one argument is given.
///
/// # Example
/// ```
/// use seta::interpreter::{evaluator::function::builtin::single_argument, value::core::Value};
///
/// let args = [Value::Nil];
/// assert_eq!(single_argument("type", &args).unwrap(), &Value::Nil);
/// assert!(single_argument("type", &[]).is_err());
/// ```
pub fn single_argument<'a>(function: &str, args: &'a [Value]) -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::IncorrectArgNumber { expected: 1,
                                                    got:      args.len(),
                                                    function: function.to_string(), }),
    }
}

/// A registered builtin: its arity and its handler.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub arity: Arity,
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table the registry of a new context is built
///   from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, Builtin)] = &[
            $(
                ($name, Builtin { arity: $arity, func: $func }),
            )*
        ];
        /// Names of the builtins every new context starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"   => { arity: Arity::Any,      func: print::print },
    "println" => { arity: Arity::Any,      func: print::println },
    "len"     => { arity: Arity::Exact(1), func: inspect::len },
    "type"    => { arity: Arity::Exact(1), func: inspect::type_of },
    "str"     => { arity: Arity::Exact(1), func: inspect::render },
    "num"     => { arity: Arity::Exact(1), func: inspect::num },
    "assert"  => { arity: Arity::Exact(1), func: assert::assert_fn },
}

/// Builds the registry a new context starts with.
pub(crate) fn standard_builtins() -> HashMap<String, Builtin> {
    BUILTIN_TABLE.iter()
                 .map(|(name, builtin)| ((*name).to_string(), *builtin))
                 .collect()
}

impl Context {
    /// Registers a builtin, replacing any builtin with the same name.
    ///
    /// Builtins take priority over user functions, so a script cannot shadow
    /// one by declaring a function of the same name.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     interpret,
    ///     interpreter::{
    ///         evaluator::{core::Context, function::builtin::Arity},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut context = Context::new();
    /// context.register_builtin("double", Arity::Exact(1), |_, args, _| {
    ///            Ok(Value::Number(args[0].to_number("double")? * 2.0))
    ///        });
    ///
    /// let value = interpret("double(21)", &mut context).unwrap();
    /// assert_eq!(value, Value::Number(42.0));
    /// ```
    pub fn register_builtin(&mut self, name: &str, arity: Arity, func: BuiltinFn) {
        self.builtins.insert(name.to_string(), Builtin { arity, func });
    }

    /// Returns `true` if `name` is a registered builtin.
    #[must_use]
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }
}
