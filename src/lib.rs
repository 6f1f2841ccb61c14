//! # seta
//!
//! seta is a small scripting language with a tree-walking interpreter written
//! in Rust. It parses source text into a syntax tree and evaluates it with
//! call frames and block scopes, supporting numbers, strings, booleans,
//! arrays, conditionals, user-defined functions and a handful of built-ins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::Tokenizer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator, which never modifies it.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Shares function definitions between the tree and runtime values.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing, parsing
/// or evaluating code. Each error carries the information needed to explain
/// the failure and, where it has one, the source position it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by the interpreter and its hosts.
///
/// # Responsibilities
/// - Convert byte offsets into line and column numbers.
/// - Render errors as user-facing diagnostics.
pub mod util;

/// Parses source text into a `Program` node.
///
/// # Errors
/// Returns the first tokenizer or syntax error encountered.
///
/// # Examples
/// ```
/// use seta::{ast::Node, parse_source};
///
/// let program = parse_source("fn twice(x) -> x * 2 . twice(4)").unwrap();
/// assert!(matches!(program, Node::Program { ref statements, .. } if statements.len() == 2));
///
/// assert!(parse_source("val = 3").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Node, ParseError> {
    Parser::new(Tokenizer::new(source))?.parse()
}

/// Parses and runs `source` in `context`, returning the value of its last
/// statement.
///
/// Declarations made by the program stay in `context`, so several sources can
/// be run one after another against the same state.
///
/// # Errors
/// Returns [`Error::Parse`] if the source does not parse, in which case nothing
/// is evaluated, or [`Error::Runtime`] for the first evaluation failure.
///
/// # Examples
/// ```
/// use seta::{
///     error::{Error, RuntimeError},
///     interpret,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::new();
///
/// assert_eq!(interpret("1 + 2 * 3", &mut context).unwrap(), Value::Number(7.0));
/// assert!(matches!(interpret("5 / 0", &mut context),
///                  Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
/// ```
pub fn interpret(source: &str, context: &mut Context) -> Result<Value, Error> {
    let program = parse_source(source)?;
    Ok(context.run(&program)?)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string in a fresh context that writes to standard output. If execution
/// succeeds, it returns `Ok(())`; otherwise, it returns an error describing
/// the failure together with its line and column.
///
/// In pipe mode (`auto_print`), the value of the last statement is printed
/// unless it is `nil`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use seta::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "val result = 2 + 2";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "val y = x + 1"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert_eq!(res.unwrap_err().to_string(),
///            "Error at line 1, column 9: Unknown variable 'x'.");
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    run_in(source, &mut Context::new(), auto_print)
}

/// Same as [`get_result`], but runs in the given context.
///
/// Used by the command line to apply its configuration.
pub fn run_in(source: &str,
              context: &mut Context,
              auto_print: bool)
              -> Result<(), Box<dyn std::error::Error>> {
    match interpret(source, context) {
        Ok(value) => {
            if auto_print && value != Value::Nil {
                println!("{value}");
            }
            Ok(())
        },
        Err(e) => Err(util::source::describe(source, e.position(), &e.to_string()).into()),
    }
}
