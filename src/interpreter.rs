/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages call frames and block scopes for variables and functions.
/// - Handles control flow and both user-defined and built-in calls.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, value and
///   source position.
/// - Handles numeric and string literals, identifiers, keywords and operators.
/// - Reports lexical errors such as unterminated strings or unknown input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports declarations, assignments, conditionals, blocks, functions and
///   calls.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during interpretation: numbers,
/// strings, booleans, arrays, functions and nil. It also provides the
/// coercions operations rely on and the output sinks built-ins write to.
///
/// # Responsibilities
/// - Defines the `Value` enum and its kind tags.
/// - Implements coercion to numbers and booleans with typed failures.
/// - Defines the `Output` abstraction and its implementations.
pub mod value;
