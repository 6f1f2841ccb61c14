/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons, strict equality and
/// the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, unary plus and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, its configuration
/// and the node dispatch.
pub mod core;

/// Variable storage.
///
/// Defines call frames and their block scopes, and the lookup, declaration
/// and assignment rules that operate on them.
pub mod scope;

/// Evaluation of blocks and conditionals.
///
/// Runs statement lists inside fresh scopes and selects the branch of an `if`.
pub mod block;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
