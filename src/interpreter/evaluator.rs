/// Core evaluation logic and context management.
///
/// Contains the [`core::Context`] that owns the output log, expression and
/// statement dispatch, blocks, and the program entry points.
pub mod core;

/// Unary operator evaluation logic.
///
/// Arithmetic negation of integers and logical negation of any value.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Integer arithmetic and comparison, string concatenation, and
/// the identity comparison used for every other pair of operands.
pub mod binary;

/// Evaluation of `while` loops.
pub mod while_loop;

/// Function evaluation.
///
/// Closure calls and the built-in `println`.
pub mod function;

/// Utility functions for evaluation.
///
/// Name resolution, conditionals and argument lists.
pub mod utils;
