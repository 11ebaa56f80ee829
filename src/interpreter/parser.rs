/// Parser state, the precedence ladder and the Pratt expression loop.
///
/// Contains the [`core::Parser`] itself, program-level parsing and the
/// handler lookup that drives operator-precedence parsing.
pub mod core;

/// Prefix handlers.
///
/// Everything that can start an expression: literals, identifiers, unary
/// operators, grouping, `if`, `while`, `fn` and `println`.
pub mod unary;

/// Infix handlers.
///
/// Binary operators and call expressions, which extend an already parsed
/// left-hand expression.
pub mod binary;

/// Statement parsing.
///
/// `let`, `return`, assignments, expression statements and blocks.
pub mod statement;

/// Token-window helpers shared by the handlers.
pub mod utils;
