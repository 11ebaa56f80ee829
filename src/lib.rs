//! # tlang
//!
//! tlang is an interpreter for T, a small dynamically typed scripting language
//! written in Rust. It tokenizes, parses and evaluates programs with integers,
//! booleans, strings, first-class closures, `if`/`else if` chains, `while`
//! loops and a `println` built-in.

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
    ast::Program,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::Lexer,
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator, and prints back to canonical source
/// through `Display`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse diagnostics and runtime errors are separate enums; [`Error`] wraps
/// both for callers that run a program from start to finish.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scopes.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, evaluates it against a session-wide scope and
/// writes results back.
pub mod repl;
/// General utilities.
///
/// Helpers that are used by more than one phase, such as stack growth for
/// deeply nested input.
pub mod util;

pub use error::Error;

/// Parses `source` into a program and its diagnostics.
///
/// The diagnostics are rendered to their messages. When the list is not
/// empty the program is incomplete and must not be evaluated.
///
/// # Examples
/// ```
/// let (program, errors) = tlang::parse("let x = 1 + 2 * 3;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
///
/// let (_, errors) = tlang::parse("let = 5;");
/// assert_eq!(errors[0], "expected next token to be IDENT, but got =");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(ToString::to_string).collect();
    (program, errors)
}

/// Parses and runs a complete program, returning every line it printed.
///
/// The program runs against a fresh top-level scope.
///
/// # Errors
/// [`Error::Parse`] with every diagnostic if the source does not parse, or
/// [`Error::Runtime`] with the first runtime error.
///
/// # Examples
/// ```
/// use tlang::get_result;
///
/// let output = get_result("let x = 2; println(\"x is \", x * 21);").unwrap();
/// assert_eq!(output, vec!["x is 42"]);
///
/// // 'y' is not defined
/// let error = get_result("let x = y + 1;").unwrap_err();
/// assert_eq!(error.to_string(), "identifier not found: y");
/// ```
pub fn get_result(source: &str) -> Result<Vec<String>, Error> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    if !parser.errors().is_empty() {
        return Err(Error::Parse(parser.into_errors()));
    }

    let mut context = Context::new();
    context.try_eval_program(&program, &Environment::new_root())?;
    Ok(context.take_output())
}
