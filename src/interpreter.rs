/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// identifiers, keywords, integer and string literals, operators and
/// delimiters. Characters it does not recognize become `ILLEGAL` tokens and
/// are reported by the parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser that turns the token stream into a [`crate::ast::Program`],
/// collecting diagnostics instead of stopping at the first one.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// A tree-walking evaluator over [`environment::Environment`] frames. It
/// performs arithmetic and comparisons, calls closures, runs loops, collects
/// `println` output and reports runtime errors.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans, strings, null, closures and error values, with their
/// type names, truthiness and display forms.
pub mod value;
/// Lexical scope frames.
///
/// Each frame maps names to values and links to the frame it is nested in.
/// Frames are shared by reference so closures can keep their defining scope
/// alive.
pub mod environment;
