/// Parsing errors.
///
/// Diagnostics produced while turning tokens into a syntax tree. The parser
/// collects them instead of stopping at the first one.
pub mod parse_error;
/// Runtime errors.
///
/// Failures raised while evaluating a program: type mismatches, unknown
/// operators, unbound names, calls to non-functions, bad argument counts and
/// division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run, as reported by the drivers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source did not parse. Holds every collected diagnostic.
    #[error("{}", join_lines(.0))]
    Parse(Vec<ParseError>),
    /// Evaluation stopped on a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn join_lines(errors: &[ParseError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
