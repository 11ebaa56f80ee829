/// Calls of user-defined functions.
///
/// Evaluates the callee and arguments, checks them, binds parameters and runs
/// the body.
pub mod core;

/// The built-in `println`.
///
/// Renders its arguments and appends the line to the context's output log.
pub mod print;
