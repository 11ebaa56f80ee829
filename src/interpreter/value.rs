/// The `Value` enum and its behavior.
///
/// Defines every runtime value the evaluator produces, their type names,
/// truthiness, identity comparison and display form.
pub mod core;

/// Closures.
///
/// A function value pairs a function literal with the environment it was
/// created in.
pub mod function;
