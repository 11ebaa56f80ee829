/// Operand dispatch for every binary operator.
pub mod core;

/// Integer arithmetic and comparison, and string concatenation.
pub mod scalar;

/// Identity comparison for operands that are not both integers.
pub mod comparison;
