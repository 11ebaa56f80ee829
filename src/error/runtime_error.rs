use crate::ast::{InfixOperator, PrefixOperator};

/// Represents all errors that can occur during evaluation.
///
/// Operand types are carried as their upper-case type names (`INTEGER`,
/// `BOOLEAN`, ...) so messages read the same way the values are described to
/// users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A binary operator was applied to operands of different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    &'static str,
    },
    /// A prefix operator is not defined for the operand's type.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  &'static str,
    },
    /// A binary operator is not defined for this pair of types.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    &'static str,
    },
    /// A name was read that is not bound in any enclosing scope.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name.
        name: String,
    },
    /// A name was assigned without having been declared with `let`.
    #[error("unknown identifier: {name}")]
    UnknownIdentifier {
        /// The name.
        name: String,
    },
    /// Something other than a function was called.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Type of the called value.
        kind: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    #[error("wrong number of arguments: expected {expected}, got {found}")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
