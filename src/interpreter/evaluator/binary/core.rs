use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Operands are routed by their types, in this order:
    /// 1. two integers: arithmetic and comparison,
    /// 2. two strings with any operator but `==` / `!=`: concatenation,
    /// 3. `==` / `!=` on anything else, strings included: identity comparison,
    /// 4. operands of different types: a type mismatch,
    /// 5. anything left: an unknown operator for that type.
    ///
    /// # Example
    /// ```
    /// use tlang::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_infix(InfixOperator::Plus, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(sum, Ok(Value::Integer(7)));
    ///
    /// let error = Context::eval_infix(InfixOperator::Plus, &Value::Integer(5), &Value::Boolean(true));
    /// assert_eq!(error.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    ///
    /// # Errors
    /// `DivisionByZero`, `TypeMismatch` or `UnknownInfixOperator`.
    pub fn eval_infix(operator: InfixOperator,
                      left: &Value,
                      right: &Value)
                      -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_infix(operator, *a, *b),
            (Value::String(a), Value::String(b))
                if !matches!(operator, InfixOperator::Eq | InfixOperator::NotEq) =>
            {
                Self::eval_string_infix(operator, a, b)
            },
            _ => match operator {
                InfixOperator::Eq | InfixOperator::NotEq => {
                    Ok(Self::eval_identity(operator, left, right))
                },
                _ if left.type_name() != right.type_name() => {
                    Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                     operator,
                                                     right: right.type_name() })
                },
                _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                              operator,
                                                              right: right.type_name() }),
            },
        }
    }
}
