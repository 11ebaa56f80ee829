use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `!`: the complement of the operand's truthiness. Defined for every
    ///   value, so `!5` is `false` and `!!null` is `false`.
    /// - `-`: integer negation, wrapping at the `i64` boundary.
    ///
    /// # Example
    /// ```
    /// use tlang::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Minus, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Bang, &Value::Null).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    ///
    /// # Errors
    /// `UnknownPrefixOperator` when `-` is applied to anything but an integer.
    pub fn eval_prefix(operator: PrefixOperator, operand: &Value) -> Result<Value, RuntimeError> {
        match operator {
            PrefixOperator::Bang => Ok(Value::Boolean(!operand.is_truthy())),
            PrefixOperator::Minus => match operand {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                                operand: operand.type_name() }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bang_negates_truthiness() {
        let cases = [(Value::Boolean(true), false),
                     (Value::Boolean(false), true),
                     (Value::Integer(5), false),
                     (Value::Integer(0), false),
                     (Value::Null, true),
                     (Value::from("text"), false)];

        for (operand, expected) in cases {
            assert_eq!(Context::eval_prefix(PrefixOperator::Bang, &operand),
                       Ok(Value::Boolean(expected)),
                       "operand: {operand}");
        }
    }

    #[test]
    fn minus_negates_integers() {
        assert_eq!(Context::eval_prefix(PrefixOperator::Minus, &Value::Integer(10)),
                   Ok(Value::Integer(-10)));
        assert_eq!(Context::eval_prefix(PrefixOperator::Minus, &Value::Integer(i64::MIN)),
                   Ok(Value::Integer(i64::MIN)));
    }

    #[test]
    fn minus_rejects_other_types() {
        let error = Context::eval_prefix(PrefixOperator::Minus, &Value::Boolean(true)).unwrap_err();
        assert_eq!(error.to_string(), "unknown operator: -BOOLEAN");

        let error = Context::eval_prefix(PrefixOperator::Minus, &Value::from("a")).unwrap_err();
        assert_eq!(error.to_string(), "unknown operator: -STRING");
    }
}
