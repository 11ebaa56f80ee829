use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a binary operator on two integers.
    ///
    /// Arithmetic wraps on overflow. Division truncates toward zero.
    ///
    /// # Errors
    /// `DivisionByZero` when dividing by `0`.
    pub(in crate::interpreter::evaluator) fn eval_integer_infix(operator: InfixOperator,
                                                                left: i64,
                                                                right: i64)
                                                                -> Result<Value, RuntimeError> {
        use InfixOperator::{Asterisk, Eq, Gt, Lt, Minus, NotEq, Plus, Slash};

        let value = match operator {
            Plus => Value::Integer(left.wrapping_add(right)),
            Minus => Value::Integer(left.wrapping_sub(right)),
            Asterisk => Value::Integer(left.wrapping_mul(right)),
            Slash => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Value::Integer(left.wrapping_div(right))
            },
            Lt => Value::Boolean(left < right),
            Gt => Value::Boolean(left > right),
            Eq => Value::Boolean(left == right),
            NotEq => Value::Boolean(left != right),
        };
        Ok(value)
    }

    /// Evaluates a binary operator on two strings. `+` is the only operator
    /// strings support; it concatenates. `==` and `!=` never get here, they
    /// compare strings by identity like every other non-integer value.
    ///
    /// # Errors
    /// `UnknownInfixOperator` for any other operator.
    pub(in crate::interpreter::evaluator) fn eval_string_infix(operator: InfixOperator,
                                                               left: &str,
                                                               right: &str)
                                                               -> Result<Value, RuntimeError> {
        match operator {
            InfixOperator::Plus => Ok(Value::from([left, right].concat())),
            _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                          operator,
                                                          right: "STRING" }),
        }
    }
}
