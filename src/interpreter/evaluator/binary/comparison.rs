use crate::{
    ast::InfixOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// `==` and `!=` by identity. Called only with one of those two
    /// operators; any other operator is treated as `==`.
    pub(in crate::interpreter::evaluator) fn eval_identity(operator: InfixOperator,
                                                           left: &Value,
                                                           right: &Value)
                                                           -> Value {
        let identical = left.is_identical(right);
        Value::Boolean(if operator == InfixOperator::NotEq { !identical } else { identical })
    }
}
