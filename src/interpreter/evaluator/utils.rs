use crate::{
    ast::{ElseBranch, Expr, IfExpression},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Resolves a name through the chain of frames starting at `env`.
    ///
    /// # Errors
    /// `IdentifierNotFound` if no frame binds `name`.
    pub(in crate::interpreter::evaluator) fn eval_identifier(name: &str,
                                                             env: &Env)
                                                             -> Result<Value, RuntimeError> {
        env.borrow()
           .get(name)
           .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    /// Evaluates expressions left to right, stopping at the first failure.
    pub(in crate::interpreter::evaluator) fn eval_expressions(&mut self,
                                                              exprs: &[Expr],
                                                              env: &Env)
                                                              -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval(expr, env)).collect()
    }

    /// Evaluates an `if` expression and its `else if` chain.
    ///
    /// Conditions are tried in order; the first truthy one selects its block.
    /// When none matches, the trailing `else` block runs if there is one.
    /// A block that yields no value, and a chain where nothing ran, evaluate
    /// to `Null`.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     if_expr: &IfExpression,
                                                     env: &Env)
                                                     -> EvalResult<Value> {
        let mut clause = if_expr;
        let block = loop {
            if self.eval(&clause.condition, env)?.is_truthy() {
                break &clause.consequence;
            }
            match &clause.alternative {
                Some(ElseBranch::ElseIf(next)) => clause = next.as_ref(),
                Some(ElseBranch::Else(block)) => break block,
                None => return Ok(Value::Null),
            }
        };
        Ok(self.eval_block(block, env)?.unwrap_or(Value::Null))
    }
}
