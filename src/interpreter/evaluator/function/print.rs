use crate::{
    ast::Expr,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `println(...)`.
    ///
    /// Arguments are evaluated left to right and rendered with their display
    /// form. The pieces are joined without a separator and the resulting line
    /// is appended to the output log. Nothing is written to the console here;
    /// the driver decides where the log goes.
    ///
    /// # Returns
    /// Always `Null`.
    pub(in crate::interpreter::evaluator) fn eval_println(&mut self,
                                                          arguments: &[Expr],
                                                          env: &Env)
                                                          -> EvalResult<Value> {
        let values = self.eval_expressions(arguments, env)?;
        let line: String = values.iter().map(ToString::to_string).collect();
        tracing::debug!(%line, "println");
        self.push_output(line);
        Ok(Value::Null)
    }
}
