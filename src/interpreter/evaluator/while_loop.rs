use crate::{
    ast::{BlockStatement, Expr},
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration and the loop
    /// stops as soon as it is falsy. Each iteration runs the body in a fresh
    /// frame, so `let` bindings do not carry over between iterations while
    /// assignments to outer names do. The loop itself evaluates to `Null`.
    ///
    /// # Errors
    /// Any error raised by the condition or the body. A `return` inside the
    /// body leaves the loop and keeps unwinding.
    ///
    /// # Example
    /// ```
    /// use tlang::interpreter::{
    ///     environment::Environment, evaluator::core::Context, value::core::Value,
    /// };
    ///
    /// let (program, _) = tlang::parse("let i = 0; while (i < 3) { i = i + 1; }; i");
    /// let value = Context::new().eval_program(&program, &Environment::new_root());
    ///
    /// assert_eq!(value, Value::Integer(3));
    /// ```
    pub fn eval_while(&mut self,
                      condition: &Expr,
                      body: &BlockStatement,
                      env: &Env)
                      -> EvalResult<Value> {
        let mut iterations = 0_usize;
        while self.eval(condition, env)?.is_truthy() {
            self.eval_block(body, env)?;
            iterations += 1;
        }
        tracing::trace!(iterations, "loop finished");
        Ok(Value::Null)
    }
}
