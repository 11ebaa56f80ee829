use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{Context, EvalResult, Unwind},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right,
    /// and only then is the callee checked to be a function.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       arguments: &[Expr],
                                                       env: &Env)
                                                       -> EvalResult<Value> {
        let function = self.eval(callee, env)?;
        let arguments = self.eval_expressions(arguments, env)?;
        self.apply_function(&function, arguments)
    }

    /// Calls `function` with already evaluated arguments.
    ///
    /// Parameters are bound in a new frame enclosed by the environment the
    /// function captured, not by the caller's. A `return` inside the body
    /// ends the call with its value; a body that finishes without one yields
    /// the value of its last statement, or `Null`.
    ///
    /// # Errors
    /// - `NotAFunction` if `function` is not a closure.
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use tlang::interpreter::{
    ///     environment::Environment, evaluator::core::Context, value::core::Value,
    /// };
    ///
    /// let env = Environment::new_root();
    /// let mut context = Context::new();
    /// let (program, _) = tlang::parse("fn(a, b) { a * b }");
    /// let function = context.eval_program(&program, &env);
    ///
    /// let product = context.apply_function(&function, vec![Value::Integer(6), Value::Integer(7)]);
    /// assert_eq!(product, Ok(Value::Integer(42)));
    /// ```
    pub fn apply_function(&mut self, function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
        let Value::Function(function) = function else {
            return Err(RuntimeError::NotAFunction { kind: function.type_name() }.into());
        };

        let parameters = &function.literal.parameters;
        if parameters.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: parameters.len(),
                                                             found:    arguments.len(), }.into());
        }
        tracing::debug!(arity = function.arity(), "call");

        let frame = Environment::enclosed(&function.env);
        {
            let mut frame = frame.borrow_mut();
            for (parameter, argument) in parameters.iter().zip(arguments) {
                frame.set(parameter.name.as_str(), argument);
            }
        }

        match self.eval_block(&function.literal.body, &frame) {
            Ok(value) => Ok(value.unwrap_or(Value::Null)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::{
        environment::Environment, evaluator::core::Context, value::core::Value,
    };

    fn eval(source: &str) -> Value {
        let (program, errors) = crate::parse(source);
        assert!(errors.is_empty(), "parse errors: {errors:?}");
        Context::new().eval_program(&program, &Environment::new_root())
    }

    #[test]
    fn function_application() {
        let cases = [("let identity = fn(x) { x; }; identity(5);", 5),
                     ("let identity = fn(x) { return x; }; identity(5);", 5),
                     ("let double = fn(x) { x * 2; }; double(5);", 10),
                     ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                     ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                     ("fn(x) { x; }(5)", 5)];

        for (source, expected) in cases {
            assert_eq!(eval(source), Value::Integer(expected), "source: {source}");
        }
    }

    #[test]
    fn closures_capture_their_environment() {
        let source = "let newAdder = fn(x) { fn(y) { x + y } };
                      let addTwo = newAdder(2);
                      addTwo(2);";
        assert_eq!(eval(source), Value::Integer(4));
    }

    #[test]
    fn closures_see_later_updates_of_captured_names() {
        let source = "let base = 1; let read = fn() { base }; base = 100; read()";
        assert_eq!(eval(source), Value::Integer(100));
    }

    #[test]
    fn parameters_do_not_leak_into_the_caller() {
        assert_eq!(eval("let f = fn(p) { p }; f(1); p"),
                   Value::Error("identifier not found: p".to_string()));
    }

    #[test]
    fn return_only_leaves_the_innermost_function() {
        let source = "let inner = fn() { return 1; 2 };
                      let outer = fn() { let v = inner(); v + 10 };
                      outer()";
        assert_eq!(eval(source), Value::Integer(11));
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(eval("fn(x) { x }()"),
                   Value::Error("wrong number of arguments: expected 1, got 0".to_string()));
        assert_eq!(eval("let f = fn() { 1 }; f(1, 2)"),
                   Value::Error("wrong number of arguments: expected 0, got 2".to_string()));
    }

    #[test]
    fn calling_a_non_function() {
        assert_eq!(eval("let x = 5; x(1)"), Value::Error("not a function: INTEGER".to_string()));
        assert_eq!(eval("\"f\"()"), Value::Error("not a function: STRING".to_string()));
    }

    #[test]
    fn empty_body_yields_null() {
        assert_eq!(eval("fn() { }()"), Value::Null);
        assert_eq!(eval("fn() { let a = 1; }()"), Value::Null);
    }

    #[test]
    fn recursive_functions() {
        let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                      fib(15)";
        assert_eq!(eval(source), Value::Integer(610));
    }
}
