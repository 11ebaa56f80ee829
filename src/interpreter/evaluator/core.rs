use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        value::{core::Value, function::Function},
    },
    util::stack::ensure_sufficient_stack,
};

/// Why evaluation stopped before reaching the end of a construct.
///
/// Both variants travel up the call stack through `?`. A `Return` is caught
/// by the nearest function call or by the program entry point; an `Error`
/// goes all the way out.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A runtime error aborts the whole evaluation.
    Error(RuntimeError),
    /// A `return` statement is in flight with its value.
    Return(Value),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Unwind`] that interrupted them.
pub type EvalResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation context.
///
/// The context owns the log of lines written by `println`. Variables live in
/// [`Environment`] frames passed alongside, so one context can evaluate
/// against any number of independent scopes.
///
/// ## Usage
///
/// ```
/// use tlang::interpreter::{
///     environment::Environment, evaluator::core::Context, value::core::Value,
/// };
///
/// let (program, errors) = tlang::parse("let x = 2; println(\"x=\", x); x * 21");
/// assert!(errors.is_empty());
///
/// let mut context = Context::new();
/// let value = context.eval_program(&program, &Environment::new_root());
///
/// assert_eq!(value, Value::Integer(42));
/// assert_eq!(context.output(), ["x=2"]);
/// ```
#[derive(Debug, Default)]
pub struct Context {
    output: Vec<String>,
}

impl Context {
    /// Creates a context with an empty output log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written by `println`, oldest first.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Drains the output log.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub(in crate::interpreter::evaluator) fn push_output(&mut self, line: String) {
        self.output.push(line);
    }

    /// Evaluates a whole program against `env` and returns its value.
    ///
    /// The value is that of the last statement, or of the first `return`
    /// reached at the top level. A runtime error becomes [`Value::Error`]
    /// carrying its message.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> Value {
        self.try_eval_program(program, env)
            .unwrap_or_else(|error| Value::Error(error.to_string()))
    }

    /// Like [`Context::eval_program`], but keeps a runtime error typed.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised anywhere in the program.
    pub fn try_eval_program(&mut self, program: &Program, env: &Env) -> Result<Value, RuntimeError> {
        let mut result = None;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Error(error)) => {
                    tracing::debug!(%error, "evaluation failed");
                    return Err(error);
                },
            }
        }
        Ok(result.unwrap_or(Value::Null))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Every
    /// expression produces a value; constructs with nothing to yield, such as
    /// an `if` whose branch was not taken, produce [`Value::Null`].
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        ensure_sufficient_stack(|| -> EvalResult<Value> {
            match expr {
                Expr::Identifier(ident) => Ok(Self::eval_identifier(&ident.name, env)?),
                Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
                Expr::StringLiteral(value) => Ok(Value::from(value.as_str())),
                Expr::Boolean(value) => Ok(Value::Boolean(*value)),
                Expr::Prefix { operator, operand } => {
                    let operand = self.eval(operand, env)?;
                    Ok(Self::eval_prefix(*operator, &operand)?)
                },
                Expr::Infix { operator,
                              left,
                              right, } => {
                    let left = self.eval(left, env)?;
                    let right = self.eval(right, env)?;
                    Ok(Self::eval_infix(*operator, &left, &right)?)
                },
                Expr::If(if_expr) => self.eval_if(if_expr, env),
                Expr::While { condition, body } => self.eval_while(condition, body, env),
                Expr::Function(literal) => Ok(Value::Function(Rc::new(Function::new(literal, env)))),
                Expr::Call { callee, arguments } => self.eval_call(callee, arguments, env),
                Expr::Println { arguments } => self.eval_println(arguments, env),
            }
        })
    }

    /// Evaluates a single statement.
    ///
    /// `let` and assignments change the environment and yield no value;
    /// `return` starts unwinding; an expression statement yields its value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().set(name.name.as_str(), value);
                Ok(None)
            },
            Statement::Assign { name, value } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().assign(&name.name, value)?;
                Ok(None)
            },
            Statement::Return { value } => Err(Unwind::Return(self.eval(value, env)?)),
            Statement::Expression { expr } => Ok(Some(self.eval(expr, env)?)),
        }
    }

    /// Evaluates a block in a fresh frame nested inside `env`.
    ///
    /// Bindings made by `let` inside the block disappear with the frame. The
    /// result is that of the last statement.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> EvalResult<Option<Value>> {
        let frame = Environment::enclosed(env);
        let mut result = None;
        for statement in &block.statements {
            result = self.eval_statement(statement, &frame)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(source: &str) -> (Value, Vec<String>) {
        let (program, errors) = crate::parse(source);
        assert!(errors.is_empty(), "parse errors: {errors:?}");
        let mut context = Context::new();
        let value = context.eval_program(&program, &Environment::new_root());
        (value, context.take_output())
    }

    fn eval(source: &str) -> Value {
        run(source).0
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        assert_eq!(eval("5"), Value::Integer(5));
        assert_eq!(eval("true"), Value::Boolean(true));
        assert_eq!(eval("\"hi\""), Value::from("hi"));
    }

    #[test]
    fn let_binds_and_yields_no_value() {
        assert_eq!(eval("let a = 5; a;"), Value::Integer(5));
        assert_eq!(eval("let a = 5 * 5; a;"), Value::Integer(25));
        assert_eq!(eval("let a = 5; let b = a; let c = a + b + 5; c;"), Value::Integer(15));
        assert_eq!(eval("let a = 5;"), Value::Null);
    }

    #[test]
    fn block_bindings_are_scoped() {
        assert_eq!(eval("let x = 1; if (true) { let x = 2; }; x"), Value::Integer(1));
        assert_eq!(eval("if (true) { let y = 2; }; y"),
                   Value::Error("identifier not found: y".to_string()));
    }

    #[test]
    fn assignment_reaches_the_outer_frame() {
        assert_eq!(eval("let x = 1; if (true) { x = 2; }; x"), Value::Integer(2));
        assert_eq!(eval("let x = 1; let f = fn() { x = x + 10; }; f(); f(); x"),
                   Value::Integer(21));
    }

    #[test]
    fn assignment_to_undeclared_name_fails() {
        assert_eq!(eval("x = 5;"), Value::Error("unknown identifier: x".to_string()));
    }

    #[test]
    fn assignment_evaluates_the_value_first() {
        assert_eq!(eval("ghost = missing;"),
                   Value::Error("identifier not found: missing".to_string()));
    }

    #[test]
    fn return_stops_the_program() {
        let cases = [("return 10;", 10),
                     ("return 10; 9;", 10),
                     ("return 2 * 5; 9;", 10),
                     ("9; return 2 * 5; 9;", 10),
                     ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10)];

        for (source, expected) in cases {
            assert_eq!(eval(source), Value::Integer(expected), "source: {source}");
        }
    }

    #[test]
    fn errors_abort_evaluation() {
        let (value, output) = run("println(1); let x = 5 + true; println(2);");
        assert_eq!(value, Value::Error("type mismatch: INTEGER + BOOLEAN".to_string()));
        assert_eq!(output, vec!["1"]);
    }

    #[test]
    fn try_eval_program_keeps_errors_typed() {
        let (program, _) = crate::parse("-true");
        let result = Context::new().try_eval_program(&program, &Environment::new_root());
        assert_eq!(result,
                   Err(RuntimeError::UnknownPrefixOperator { operator: crate::ast::PrefixOperator::Minus,
                                                              operand:  "BOOLEAN", }));
    }

    #[test]
    fn environment_persists_across_programs() {
        let env = Environment::new_root();
        let mut context = Context::new();
        let (first, _) = crate::parse("let counter = 41;");
        let (second, _) = crate::parse("counter + 1");

        assert_eq!(context.eval_program(&first, &env), Value::Null);
        assert_eq!(context.eval_program(&second, &env), Value::Integer(42));
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        let source = "let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
                      count(5000)";
        assert_eq!(eval(source), Value::Integer(5000));
    }

    #[test]
    fn deeply_nested_programs_parse_evaluate_and_drop() {
        let chain = vec!["1"; 200_000].join(" + ");
        assert_eq!(eval(&chain), Value::Integer(200_000));

        let grouped = format!("{}7{}", "(".repeat(50_000), ")".repeat(50_000));
        assert_eq!(eval(&grouped), Value::Integer(7));

        let negated = format!("{}7", "-".repeat(50_001));
        assert_eq!(eval(&negated), Value::Integer(-7));

        let mut branches = String::from("let x = 0; if (x == 1) { 1 }");
        for n in 2..20_000 {
            branches.push_str(&format!(" else if (x == {n}) {{ {n} }}"));
        }
        branches.push_str(" else { 42 }");
        assert_eq!(eval(&branches), Value::Integer(42));
    }
}
