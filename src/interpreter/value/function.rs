use std::{fmt, rc::Rc};

use crate::{ast::FunctionLiteral, interpreter::environment::Env};

/// A closure: a function literal together with the environment that was
/// current when the literal was evaluated.
///
/// Both parts are shared. Calling the function never copies its body or its
/// captured scope.
pub struct Function {
    pub literal: Rc<FunctionLiteral>,
    pub env:     Env,
}

impl Function {
    #[must_use]
    pub fn new(literal: &Rc<FunctionLiteral>, env: &Env) -> Self {
        Self { literal: Rc::clone(literal),
               env:     Rc::clone(env), }
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }
}

// The captured environment may hold this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("literal", &self.literal.to_string())
         .finish_non_exhaustive()
    }
}
