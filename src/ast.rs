use std::{fmt, mem, rc::Rc};

use crate::util::stack::ensure_sufficient_stack;

/// A name as written in the source, used for variables and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Unary operators that appear in front of their operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical complement: `!`.
    Bang,
    /// Integer negation: `-`.
    Minus,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Bang => "!",
                        Self::Minus => "-",
                    })
    }
}

/// Binary operators written between their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation: `+`.
    Plus,
    /// Subtraction: `-`.
    Minus,
    /// Multiplication: `*`.
    Asterisk,
    /// Truncating division: `/`.
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::Asterisk => "*",
                        Self::Slash => "/",
                        Self::Lt => "<",
                        Self::Gt => ">",
                        Self::Eq => "==",
                        Self::NotEq => "!=",
                    })
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression produces a value when evaluated. `if`, `while` and
/// function literals are expressions too, which lets them appear anywhere a
/// value is expected.
///
/// The `Display` implementation is the canonical re-print: prefix and infix
/// expressions are fully parenthesized and lists are comma-joined, so that
/// printing a parsed tree and parsing the output again yields the same tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A string literal; the text between the quotes.
    StringLiteral(String),
    /// `true` or `false`.
    Boolean(bool),
    /// A unary operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A conditional, possibly chained through `else if`.
    If(IfExpression),
    /// A `while` loop.
    While {
        /// Checked before every iteration.
        condition: Box<Self>,
        /// Evaluated in a fresh scope on every iteration.
        body:      BlockStatement,
    },
    /// A function literal. Shared with every closure created from it.
    Function(Rc<FunctionLiteral>),
    /// A call such as `add(1, 2)`.
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// The built-in `println(...)`.
    Println {
        /// Values to render and concatenate.
        arguments: Vec<Self>,
    },
}

/// `if (condition) { consequence }` with an optional `else` part.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition:   Box<Expr>,
    pub consequence: BlockStatement,
    pub alternative: Option<ElseBranch>,
}

/// What follows the `else` keyword of an [`IfExpression`].
///
/// A chain of `else if` clauses is a singly linked list of `ElseIf` links,
/// optionally terminated by a plain `Else` block.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `else if (...) { ... }`: the next link of the chain.
    ElseIf(Box<IfExpression>),
    /// `else { ... }`: the end of the chain.
    Else(BlockStatement),
}

impl IfExpression {
    /// Iterates over the `else if` links that follow this clause, in source
    /// order.
    pub fn else_ifs(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(self.next_link(), |link| link.next_link())
    }

    fn next_link(&self) -> Option<&Self> {
        match &self.alternative {
            Some(ElseBranch::ElseIf(next)) => Some(next),
            _ => None,
        }
    }
}

/// `fn(parameters) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body:       BlockStatement,
}

/// A brace-delimited sequence of statements that opens a new scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;` binds in the current scope.
    Let {
        /// The name being bound.
        name:  Identifier,
        /// The bound value.
        value: Expr,
    },
    /// `name = value;` rebinds an existing name in the scope that holds it.
    Assign {
        /// The name being assigned.
        name:  Identifier,
        /// The new value.
        value: Expr,
    },
    /// `return value;`
    Return {
        /// The value handed back to the caller.
        value: Expr,
    },
    /// An expression evaluated for its value or side effects.
    Expression {
        /// The wrapped expression.
        expr: Expr,
    },
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Writes statements back to back. An expression statement that is followed by
/// another statement gets a `;` so the two cannot fuse when re-parsed (`a (b)`
/// would otherwise read as a call).
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            let separator = match statements[i - 1] {
                Statement::Expression { .. } => "; ",
                _ => " ",
            };
            f.write_str(separator)?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Assign { name, value } => write!(f, "{name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        let mut last = self;
        for link in self.else_ifs() {
            write!(f, " else if ({}) {}", link.condition, link.consequence)?;
            last = link;
        }
        match &last.alternative {
            Some(ElseBranch::Else(block)) => write!(f, " else {block}"),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| -> fmt::Result {
            match self {
                Self::Identifier(ident) => write!(f, "{ident}"),
                Self::IntegerLiteral(value) => write!(f, "{value}"),
                Self::StringLiteral(value) => write!(f, "\"{value}\""),
                Self::Boolean(value) => write!(f, "{value}"),
                Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
                Self::Infix { operator,
                              left,
                              right, } => write!(f, "({left} {operator} {right})"),
                Self::If(if_expr) => write!(f, "{if_expr}"),
                Self::While { condition, body } => write!(f, "while ({condition}) {body}"),
                Self::Function(literal) => write!(f, "{literal}"),
                Self::Call { callee, arguments } => {
                    write!(f, "{callee}(")?;
                    write_comma_separated(f, arguments)?;
                    f.write_str(")")
                },
                Self::Println { arguments } => {
                    f.write_str("println(")?;
                    write_comma_separated(f, arguments)?;
                    f.write_str(")")
                },
            }
        })
    }
}

/// Tears the tree down with an explicit work list rather than recursing once
/// per level, so tree depth is not bounded by the native stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

fn take(expr: &mut Expr) -> Expr {
    mem::replace(expr, Expr::Boolean(false))
}

fn detach_block(block: &mut BlockStatement, pending: &mut Vec<Expr>) {
    pending.extend(block.statements.drain(..).map(|statement| match statement {
                                                  Statement::Let { value, .. }
                                                  | Statement::Assign { value, .. }
                                                  | Statement::Return { value } => value,
                                                  Statement::Expression { expr } => expr,
                                              }));
}

/// Moves the direct children of `expr` onto `pending`, leaving it a leaf.
/// An `else if` chain is unlinked here in one pass.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Prefix { operand, .. } => pending.push(take(operand)),
        Expr::Infix { left, right, .. } => {
            pending.push(take(left));
            pending.push(take(right));
        },
        Expr::If(if_expr) => {
            pending.push(take(&mut if_expr.condition));
            detach_block(&mut if_expr.consequence, pending);
            let mut alternative = if_expr.alternative.take();
            while let Some(branch) = alternative {
                alternative = match branch {
                    ElseBranch::ElseIf(mut link) => {
                        pending.push(take(&mut link.condition));
                        detach_block(&mut link.consequence, pending);
                        link.alternative.take()
                    },
                    ElseBranch::Else(mut block) => {
                        detach_block(&mut block, pending);
                        None
                    },
                };
            }
        },
        Expr::While { condition, body } => {
            pending.push(take(condition));
            detach_block(body, pending);
        },
        Expr::Function(literal) => {
            if let Some(literal) = Rc::get_mut(literal) {
                detach_block(&mut literal.body, pending);
            }
        },
        Expr::Call { callee, arguments } => {
            pending.push(take(callee));
            pending.append(arguments);
        },
        Expr::Println { arguments } => pending.append(arguments),
        Expr::Identifier(_)
        | Expr::IntegerLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::Boolean(_) => {},
    }
}
