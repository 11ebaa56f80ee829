use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A prefix handler parses an expression that starts at the current token.
pub type PrefixHandler<'src> = fn(&mut Parser<'src>) -> ParseResult<Expr>;
/// An infix handler extends an already parsed left operand; the current token
/// is the operator.
pub type InfixHandler<'src> = fn(&mut Parser<'src>, Expr) -> ParseResult<Expr>;

/// Binding power of operators, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-x` and `!x`.
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// The binding power of a token in infix position.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Operator-precedence (Pratt) parser over a token stream.
///
/// The parser keeps a two-token window (`cur` and `peek`) over the lexer.
/// Diagnostics never abort parsing: a statement that fails to parse is
/// dropped, its error is recorded, and parsing resumes after it. Callers must
/// check [`Parser::errors`] before trusting the returned [`Program`].
///
/// # Example
/// ```
/// use tlang::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) cur:     Token,
    pub(super) peek:    Token,
    pub(super) errors:  Vec<ParseError>,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        let mut parser = Self { lexer,
                                cur: Token::eof(),
                                peek: Token::eof(),
                                errors: Vec::new() };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Diagnostics collected so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }
        tracing::debug!(statements = program.statements.len(),
                        errors = self.errors.len(),
                        "parsed program");
        program
    }

    /// Slides the token window forward by one token.
    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix handler of the current token produces the left operand.
    /// While the peeked token binds tighter than `precedence`, the window
    /// advances onto it and its infix handler extends the left operand. Equal
    /// precedence stops the loop, which makes binary operators
    /// left-associative.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| -> ParseResult<Expr> {
            let Some(prefix) = Self::prefix_handler(self.cur.kind) else {
                return Err(ParseError::NoPrefixParseFn { kind: self.cur.kind });
            };
            let mut left = prefix(self)?;

            while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                let Some(infix) = Self::infix_handler(self.peek.kind) else {
                    return Ok(left);
                };
                self.next_token();
                left = infix(self, left)?;
            }

            Ok(left)
        })
    }
}
