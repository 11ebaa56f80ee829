use std::rc::Rc;

use crate::{
    ast::{ElseBranch, Expr, FunctionLiteral, Identifier, IfExpression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence, PrefixHandler},
    },
    util::stack::ensure_sufficient_stack,
};

/// Maps a token to the prefix operator it denotes, if any.
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Looks up the handler that parses an expression starting with `kind`.
    pub(in crate::interpreter::parser) fn prefix_handler(kind: TokenKind)
                                                         -> Option<PrefixHandler<'src>> {
        let handler: PrefixHandler<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::Str => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::While => Self::parse_while_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::Println => Self::parse_println_expression,
            _ => return None,
        };
        Some(handler)
    }

    #[allow(clippy::unnecessary_wraps)]
    fn parse_identifier(&mut self) -> ParseResult<Expr> {
        Ok(Expr::Identifier(Identifier::new(self.cur.literal.as_str())))
    }

    /// Parses a decimal integer literal.
    ///
    /// # Errors
    /// `InvalidInteger` when the digits do not fit in an `i64`.
    fn parse_integer_literal(&mut self) -> ParseResult<Expr> {
        self.cur
            .literal
            .parse()
            .map(Expr::IntegerLiteral)
            .map_err(|_| ParseError::InvalidInteger { literal: self.cur.literal.clone() })
    }

    #[allow(clippy::unnecessary_wraps)]
    fn parse_string_literal(&mut self) -> ParseResult<Expr> {
        Ok(Expr::StringLiteral(self.cur.literal.clone()))
    }

    #[allow(clippy::unnecessary_wraps)]
    fn parse_boolean(&mut self) -> ParseResult<Expr> {
        Ok(Expr::Boolean(self.cur_is(TokenKind::True)))
    }

    /// Parses `!operand` or `-operand`. The operand binds at prefix
    /// precedence, so `-a * b` is `(-a) * b`.
    fn parse_prefix_expression(&mut self) -> ParseResult<Expr> {
        let Some(operator) = token_to_prefix_operator(self.cur.kind) else {
            return Err(ParseError::NoPrefixParseFn { kind: self.cur.kind });
        };
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { operator,
                          operand: Box::new(operand) })
    }

    /// Parses `( expression )`. Grouping leaves no node of its own behind.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        Ok(Expr::If(self.parse_if()?))
    }

    /// Parses an `if` expression with optional `else` and chained `else if`.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { ... }
    ///     else if (<condition>) { ... }
    ///     else { ... }
    /// ```
    /// Each `else if` becomes the next link of the chain; a plain `else`
    /// block ends it.
    ///
    /// # Errors
    /// - `ExpectedToken` if a parenthesis or brace is missing.
    /// - `InvalidElseBranch` if `else` is followed by anything other than `{`
    ///   or `if`.
    fn parse_if(&mut self) -> ParseResult<IfExpression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            match self.peek.kind {
                TokenKind::LBrace => {
                    self.next_token();
                    Some(ElseBranch::Else(self.parse_block_statement()?))
                },
                TokenKind::If => {
                    self.next_token();
                    let next = ensure_sufficient_stack(|| -> ParseResult<IfExpression> {
                                   self.parse_if()
                               })?;
                    Some(ElseBranch::ElseIf(Box::new(next)))
                },
                found => return Err(ParseError::InvalidElseBranch { found }),
            }
        } else {
            None
        };

        Ok(IfExpression { condition: Box::new(condition),
                          consequence,
                          alternative })
    }

    /// `while (<condition>) { ... }`
    fn parse_while_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::While { condition: Box::new(condition),
                         body })
    }

    /// `fn(<parameters>) { ... }`
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    /// Parses a parenthesized, comma-separated list of parameter names.
    ///
    /// Expects the current token to be `(` and leaves the window on `)`.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cur.literal.as_str()));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cur.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// `println(<arguments>)`
    fn parse_println_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expr::Println { arguments })
    }
}
