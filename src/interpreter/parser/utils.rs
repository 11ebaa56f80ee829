use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    pub(in crate::interpreter::parser) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    /// Advances onto the peeked token if it has the expected kind.
    ///
    /// # Errors
    /// `ExpectedToken` naming the expected and the actual kind; the window is
    /// left where it was.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self,
                                                      kind: TokenKind)
                                                      -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::ExpectedToken { expected: kind,
                                            found:    self.peek.kind, })
        }
    }

    /// Skips a `;` directly after a statement, if there is one.
    pub(in crate::interpreter::parser) fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// Expects the current token to be the opening delimiter; on success the
    /// current token is `closing`. An immediately following `closing` yields
    /// an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }
}
