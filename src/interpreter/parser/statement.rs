use crate::{
    ast::{BlockStatement, Identifier, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a `let` declaration,
    /// - a `return` statement,
    /// - an assignment (an identifier directly followed by `=`),
    /// - an expression used as a statement.
    ///
    /// A failed statement is recorded in the error list and `None` is
    /// returned; the token window stays where the failure happened so the
    /// caller can move on.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        let result = match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Ident if self.peek_is(TokenKind::Assign) => self.parse_assign_statement(),
            _ => self.parse_expression_statement(),
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                tracing::trace!(%error, "statement dropped");
                self.errors.push(error);
                None
            },
        }
    }

    /// `let <identifier> = <expression> [;]`
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur.literal.as_str());
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Let { name, value })
    }

    /// `<identifier> = <expression> [;]`
    fn parse_assign_statement(&mut self) -> ParseResult<Statement> {
        let name = Identifier::new(self.cur.literal.as_str());
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Assign { name, value })
    }

    /// `return <expression> [;]`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Expression { expr })
    }

    /// Parses statements up to the matching `}`.
    ///
    /// Expects the current token to be `{` and leaves the window on `}`.
    /// Errors inside the block are recorded statement by statement, just like
    /// at the top level.
    ///
    /// # Errors
    /// `UnterminatedBlock` if the input ends before the closing brace.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> ParseResult<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }

        if self.cur_is(TokenKind::Eof) {
            return Err(ParseError::UnterminatedBlock);
        }
        Ok(block)
    }
}
