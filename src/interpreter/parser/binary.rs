use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{InfixHandler, ParseResult, Parser},
    },
};

/// Maps a token to the binary operator it denotes, if any.
///
/// # Example
/// ```
/// use tlang::{ast::InfixOperator,
///             interpreter::{lexer::TokenKind, parser::binary::token_to_infix_operator}};
///
/// assert_eq!(token_to_infix_operator(TokenKind::Slash), Some(InfixOperator::Slash));
/// assert_eq!(token_to_infix_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Looks up the handler that continues an expression when `kind` follows
    /// a complete left operand.
    pub(in crate::interpreter::parser) fn infix_handler(kind: TokenKind)
                                                        -> Option<InfixHandler<'src>> {
        let handler: InfixHandler<'src> = match kind {
            TokenKind::LParen => Self::parse_call_expression,
            kind if token_to_infix_operator(kind).is_some() => Self::parse_infix_expression,
            _ => return None,
        };
        Some(handler)
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The right side is parsed at the operator's own precedence, so a
    /// following operator of the same level ends it and the chain associates
    /// to the left: `a - b - c` is `(a - b) - c`.
    fn parse_infix_expression(&mut self, left: Expr) -> ParseResult<Expr> {
        let Some(operator) = token_to_infix_operator(self.cur.kind) else {
            return Err(ParseError::NoPrefixParseFn { kind: self.cur.kind });
        };
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Ok(Expr::Infix { operator,
                         left: Box::new(left),
                         right: Box::new(right) })
    }

    /// Parses the argument list of a call; the current token is `(`.
    fn parse_call_expression(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expr::Call { callee: Box::new(callee),
                        arguments })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, InfixOperator, Program, Statement},
        interpreter::{lexer::Lexer, parser::core::Parser},
    };

    fn parse_ok(source: &str) -> Program {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parse errors: {:?}", parser.errors());
        program
    }

    fn single_expression(source: &str) -> Expr {
        let mut program = parse_ok(source);
        assert_eq!(program.statements.len(), 1, "source: {source}");
        match program.statements.remove(0) {
            Statement::Expression { expr } => expr,
            other => panic!("not an expression statement: {other:?}"),
        }
    }

    #[test]
    fn infix_expressions() {
        let cases = [("5 + 5;", InfixOperator::Plus),
                     ("5 - 5;", InfixOperator::Minus),
                     ("5 * 5;", InfixOperator::Asterisk),
                     ("5 / 5;", InfixOperator::Slash),
                     ("5 > 5;", InfixOperator::Gt),
                     ("5 < 5;", InfixOperator::Lt),
                     ("5 == 5;", InfixOperator::Eq),
                     ("5 != 5;", InfixOperator::NotEq)];

        for (source, expected) in cases {
            let expr = single_expression(source);
            let Expr::Infix { operator, left, right } = &expr else {
                panic!("not an infix expression: {source}");
            };
            assert_eq!(*operator, expected);
            assert_eq!(**left, Expr::IntegerLiteral(5));
            assert_eq!(**right, Expr::IntegerLiteral(5));
        }
    }

    #[test]
    fn boolean_operands() {
        assert_eq!(single_expression("true != false").to_string(), "(true != false)");
        assert_eq!(single_expression("\"a\" + \"b\"").to_string(), "(\"a\" + \"b\")");
    }

    #[test]
    fn call_expression() {
        let expr = single_expression("add(1, 2 * 3, 4 + 5);");
        let Expr::Call { callee, arguments } = &expr else {
            panic!("not a call expression");
        };
        assert_eq!(callee.to_string(), "add");
        let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["1", "(2 * 3)", "(4 + 5)"]);
    }

    #[test]
    fn calls_chain_and_apply_to_literals() {
        assert_eq!(single_expression("f(1)(2)").to_string(), "f(1)(2)");
        assert_eq!(single_expression("fn(x) { x }(5)").to_string(), "fn(x) { x }(5)");
        assert_eq!(single_expression("f()").to_string(), "f()");
    }

    #[test]
    fn printed_program_parses_back_to_the_same_tree() {
        let sources = ["let x = 1 + 2 * 3; x = -x; return x;",
                       "a; -b; c(d)",
                       "if (a < b) { a } else if (a > b) { b } else { \"same\" }",
                       "let f = fn(a, b) { let c = a * b; return c; }; f(1, 2);",
                       "while (i < 10) { i = i + 1; println(i, \" \"); }",
                       "fn() { }()",
                       "!(true == !false)"];

        for source in sources {
            let first = parse_ok(source);
            let printed = first.to_string();
            let second = parse_ok(&printed);
            assert_eq!(second, first, "re-parsed from {printed:?}");
            assert_eq!(second.to_string(), printed);
        }
    }
}
