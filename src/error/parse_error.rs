use crate::interpreter::lexer::TokenKind;

/// Represents all diagnostics the parser can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token was required next but something else was found.
    #[error("expected next token to be {expected}, but got {found}")]
    ExpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// The current token cannot start an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal does not fit in 64 signed bits.
    #[error("could not parse \"{literal}\" as integer")]
    InvalidInteger {
        /// The literal as written.
        literal: String,
    },
    /// `else` was followed by something other than a block or another `if`.
    #[error("expected {{ or if after else, but got {found}")]
    InvalidElseBranch {
        /// The token kind found after `else`.
        found: TokenKind,
    },
    /// A block was still open when the input ended.
    #[error("expected next token to be }}, but got EOF")]
    UnterminatedBlock,
}
