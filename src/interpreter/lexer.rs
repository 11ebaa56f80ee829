use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Operators, delimiters, identifiers, integers and strings are recognized
/// directly by the generated scanner. Keywords share the identifier pattern and
/// are told apart afterwards through [`KEYWORDS`]. `Eof` and `Illegal` are
/// never produced by the scanner itself; [`Lexer`] synthesizes them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A character the language does not know about.
    Illegal,
    /// Identifier tokens; variable names such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`.
    #[token("\"", lex_string)]
    Str,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `while`
    While,
    /// `println`
    Println,
}

/// Reserved words and the token kinds they map to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[("fn", TokenKind::Function),
                                             ("let", TokenKind::Let),
                                             ("true", TokenKind::True),
                                             ("false", TokenKind::False),
                                             ("if", TokenKind::If),
                                             ("else", TokenKind::Else),
                                             ("return", TokenKind::Return),
                                             ("while", TokenKind::While),
                                             ("println", TokenKind::Println)];

/// Classifies a run of identifier characters as a keyword or an identifier.
///
/// # Example
/// ```
/// use tlang::interpreter::lexer::{TokenKind, lookup_ident};
///
/// assert_eq!(lookup_ident("while"), TokenKind::While);
/// assert_eq!(lookup_ident("whilst"), TokenKind::Ident);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.iter()
            .find(|(word, _)| *word == ident)
            .map_or(TokenKind::Ident, |(_, kind)| *kind)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::While => "WHILE",
            Self::Println => "PRINTLN",
        };
        f.write_str(name)
    }
}

/// A token kind paired with the exact source text it was read from.
///
/// For string literals the literal excludes the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:    TokenKind,
    pub literal: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }
}

/// Scans the body of a string literal after its opening quote.
///
/// The token extends through the closing quote, or to the end of input when
/// the literal is never closed.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) {
    let rest = lex.remainder();
    let len = rest.find('"').map_or(rest.len(), |end| end + 1);
    lex.bump(len);
}

/// A lazy token stream over a source string.
///
/// Tokens are produced on demand by [`Lexer::next_token`]. Unknown characters
/// become [`TokenKind::Illegal`] tokens instead of stopping the scan, and once
/// the input is exhausted every further call yields [`TokenKind::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Advances over the input and returns the next token.
    ///
    /// # Example
    /// ```
    /// use tlang::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("x != 10");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    /// assert_eq!(lexer.next_token().kind, TokenKind::NotEq);
    /// assert_eq!(lexer.next_token().literal, "10");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> Token {
        let token = match self.inner.next() {
            None => Token::eof(),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            Some(Ok(TokenKind::Ident)) => {
                let literal = self.inner.slice();
                Token::new(lookup_ident(literal), literal)
            },
            Some(Ok(TokenKind::Str)) => {
                let slice = self.inner.slice();
                let body = slice.strip_prefix('"').unwrap_or(slice);
                Token::new(TokenKind::Str, body.strip_suffix('"').unwrap_or(body))
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
        };
        tracing::trace!(kind = %token.kind, literal = %token.literal, "token");
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}
