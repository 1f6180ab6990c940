use logos::Logos;

use crate::{
    error::ErrorKind,
    interpreter::symbols::{Symbol, builtin, resolve},
};

/// A raw lexical token, before identifiers are resolved.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; a letter followed by letters, digits or `_`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// The infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the operator as written in source.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }

    /// Returns the host function applying the operator.
    #[must_use]
    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            Self::Add => builtin::add,
            Self::Sub => builtin::sub,
            Self::Mul => builtin::mul,
            Self::Div => builtin::divide,
            Self::Mod => builtin::fmod,
            Self::Pow => f64::powf,
        }
    }
}

/// The token the parser is currently looking at, with identifiers resolved.
#[derive(Debug, Clone, Copy)]
pub enum Lookahead<'a> {
    /// No input left.
    End,
    /// A numeric literal.
    Number(f64),
    /// An identifier bound to a variable, function or closure.
    Symbol(Symbol<'a>),
    /// An infix operator; `+` and `-` double as unary signs.
    Infix(Operator),
    /// `,`
    Separator,
    /// `(`
    Open,
    /// `)`
    Close,
    /// An unknown identifier or an unrecognized character.
    Error(ErrorKind),
}

/// Single-token lookahead over an expression.
///
/// The tokenizer always holds one already-scanned token, available through
/// [`Tokenizer::current`]. [`Tokenizer::advance`] replaces it with the next one.
pub struct Tokenizer<'s, 't, 'a> {
    lexer:    logos::Lexer<'s, Token>,
    symbols:  &'t [Symbol<'a>],
    current:  Lookahead<'a>,
    position: usize,
}

impl<'s, 't, 'a> Tokenizer<'s, 't, 'a> {
    /// Creates a tokenizer positioned on the first token of `source`.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    /// - `symbols`: Caller symbols consulted before the builtins.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::lexer::{Lookahead, Tokenizer};
    ///
    /// let mut tokens = Tokenizer::new(" 2.5 *", &[]);
    /// assert!(matches!(tokens.current(), Lookahead::Number(n) if n == 2.5));
    /// assert_eq!(tokens.position(), 4);
    ///
    /// tokens.advance();
    /// tokens.advance();
    /// assert!(matches!(tokens.current(), Lookahead::End));
    /// assert_eq!(tokens.position(), 6);
    /// ```
    #[must_use]
    pub fn new(source: &'s str, symbols: &'t [Symbol<'a>]) -> Self {
        let mut tokenizer = Self { lexer: Token::lexer(source),
                                   symbols,
                                   current: Lookahead::End,
                                   position: 0 };
        tokenizer.advance();
        tokenizer
    }

    /// Returns the current token.
    #[must_use]
    pub const fn current(&self) -> Lookahead<'a> {
        self.current
    }

    /// Returns the byte offset just past the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Scans the next token, skipping whitespace.
    ///
    /// Identifiers are resolved immediately; one that matches no symbol
    /// becomes an error token. Once the input is exhausted every further call
    /// yields [`Lookahead::End`].
    pub fn advance(&mut self) {
        let Some(token) = self.lexer.next() else {
            self.current = Lookahead::End;
            self.position = self.lexer.source().len();
            return;
        };

        self.position = self.lexer.span().end;
        self.current = match token {
            Ok(Token::Number(value)) => Lookahead::Number(value),
            Ok(Token::Identifier) => {
                resolve(self.symbols, self.lexer.slice()).map_or(Lookahead::Error(ErrorKind::UnknownIdentifier),
                                                                 Lookahead::Symbol)
            },
            Ok(Token::Plus) => Lookahead::Infix(Operator::Add),
            Ok(Token::Minus) => Lookahead::Infix(Operator::Sub),
            Ok(Token::Star) => Lookahead::Infix(Operator::Mul),
            Ok(Token::Slash) => Lookahead::Infix(Operator::Div),
            Ok(Token::Percent) => Lookahead::Infix(Operator::Mod),
            Ok(Token::Caret) => Lookahead::Infix(Operator::Pow),
            Ok(Token::Comma) => Lookahead::Separator,
            Ok(Token::LParen) => Lookahead::Open,
            Ok(Token::RParen) => Lookahead::Close,
            Err(()) => Lookahead::Error(ErrorKind::InvalidCharacter),
        };
    }
}
