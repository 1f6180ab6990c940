use crate::{
    ast::{COMMA, Expr},
    error::{CompileError, ErrorKind},
    interpreter::{
        lexer::{Lookahead, Tokenizer},
        symbols::{Symbol, builtin::comma},
    },
};

pub type ParseResult<T> = Result<T, CompileError>;

/// How chains of `^` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAssociativity {
    /// `a^b^c` is `(a^b)^c` and `-a^b` is `(-a)^b`.
    Left,
    /// `a^b^c` is `a^(b^c)` and `-a^b` is `-(a^b)`.
    Right,
}

/// The associativity used by [`crate::compile`], fixed at build time by the
/// `pow-from-right` feature.
#[cfg(feature = "pow-from-right")]
pub const POWER_ASSOCIATIVITY: PowerAssociativity = PowerAssociativity::Right;
/// The associativity used by [`crate::compile`], fixed at build time by the
/// `pow-from-right` feature.
#[cfg(not(feature = "pow-from-right"))]
pub const POWER_ASSOCIATIVITY: PowerAssociativity = PowerAssociativity::Left;

/// A recursive-descent parser over a single expression.
///
/// Productions return as soon as one of them fails. Everything already built
/// at that point is owned by locals of the failing frames and is dropped as the
/// error propagates, so no partial tree ever reaches the caller.
pub struct Parser<'s, 't, 'a> {
    pub(in crate::interpreter::parser) tokens:        Tokenizer<'s, 't, 'a>,
    pub(in crate::interpreter::parser) associativity: PowerAssociativity,
}

impl<'s, 't, 'a> Parser<'s, 't, 'a> {
    /// Creates a parser positioned on the first token of `source`.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    /// - `symbols`: Caller symbols, consulted before the builtins.
    /// - `associativity`: How chains of `^` group.
    #[must_use]
    pub fn new(source: &'s str,
               symbols: &'t [Symbol<'a>],
               associativity: PowerAssociativity)
               -> Self {
        Self { tokens: Tokenizer::new(source, symbols),
               associativity }
    }

    /// Parses the whole input into an unoptimized tree.
    ///
    /// Grammar: `input := list END`
    ///
    /// # Errors
    /// Returns the first error met by any production, or
    /// [`ErrorKind::TrailingInput`] when a complete expression is followed by
    /// anything other than the end of input.
    ///
    /// # Example
    /// ```
    /// use exprtree::{
    ///     ErrorKind,
    ///     interpreter::parser::{Parser, PowerAssociativity},
    /// };
    ///
    /// let tree = Parser::new("1 + 2", &[], PowerAssociativity::Left).parse().unwrap();
    /// assert_eq!(tree.node_count(), 3);
    ///
    /// let err = Parser::new("1 2", &[], PowerAssociativity::Left).parse().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TrailingInput);
    /// assert_eq!(err.position(), 3);
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr<'a>> {
        let root = self.parse_list()?;
        match self.tokens.current() {
            Lookahead::End => Ok(root),
            _ => Err(self.error(ErrorKind::TrailingInput)),
        }
    }

    /// Parses a comma-separated sequence.
    ///
    /// Each comma becomes a pure node that evaluates its left operand, then
    /// yields its right one.
    ///
    /// Grammar: `list := expr ("," expr)*`
    pub fn parse_list(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_expr()?;
        while let Lookahead::Separator = self.tokens.current() {
            self.tokens.advance();
            let right = self.parse_expr()?;
            left = Expr::binary(COMMA, comma, left, right);
        }
        Ok(left)
    }

    /// Builds an error located at the tokenizer's current offset.
    pub(in crate::interpreter::parser) fn error(&self, kind: ErrorKind) -> CompileError {
        CompileError::new(kind, self.tokens.position())
    }
}
