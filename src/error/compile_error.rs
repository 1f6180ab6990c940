use thiserror::Error;

/// What made an expression fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An identifier matched neither a caller symbol nor a builtin.
    #[error("unknown identifier")]
    UnknownIdentifier,
    /// A character that starts no token.
    #[error("invalid character")]
    InvalidCharacter,
    /// A valid token where an operand was expected.
    #[error("unexpected token")]
    UnexpectedToken,
    /// The input ended where an operand was expected.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A function taking two or more arguments was not followed by `(`.
    #[error("expected '(' after function name")]
    ExpectedOpenParen,
    /// A closing parenthesis `)` was expected but not found.
    #[error("expected closing parenthesis ')'")]
    ExpectedCloseParen,
    /// A call supplied the wrong number of arguments.
    #[error("function takes exactly {expected} arguments")]
    ArityMismatch {
        /// The arity of the called function.
        expected: usize,
    },
    /// Input remained after a complete expression.
    #[error("unexpected input after expression")]
    TrailingInput,
}

/// A failed compilation.
///
/// The position is the byte offset just past the token the parser was looking
/// at when it gave up. It is never `0`: an error detected before any input was
/// consumed is reported at `1`.
///
/// # Example
/// ```
/// use exprtree::{ErrorKind, compile};
///
/// let err = compile("1 + ", &[]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
/// assert_eq!(err.position(), 4);
/// assert_eq!(err.to_string(), "Error at position 4: unexpected end of input.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error at position {position}: {kind}.")]
pub struct CompileError {
    kind:     ErrorKind,
    position: usize,
}

impl CompileError {
    /// Creates an error at a tokenizer offset, clamping `0` to `1`.
    #[must_use]
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind,
               position: position.max(1) }
    }

    /// Returns what went wrong.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the 1-based byte offset of the failure.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}
