use smallvec::smallvec;

use crate::{
    ast::{Arguments, Expr},
    error::ErrorKind,
    interpreter::{
        lexer::{Lookahead, Operator},
        parser::core::{ParseResult, Parser},
        symbols::{Binding, Symbol},
    },
};

impl<'a> Parser<'_, '_, 'a> {
    /// Parses an operand with any number of leading signs.
    ///
    /// A run of `+` and `-` collapses to a single sign; a net negative sign
    /// wraps the operand in a negation node.
    ///
    /// Grammar:
    /// ```text
    ///     power := ("+" | "-")* base
    /// ```
    pub fn parse_power(&mut self) -> ParseResult<Expr<'a>> {
        let mut negative = false;
        while let Lookahead::Infix(op @ (Operator::Add | Operator::Sub)) = self.tokens.current() {
            if op == Operator::Sub {
                negative = !negative;
            }
            self.tokens.advance();
        }

        let base = self.parse_base()?;
        Ok(if negative { Expr::negation(base) } else { base })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     base := NUMBER
    ///           | VARIABLE
    ///           | FUNCTION0 ("(" ")")?
    ///           | FUNCTION1 power
    ///           | FUNCTIONn "(" expr ("," expr){n-1} ")"
    ///           | "(" list ")"
    /// ```
    ///
    /// # Errors
    /// Fails on unknown identifiers, invalid characters, a missing operand,
    /// an unclosed parenthesis or a call with the wrong number of arguments.
    pub fn parse_base(&mut self) -> ParseResult<Expr<'a>> {
        match self.tokens.current() {
            Lookahead::Number(value) => {
                self.tokens.advance();
                Ok(Expr::Constant(value))
            },
            Lookahead::Symbol(symbol) => self.parse_symbol(symbol),
            Lookahead::Open => {
                self.tokens.advance();
                let inner = self.parse_list()?;
                self.expect_close()?;
                Ok(inner)
            },
            Lookahead::Error(kind) => Err(self.error(kind)),
            Lookahead::End => Err(self.error(ErrorKind::UnexpectedEnd)),
            Lookahead::Infix(_) | Lookahead::Separator | Lookahead::Close => {
                Err(self.error(ErrorKind::UnexpectedToken))
            },
        }
    }

    /// Parses a resolved identifier into a variable or call node.
    fn parse_symbol(&mut self, symbol: Symbol<'a>) -> ParseResult<Expr<'a>> {
        match symbol.binding {
            Binding::Variable(storage) => {
                self.tokens.advance();
                Ok(Expr::Variable(storage))
            },
            Binding::Function(function) => {
                let arguments = self.parse_arguments(function.arity())?;
                Ok(Expr::Function { name: symbol.name,
                                    function,
                                    pure: symbol.pure,
                                    arguments })
            },
            Binding::Closure(function, context) => {
                let arguments = self.parse_arguments(function.arity())?;
                Ok(Expr::Closure { name: symbol.name,
                                   function,
                                   context,
                                   pure: symbol.pure,
                                   arguments })
            },
        }
    }

    /// Parses the arguments of a call, starting on the callee's name.
    ///
    /// - Arity 0: an optional `()`.
    /// - Arity 1: a single `power` operand, so both `sin x` and `sin(x)` work.
    /// - Arity 2 and up: `(`, exactly `arity` comma-separated `expr`s, `)`.
    ///
    /// Arguments parsed before a failure are dropped with the partial list.
    fn parse_arguments(&mut self, arity: usize) -> ParseResult<Arguments<'a>> {
        self.tokens.advance();

        match arity {
            0 => {
                if let Lookahead::Open = self.tokens.current() {
                    self.tokens.advance();
                    self.expect_close()?;
                }
                Ok(Arguments::new())
            },
            1 => Ok(smallvec![Box::new(self.parse_power()?)]),
            _ => {
                if !matches!(self.tokens.current(), Lookahead::Open) {
                    return Err(self.error(ErrorKind::ExpectedOpenParen));
                }

                let mut arguments = Arguments::new();
                loop {
                    self.tokens.advance();
                    arguments.push(Box::new(self.parse_expr()?));
                    if arguments.len() == arity
                       || !matches!(self.tokens.current(), Lookahead::Separator)
                    {
                        break;
                    }
                }

                match self.tokens.current() {
                    Lookahead::Close if arguments.len() == arity => {
                        self.tokens.advance();
                        Ok(arguments)
                    },
                    Lookahead::Close | Lookahead::Separator => {
                        Err(self.error(ErrorKind::ArityMismatch { expected: arity }))
                    },
                    _ => Err(self.error(ErrorKind::ExpectedCloseParen)),
                }
            },
        }
    }

    /// Consumes a `)`.
    fn expect_close(&mut self) -> ParseResult<()> {
        if let Lookahead::Close = self.tokens.current() {
            self.tokens.advance();
            Ok(())
        } else {
            Err(self.error(ErrorKind::ExpectedCloseParen))
        }
    }
}
