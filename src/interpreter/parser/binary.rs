use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Lookahead, Operator},
        parser::core::{ParseResult, Parser, PowerAssociativity},
    },
};

impl<'a> Parser<'_, '_, 'a> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub fn parse_expr(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_term()?;
        while let Lookahead::Infix(op @ (Operator::Add | Operator::Sub)) = self.tokens.current() {
            self.tokens.advance();
            let right = self.parse_term()?;
            left = Expr::binary(op.glyph(), op.function(), left, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative binary operators: `*`, `/` and `%`.
    ///
    /// The rule is: `term := factor (("*" | "/" | "%") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_factor()?;
        while let Lookahead::Infix(op @ (Operator::Mul | Operator::Div | Operator::Mod)) =
            self.tokens.current()
        {
            self.tokens.advance();
            let right = self.parse_factor()?;
            left = Expr::binary(op.glyph(), op.function(), left, right);
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// The rule is: `factor := power ("^" power)*`, grouped according to the
    /// parser's [`PowerAssociativity`].
    pub fn parse_factor(&mut self) -> ParseResult<Expr<'a>> {
        match self.associativity {
            PowerAssociativity::Left => self.parse_factor_from_left(),
            PowerAssociativity::Right => self.parse_factor_from_right(),
        }
    }

    /// `a ^ b ^ c` parses as `(a ^ b) ^ c`. A unary sign belongs to its
    /// operand, so `-2^2` is `(-2)^2`.
    fn parse_factor_from_left(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_power()?;
        while let Lookahead::Infix(Operator::Pow) = self.tokens.current() {
            self.tokens.advance();
            let right = self.parse_power()?;
            left = Expr::binary(Operator::Pow.glyph(), Operator::Pow.function(), left, right);
        }
        Ok(left)
    }

    /// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
    ///
    /// If the first operand comes back as a negation node, the negation is
    /// lifted off and reapplied to the finished chain, so `-2^2` is `-(2^2)`.
    /// This also applies to a parenthesized negation: `(-2)^2` is `-(2^2)`.
    /// Signs on the exponents stay with their operand: `2^-1^2` is
    /// `2^((-1)^2)`.
    fn parse_factor_from_right(&mut self) -> ParseResult<Expr<'a>> {
        let (negated, base) = self.parse_power()?.strip_negation();

        let mut exponents = Vec::new();
        while let Lookahead::Infix(Operator::Pow) = self.tokens.current() {
            self.tokens.advance();
            exponents.push(self.parse_power()?);
        }

        let pow = |left, right| Expr::binary(Operator::Pow.glyph(), Operator::Pow.function(), left, right);
        let chain = match exponents.into_iter().rev().reduce(|right, left| pow(left, right)) {
            Some(exponent) => pow(base, exponent),
            None => base,
        };

        Ok(if negated { Expr::negation(chain) } else { chain })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::ExprKind,
        interpreter::parser::{Parser, PowerAssociativity},
    };

    fn eval_with(source: &str, associativity: PowerAssociativity) -> f64 {
        Parser::new(source, &[], associativity).parse()
                                               .unwrap_or_else(|e| panic!("{source}: {e}"))
                                               .eval()
    }

    #[test]
    fn left_associative_power() {
        let left = PowerAssociativity::Left;
        assert_eq!(eval_with("2^3^2", left), 64.0);
        assert_eq!(eval_with("-2^2", left), 4.0);
        assert_eq!(eval_with("(-2)^2", left), 4.0);
        assert_eq!(eval_with("2^-1", left), 0.5);
        assert_eq!(eval_with("-2^3", left), -8.0);
    }

    #[test]
    fn right_associative_power() {
        let right = PowerAssociativity::Right;
        assert_eq!(eval_with("2^3^2", right), 512.0);
        assert_eq!(eval_with("-2^2", right), -4.0);
        assert_eq!(eval_with("-2", right), -2.0);
        assert_eq!(eval_with("--2^2", right), 4.0);
        assert_eq!(eval_with("2^-1^2", right), 2.0);
        assert_eq!(eval_with("2^3^2^0", right), 8.0);
    }

    #[test]
    fn right_associativity_lifts_parenthesized_negation() {
        assert_eq!(eval_with("(-2)^2", PowerAssociativity::Right), -4.0);
        assert_eq!(eval_with("(-2)^2", PowerAssociativity::Left), 4.0);
    }

    #[test]
    fn right_associative_tree_shape() {
        let tree = Parser::new("-2^3^2", &[], PowerAssociativity::Right).parse().unwrap();
        assert_eq!(tree.name(), Some("-"));
        assert_eq!(tree.arity(), 1);

        let chain = &tree.arguments()[0];
        assert_eq!(chain.name(), Some("^"));
        assert_eq!(chain.arguments()[0].as_constant(), Some(2.0));

        let exponent = &chain.arguments()[1];
        assert_eq!(exponent.name(), Some("^"));
        assert_eq!(exponent.arguments()[0].as_constant(), Some(3.0));
        assert_eq!(exponent.arguments()[1].kind(), ExprKind::Constant);
    }

    #[test]
    fn operators_are_left_associative() {
        let left = PowerAssociativity::Left;
        assert_eq!(eval_with("10-4-3", left), 3.0);
        assert_eq!(eval_with("64/4/2", left), 8.0);
        assert_eq!(eval_with("17%5%3", left), 2.0);
        assert_eq!(eval_with("2+3*4", left), 14.0);
        assert_eq!(eval_with("(2+3)*4", left), 20.0);
        assert_eq!(eval_with("2*3^2", left), 18.0);
    }
}
