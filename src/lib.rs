//! # exprtree
//!
//! exprtree compiles arithmetic expressions into evaluation trees.
//! Expressions may use numeric literals, the operators `+ - * / % ^`,
//! parentheses, the comma operator, a fixed set of math builtins and
//! caller-supplied variables, functions and closures. Constant subexpressions
//! are folded at compile time, and the compiled tree can be evaluated any
//! number of times as bound variables change.
//!
//! ```
//! use exprtree::{Symbol, Variable, compile, interpret};
//!
//! assert_eq!(interpret("2 + 3 * sin(pi/2)").unwrap(), 5.0);
//!
//! let x = Variable::new(0.0);
//! let expr = compile("x^2 + 1", &[Symbol::variable("x", &x)]).unwrap();
//! for (input, expected) in [(0.0, 1.0), (2.0, 5.0), (3.0, 10.0)] {
//!     x.set(input);
//!     assert_eq!(expr.eval(), expected);
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the compiled expression tree.
///
/// This module declares the `Expr` enum and the tagged function types stored
/// in its call nodes. The tree is built by the parser, folded by the
/// optimizer and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines constant, variable, function and closure nodes.
/// - Encodes call arity in the function tag, up to seven arguments.
/// - Gives each node exclusive ownership of its arguments.
pub mod ast;
/// Provides the error type for compilation.
///
/// Compilation fails with a `CompileError` carrying an `ErrorKind` and the
/// 1-based byte offset at which parsing stopped.
///
/// # Responsibilities
/// - Classifies lexical, syntactic and arity errors.
/// - Reports the error position with `0` reserved for success.
pub mod error;
/// Orchestrates tokenizing, parsing, folding and evaluation.
///
/// # Responsibilities
/// - Resolves identifiers against caller and builtin symbols.
/// - Parses text into trees and folds constant subtrees.
/// - Evaluates compiled trees.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Converts floating-point operands to the integer counts used by the
///   counting builtins.
pub mod util;

pub use crate::{
    ast::{ClosureFunction, Context, ContextData, Expr, ExprKind, Function, MAX_ARITY},
    error::{CompileError, ErrorKind},
    interpreter::{
        parser::{POWER_ASSOCIATIVITY, PowerAssociativity},
        symbols::{Binding, Symbol, Variable},
    },
};
use crate::interpreter::parser::Parser;

/// Compiles an expression into an optimized tree.
///
/// Identifiers are resolved against `symbols` first, in order, then against
/// the builtins. Pure calls whose arguments are all constant are folded
/// before the tree is returned.
///
/// # Errors
/// Returns a [`CompileError`] carrying the 1-based position of the first
/// failure when the text is not a complete, valid expression. No partial tree
/// is returned.
///
/// # Examples
/// ```
/// use exprtree::{ExprKind, Symbol, Variable, compile};
///
/// let expr = compile("sqrt(16) + 1", &[]).unwrap();
/// assert_eq!(expr.kind(), ExprKind::Constant);
/// assert_eq!(expr.eval(), 5.0);
///
/// let pi = Variable::new(1.0);
/// let expr = compile("pi", &[Symbol::variable("pi", &pi)]).unwrap();
/// assert_eq!(expr.eval(), 1.0);
///
/// let err = compile("pow(2)", &[]).unwrap_err();
/// assert_eq!(err.position(), 6);
/// ```
pub fn compile<'a>(expression: &str, symbols: &[Symbol<'a>]) -> Result<Expr<'a>, CompileError> {
    match Parser::new(expression, symbols, POWER_ASSOCIATIVITY).parse() {
        Ok(mut root) => {
            root.optimize();
            debug!(nodes = root.node_count(), "compiled expression");
            Ok(root)
        },
        Err(error) => {
            debug!(position = error.position(), kind = %error.kind(), "failed to compile expression");
            Err(error)
        },
    }
}

/// Evaluates a compiled expression, yielding `NaN` when there is none.
///
/// # Example
/// ```
/// use exprtree::{compile, evaluate};
///
/// assert_eq!(evaluate(compile("1 + 1", &[]).ok().as_ref()), 2.0);
/// assert!(evaluate(compile("1 +", &[]).ok().as_ref()).is_nan());
/// ```
#[must_use]
pub fn evaluate(expr: Option<&Expr<'_>>) -> f64 {
    expr.map_or(f64::NAN, Expr::eval)
}

/// Releases a compiled expression and every node it owns.
///
/// Dropping the expression does the same; this exists for hosts that manage
/// compiled expressions as optional handles.
#[allow(clippy::needless_pass_by_value)]
pub fn release(expr: Option<Expr<'_>>) {
    drop(expr);
}

/// Compiles an expression without caller symbols, evaluates it once and
/// releases it.
///
/// # Errors
/// Returns the [`CompileError`] from compilation.
///
/// # Example
/// ```
/// use exprtree::interpret;
///
/// assert_eq!(interpret("fac 5 / ncr(5, 2)").unwrap(), 12.0);
/// assert_eq!(interpret("2+2 extra").unwrap_err().position(), 9);
/// ```
pub fn interpret(expression: &str) -> Result<f64, CompileError> {
    let expr = compile(expression, &[])?;
    Ok(expr.eval())
}
