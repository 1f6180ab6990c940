/// Parser state, entry point and the comma-list production.
///
/// Holds the tokenizer and the exponent associativity policy, and owns the
/// error-position bookkeeping shared by every production.
pub mod core;

/// Binary operator productions.
///
/// Implements the left-associative `+ -` and `* / %` levels and both
/// associativity policies for `^`.
pub mod binary;

/// Unary sign and operand productions.
///
/// Collapses runs of `+` and `-` signs, and parses literals, variables,
/// parenthesized lists and function or closure calls with exact arity.
pub mod unary;

pub use self::core::{POWER_ASSOCIATIVITY, ParseResult, Parser, PowerAssociativity};
