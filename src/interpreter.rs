/// The evaluator module walks compiled trees and folds constants.
///
/// Evaluation is a pure post-order traversal that never mutates the tree.
/// Constant folding runs once per successful compilation and rewrites pure
/// calls with constant arguments into constant nodes.
///
/// # Responsibilities
/// - Evaluates constants, variables, function calls and closure calls.
/// - Delivers closure contexts to host functions as their first argument.
/// - Folds pure constant subtrees bottom-up.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// Raw tokens come from a `logos` lexer; the tokenizer wraps it with a single
/// token of lookahead and resolves identifiers against the symbol tables as
/// soon as they are scanned.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers, operators, separators and parentheses.
/// - Resolves identifiers into variables, functions or closures.
/// - Tracks the byte offset used for error positions.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// A recursive-descent parser with one function per precedence level. Call
/// arity is enforced while parsing, so every call node it produces has exactly
/// as many arguments as its function takes.
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Collapses unary sign runs.
/// - Reports the first error together with its position.
pub mod parser;
/// The symbols module resolves identifiers.
///
/// Combines the caller's symbol table, scanned linearly, with the sorted
/// builtin table, searched by bisection.
///
/// # Responsibilities
/// - Defines symbol table entries and their bindings.
/// - Hosts the builtin math functions and the operator functions.
pub mod symbols;
