/// Tree-walking evaluation.
///
/// Evaluates a tree post-order without mutating it. Variables are read at call
/// time, so repeated evaluation observes changes to host storage.
pub mod core;

/// Constant folding.
///
/// Rewrites pure call nodes whose arguments are all constant into constant
/// nodes, bottom-up, in a single pass.
pub mod optimizer;
