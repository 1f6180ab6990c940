/// The builtin function table and the math and operator functions behind it.
///
/// The table is immutable static data sorted by name, so lookups are a binary
/// search with no initialization step.
pub mod builtin;

/// Caller-supplied symbols and identifier resolution.
///
/// Resolution scans the caller's table in order before falling back to the
/// builtins, which lets user entries shadow builtin names.
pub mod table;

/// Thread-safe storage for bound variables.
pub mod variable;

pub use table::{Binding, Symbol, resolve};
pub use variable::Variable;
