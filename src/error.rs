/// Compilation errors.
///
/// Defines the error returned when an expression fails to compile: what went
/// wrong and the byte offset at which the tokenizer stood when it was
/// detected. Evaluation has no error type; undefined math yields `NaN` or an
/// infinity instead.
pub mod compile_error;

pub use compile_error::{CompileError, ErrorKind};
