/// Numeric conversion helpers.
///
/// This module converts floating-point operands into the unsigned integers used
/// by the counting builtins (`fac`, `ncr`, `npr`). Conversions never panic; out
/// of range operands are classified instead so the caller can pick the IEEE
/// result (`NaN` or infinity) it needs.
pub mod num;
