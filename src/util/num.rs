/// Largest operand the counting builtins accept before saturating to infinity.
pub const MAX_COUNTING_OPERAND: f64 = u32::MAX as f64;

/// Classification of a floating-point value used as a counting operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingOperand {
    /// The value is below zero.
    Negative,
    /// The value is above [`MAX_COUNTING_OPERAND`].
    TooLarge,
    /// The value truncated toward zero.
    Count(u64),
}

/// Truncates a floating-point value into a counting operand.
///
/// Fractional parts are discarded, so `4.9` counts as `4`. `NaN` compares false
/// against both bounds and truncates to `0`.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// The classified operand.
///
/// # Example
/// ```
/// use exprtree::util::num::{CountingOperand, counting_operand};
///
/// assert_eq!(counting_operand(4.9), CountingOperand::Count(4));
/// assert_eq!(counting_operand(-1.0), CountingOperand::Negative);
/// assert_eq!(counting_operand(1e10), CountingOperand::TooLarge);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn counting_operand(value: f64) -> CountingOperand {
    if value < 0.0 {
        return CountingOperand::Negative;
    }
    if value > MAX_COUNTING_OPERAND {
        return CountingOperand::TooLarge;
    }
    CountingOperand::Count(u64::from(value as u32))
}

/// Converts an exact integer count back to `f64`.
///
/// Counts above 2^53 round to the nearest representable value, the same way a
/// C `(double)` cast does.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn count_to_f64(count: u64) -> f64 {
    count as f64
}
