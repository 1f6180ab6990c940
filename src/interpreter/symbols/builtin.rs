use crate::{
    ast::Function,
    util::num::{CountingOperand, count_to_f64, counting_operand},
};

/// An entry of the builtin function table.
///
/// Every builtin is pure and takes no context.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Identifier the function is called by.
    pub name:     &'static str,
    /// The function and its arity.
    pub function: Function,
}

#[cfg(feature = "nat-log")]
const LOG: fn(f64) -> f64 = f64::ln;
#[cfg(not(feature = "nat-log"))]
const LOG: fn(f64) -> f64 = f64::log10;

/// The builtin function table, sorted by name.
///
/// [`find_builtin`] relies on the ordering for its binary search.
pub static BUILTINS: [Builtin; 24] = [Builtin { name:     "abs",
                                                function: Function::Arity1(f64::abs), },
                                      Builtin { name:     "acos",
                                                function: Function::Arity1(f64::acos), },
                                      Builtin { name:     "asin",
                                                function: Function::Arity1(f64::asin), },
                                      Builtin { name:     "atan",
                                                function: Function::Arity1(f64::atan), },
                                      Builtin { name:     "atan2",
                                                function: Function::Arity2(f64::atan2), },
                                      Builtin { name:     "ceil",
                                                function: Function::Arity1(f64::ceil), },
                                      Builtin { name:     "cos",
                                                function: Function::Arity1(f64::cos), },
                                      Builtin { name:     "cosh",
                                                function: Function::Arity1(f64::cosh), },
                                      Builtin { name:     "e",
                                                function: Function::Arity0(e), },
                                      Builtin { name:     "exp",
                                                function: Function::Arity1(f64::exp), },
                                      Builtin { name:     "fac",
                                                function: Function::Arity1(fac), },
                                      Builtin { name:     "floor",
                                                function: Function::Arity1(f64::floor), },
                                      Builtin { name:     "ln",
                                                function: Function::Arity1(f64::ln), },
                                      Builtin { name:     "log",
                                                function: Function::Arity1(LOG), },
                                      Builtin { name:     "log10",
                                                function: Function::Arity1(f64::log10), },
                                      Builtin { name:     "ncr",
                                                function: Function::Arity2(ncr), },
                                      Builtin { name:     "npr",
                                                function: Function::Arity2(npr), },
                                      Builtin { name:     "pi",
                                                function: Function::Arity0(pi), },
                                      Builtin { name:     "pow",
                                                function: Function::Arity2(f64::powf), },
                                      Builtin { name:     "sin",
                                                function: Function::Arity1(f64::sin), },
                                      Builtin { name:     "sinh",
                                                function: Function::Arity1(f64::sinh), },
                                      Builtin { name:     "sqrt",
                                                function: Function::Arity1(f64::sqrt), },
                                      Builtin { name:     "tan",
                                                function: Function::Arity1(f64::tan), },
                                      Builtin { name:     "tanh",
                                                function: Function::Arity1(f64::tanh), }];

/// Looks up a builtin by its exact name.
///
/// # Parameters
/// - `name`: The identifier to resolve.
///
/// # Returns
/// The matching table entry, or `None`.
///
/// # Example
/// ```
/// use exprtree::interpreter::symbols::builtin::find_builtin;
///
/// assert_eq!(find_builtin("atan2").map(|b| b.function.arity()), Some(2));
/// assert!(find_builtin("at").is_none());
/// assert!(find_builtin("atan22").is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.binary_search_by(|builtin| builtin.name.cmp(name))
            .ok()
            .map(|index| &BUILTINS[index])
}

/// Euler's number.
#[must_use]
pub const fn e() -> f64 {
    std::f64::consts::E
}

/// The ratio of a circle's circumference to its diameter.
#[must_use]
pub const fn pi() -> f64 {
    std::f64::consts::PI
}

/// Computes the factorial of `a` truncated toward zero.
///
/// Negative input yields `NaN`. Input above `u32::MAX`, or any result that
/// overflows a `u64`, yields positive infinity.
///
/// # Example
/// ```
/// use exprtree::interpreter::symbols::builtin::fac;
///
/// assert_eq!(fac(5.0), 120.0);
/// assert_eq!(fac(5.9), 120.0);
/// assert_eq!(fac(0.0), 1.0);
/// assert!(fac(-1.0).is_nan());
/// assert_eq!(fac(21.0), f64::INFINITY);
/// ```
#[must_use]
pub fn fac(a: f64) -> f64 {
    let n = match counting_operand(a) {
        CountingOperand::Negative => return f64::NAN,
        CountingOperand::TooLarge => return f64::INFINITY,
        CountingOperand::Count(n) => n,
    };

    let mut result: u64 = 1;
    for i in 1..=n {
        match result.checked_mul(i) {
            Some(product) => result = product,
            None => return f64::INFINITY,
        }
    }
    count_to_f64(result)
}

/// Computes the number of combinations of `r` items out of `n`.
///
/// Both operands are truncated toward zero. Negative operands or `n < r` yield
/// `NaN`; operands above `u32::MAX` or intermediate overflow yield infinity.
///
/// # Example
/// ```
/// use exprtree::interpreter::symbols::builtin::ncr;
///
/// assert_eq!(ncr(5.0, 2.0), 10.0);
/// assert_eq!(ncr(40.0, 20.0), 137_846_528_820.0);
/// assert!(ncr(2.0, 5.0).is_nan());
/// ```
#[must_use]
pub fn ncr(n: f64, r: f64) -> f64 {
    if n < r {
        return f64::NAN;
    }
    let (n, r) = match (counting_operand(n), counting_operand(r)) {
        (CountingOperand::Negative, _) | (_, CountingOperand::Negative) => return f64::NAN,
        (CountingOperand::TooLarge, _) | (_, CountingOperand::TooLarge) => return f64::INFINITY,
        (CountingOperand::Count(n), CountingOperand::Count(r)) => (n, r),
    };

    let r = if r > n / 2 { n - r } else { r };
    let mut result: u64 = 1;
    for i in 1..=r {
        let factor = n - r + i;
        if result > u64::MAX / factor {
            return f64::INFINITY;
        }
        result = result * factor / i;
    }
    count_to_f64(result)
}

/// Computes the number of ordered arrangements of `r` items out of `n`.
///
/// # Example
/// ```
/// use exprtree::interpreter::symbols::builtin::npr;
///
/// assert_eq!(npr(5.0, 2.0), 20.0);
/// ```
#[must_use]
pub fn npr(n: f64, r: f64) -> f64 {
    ncr(n, r) * fac(r)
}

/// `a + b`
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`
#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`
#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`
#[must_use]
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Floating-point remainder, with the sign of `a`.
#[must_use]
pub fn fmod(a: f64, b: f64) -> f64 {
    a % b
}

/// `-a`
#[must_use]
pub fn negate(a: f64) -> f64 {
    -a
}

/// Discards `a` and yields `b`.
#[must_use]
pub const fn comma(_: f64, b: f64) -> f64 {
    b
}
