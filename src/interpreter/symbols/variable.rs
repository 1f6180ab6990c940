use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Host storage for a bound variable.
///
/// The value is kept as the bits of an `f64` in an atomic, so a compiled tree
/// that reads it can be shared between threads. Every evaluation reads the
/// current value; writes from the host are seen by the next read.
///
/// # Example
/// ```
/// use exprtree::{Symbol, Variable, compile};
///
/// let x = Variable::new(1.5);
/// let expr = compile("x * 2", &[Symbol::variable("x", &x)]).unwrap();
/// assert_eq!(expr.eval(), 3.0);
///
/// x.set(-4.0);
/// assert_eq!(expr.eval(), -8.0);
/// ```
pub struct Variable {
    bits: AtomicU64,
}

impl Variable {
    /// Creates storage holding `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { bits: AtomicU64::new(value.to_bits()) }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Replaces the current value.
    pub fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variable").field(&self.get()).finish()
    }
}
