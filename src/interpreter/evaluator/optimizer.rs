use tracing::trace;

use crate::ast::{Expr, ExprKind};

impl Expr<'_> {
    /// Folds constant subexpressions in place.
    ///
    /// Constants and variables are left alone. A pure call first folds each of
    /// its arguments; if all of them end up constant, the call is evaluated
    /// once and the node becomes a constant, dropping its arguments. Impure
    /// calls are not descended into.
    pub(crate) fn optimize(&mut self) {
        let arguments = match &mut *self {
            Self::Function { pure: true,
                             arguments,
                             .. }
            | Self::Closure { pure: true,
                              arguments,
                              .. } => arguments,
            _ => return,
        };

        let mut known = true;
        for argument in arguments.iter_mut() {
            argument.optimize();
            known &= argument.kind() == ExprKind::Constant;
        }

        if known {
            let value = self.eval();
            trace!(name = ?self.name(), value, "folded constant call");
            *self = Self::Constant(value);
        }
    }
}
