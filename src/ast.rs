use std::{any::Any, fmt};

use smallvec::{SmallVec, smallvec};

use crate::interpreter::symbols::Variable;

/// The largest number of arguments a function or closure node can take.
pub const MAX_ARITY: usize = 7;

/// Opaque host data captured by a closure.
///
/// It must be `Send + Sync` so that compiled trees can be evaluated from
/// several threads at once.
pub type ContextData = dyn Any + Send + Sync;

/// A borrowed closure context, handed to the closure on every call.
pub type Context<'a> = &'a ContextData;

/// The evaluated children of a call node, stored inline.
///
/// The length always equals the arity of the node's callable.
pub type Arguments<'a> = SmallVec<[Box<Expr<'a>>; MAX_ARITY]>;

/// A host function pointer tagged with its arity.
///
/// The arity is fully determined by the variant, so the evaluator dispatches
/// on the tag alone.
#[derive(Clone, Copy)]
pub enum Function {
    /// `f()`
    Arity0(fn() -> f64),
    /// `f(a)`
    Arity1(fn(f64) -> f64),
    /// `f(a, b)`
    Arity2(fn(f64, f64) -> f64),
    /// `f(a, b, c)`
    Arity3(fn(f64, f64, f64) -> f64),
    /// `f(a, b, c, d)`
    Arity4(fn(f64, f64, f64, f64) -> f64),
    /// `f(a, b, c, d, e)`
    Arity5(fn(f64, f64, f64, f64, f64) -> f64),
    /// `f(a, b, c, d, e, f)`
    Arity6(fn(f64, f64, f64, f64, f64, f64) -> f64),
    /// `f(a, b, c, d, e, f, g)`
    Arity7(fn(f64, f64, f64, f64, f64, f64, f64) -> f64),
}

impl Function {
    /// Returns the number of arguments the function takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Arity0(_) => 0,
            Self::Arity1(_) => 1,
            Self::Arity2(_) => 2,
            Self::Arity3(_) => 3,
            Self::Arity4(_) => 4,
            Self::Arity5(_) => 5,
            Self::Arity6(_) => 6,
            Self::Arity7(_) => 7,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function/{}", self.arity())
    }
}

/// A host function that receives a captured [`Context`] as its first argument,
/// tagged with the number of evaluated arguments that follow it.
#[derive(Clone, Copy)]
pub enum ClosureFunction {
    /// `f(ctx)`
    Arity0(fn(&ContextData) -> f64),
    /// `f(ctx, a)`
    Arity1(fn(&ContextData, f64) -> f64),
    /// `f(ctx, a, b)`
    Arity2(fn(&ContextData, f64, f64) -> f64),
    /// `f(ctx, a, b, c)`
    Arity3(fn(&ContextData, f64, f64, f64) -> f64),
    /// `f(ctx, a, b, c, d)`
    Arity4(fn(&ContextData, f64, f64, f64, f64) -> f64),
    /// `f(ctx, a, b, c, d, e)`
    Arity5(fn(&ContextData, f64, f64, f64, f64, f64) -> f64),
    /// `f(ctx, a, b, c, d, e, f)`
    Arity6(fn(&ContextData, f64, f64, f64, f64, f64, f64) -> f64),
    /// `f(ctx, a, b, c, d, e, f, g)`
    Arity7(fn(&ContextData, f64, f64, f64, f64, f64, f64, f64) -> f64),
}

impl ClosureFunction {
    /// Returns the number of evaluated arguments, not counting the context.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Arity0(_) => 0,
            Self::Arity1(_) => 1,
            Self::Arity2(_) => 2,
            Self::Arity3(_) => 3,
            Self::Arity4(_) => 4,
            Self::Arity5(_) => 5,
            Self::Arity6(_) => 6,
            Self::Arity7(_) => 7,
        }
    }
}

impl fmt::Debug for ClosureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure/{}", self.arity())
    }
}

/// The discriminant of an [`Expr`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    /// A literal or folded value.
    Constant,
    /// A reference to host-owned storage.
    Variable,
    /// A call to a plain host function.
    Function,
    /// A call to a host function with a captured context.
    Closure,
}

/// A node of a compiled expression tree.
///
/// Every node exclusively owns its children; the caller owns the root. Dropping
/// the root releases the whole tree. Variable nodes borrow host storage for
/// `'a` and closure nodes borrow their context for `'a`, so the borrow checker
/// keeps both alive for as long as the tree exists.
#[derive(Debug)]
pub enum Expr<'a> {
    /// A constant value.
    Constant(f64),
    /// Host storage read on every evaluation.
    Variable(&'a Variable),
    /// A plain function call.
    Function {
        /// Symbol or operator the node was built from.
        name:      &'a str,
        /// The host function.
        function:  Function,
        /// Whether the node may be folded when its arguments are constant.
        pure:      bool,
        /// Argument expressions, in call order.
        arguments: Arguments<'a>,
    },
    /// A closure call.
    Closure {
        /// Symbol the node was built from.
        name:      &'a str,
        /// The host function.
        function:  ClosureFunction,
        /// Context passed as the first argument of every call.
        context:   Context<'a>,
        /// Whether the node may be folded when its arguments are constant.
        pure:      bool,
        /// Argument expressions, in call order.
        arguments: Arguments<'a>,
    },
}

/// Name given to unary negation nodes. No identifier can produce it.
pub(crate) const NEGATION: &str = "-";

/// Name given to comma nodes.
pub(crate) const COMMA: &str = ",";

impl<'a> Expr<'a> {
    /// Builds a pure two-argument node for an infix operator.
    pub(crate) fn binary(name: &'a str,
                         function: fn(f64, f64) -> f64,
                         left: Self,
                         right: Self)
                         -> Self {
        Self::Function { name,
                         function: Function::Arity2(function),
                         pure: true,
                         arguments: smallvec![Box::new(left), Box::new(right)] }
    }

    /// Wraps `operand` in a pure negation node.
    pub(crate) fn negation(operand: Self) -> Self {
        Self::Function { name:      NEGATION,
                         function:  Function::Arity1(crate::interpreter::symbols::builtin::negate),
                         pure:      true,
                         arguments: smallvec![Box::new(operand)], }
    }

    /// Splits a negation node into `(true, operand)`; any other node comes back
    /// as `(false, node)`.
    pub(crate) fn strip_negation(self) -> (bool, Self) {
        match self {
            Self::Function { name: NEGATION,
                             function: Function::Arity1(_),
                             pure: true,
                             mut arguments, } if arguments.len() == 1 => (true, *arguments.remove(0)),
            other => (false, other),
        }
    }

    /// Returns the node's discriminant.
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Constant(_) => ExprKind::Constant,
            Self::Variable(_) => ExprKind::Variable,
            Self::Function { .. } => ExprKind::Function,
            Self::Closure { .. } => ExprKind::Closure,
        }
    }

    /// Returns the number of arguments of a call node, `0` otherwise.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable(_) => 0,
            Self::Function { function, .. } => function.arity(),
            Self::Closure { function, .. } => function.arity(),
        }
    }

    /// Returns whether the node is a call flagged as pure.
    #[must_use]
    pub const fn is_pure(&self) -> bool {
        match self {
            Self::Constant(_) | Self::Variable(_) => false,
            Self::Function { pure, .. } | Self::Closure { pure, .. } => *pure,
        }
    }

    /// Returns the symbol name of a call node.
    #[must_use]
    pub const fn name(&self) -> Option<&'a str> {
        match self {
            Self::Constant(_) | Self::Variable(_) => None,
            Self::Function { name, .. } | Self::Closure { name, .. } => Some(*name),
        }
    }

    /// Returns the argument expressions of a call node.
    #[must_use]
    pub fn arguments(&self) -> &[Box<Self>] {
        match self {
            Self::Constant(_) | Self::Variable(_) => &[],
            Self::Function { arguments, .. } | Self::Closure { arguments, .. } => arguments.as_slice(),
        }
    }

    /// Returns the value of a constant node.
    #[must_use]
    pub const fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Counts the nodes in the tree rooted at `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.arguments().iter().map(|argument| argument.node_count()).sum::<usize>()
    }
}
