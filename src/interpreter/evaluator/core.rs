use crate::ast::{ClosureFunction, Context, Expr, Function};

impl Expr<'_> {
    /// Evaluates the tree rooted at this node.
    ///
    /// Constants yield their value and variables the current content of their
    /// storage. Calls evaluate their arguments in order and pass the results to
    /// the host function; closures receive their context as the first argument.
    ///
    /// Undefined math follows IEEE semantics, so division by zero yields an
    /// infinity and domain errors yield `NaN`. A call node whose argument count
    /// does not match its function evaluates to `NaN`.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use exprtree::{Symbol, Variable, compile};
    ///
    /// let x = Variable::new(1.0);
    /// let expr = compile("x * 10", &[Symbol::variable("x", &x)]).unwrap();
    /// assert_eq!(expr.eval(), 10.0);
    ///
    /// x.set(2.5);
    /// assert_eq!(expr.eval(), 25.0);
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable(storage) => storage.get(),
            Self::Function { function, arguments, .. } => call_function(*function, arguments),
            Self::Closure { function,
                            context,
                            arguments,
                            .. } => call_closure(*function, *context, arguments),
        }
    }
}

/// Calls `function` with its arguments evaluated left to right.
fn call_function(function: Function, arguments: &[Box<Expr<'_>>]) -> f64 {
    if arguments.len() != function.arity() {
        return f64::NAN;
    }
    let a = |index: usize| arguments[index].eval();

    match function {
        Function::Arity0(f) => f(),
        Function::Arity1(f) => f(a(0)),
        Function::Arity2(f) => f(a(0), a(1)),
        Function::Arity3(f) => f(a(0), a(1), a(2)),
        Function::Arity4(f) => f(a(0), a(1), a(2), a(3)),
        Function::Arity5(f) => f(a(0), a(1), a(2), a(3), a(4)),
        Function::Arity6(f) => f(a(0), a(1), a(2), a(3), a(4), a(5)),
        Function::Arity7(f) => f(a(0), a(1), a(2), a(3), a(4), a(5), a(6)),
    }
}

/// Calls `function` with `context` first, then its arguments evaluated left to
/// right.
fn call_closure(function: ClosureFunction, context: Context<'_>, arguments: &[Box<Expr<'_>>]) -> f64 {
    if arguments.len() != function.arity() {
        return f64::NAN;
    }
    let a = |index: usize| arguments[index].eval();

    match function {
        ClosureFunction::Arity0(f) => f(context),
        ClosureFunction::Arity1(f) => f(context, a(0)),
        ClosureFunction::Arity2(f) => f(context, a(0), a(1)),
        ClosureFunction::Arity3(f) => f(context, a(0), a(1), a(2)),
        ClosureFunction::Arity4(f) => f(context, a(0), a(1), a(2), a(3)),
        ClosureFunction::Arity5(f) => f(context, a(0), a(1), a(2), a(3), a(4)),
        ClosureFunction::Arity6(f) => f(context, a(0), a(1), a(2), a(3), a(4), a(5)),
        ClosureFunction::Arity7(f) => f(context, a(0), a(1), a(2), a(3), a(4), a(5), a(6)),
    }
}
