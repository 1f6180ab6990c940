use crate::{
    ast::{ClosureFunction, Context, Function},
    interpreter::symbols::{Variable, builtin::find_builtin},
};

/// What an identifier resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Binding<'a> {
    /// Host storage, read on every evaluation.
    Variable(&'a Variable),
    /// A plain host function.
    Function(Function),
    /// A host function receiving `context` as its first argument.
    Closure(ClosureFunction, Context<'a>),
}

/// A caller-supplied symbol table entry.
///
/// Purity is declared by the caller and trusted. Marking a function with side
/// effects as pure makes constant folding call it once at compile time instead
/// of on every evaluation.
///
/// # Example
/// ```
/// use exprtree::{Function, Symbol, Variable, compile};
///
/// fn twice(a: f64) -> f64 {
///     a * 2.0
/// }
///
/// let x = Variable::new(3.0);
/// let symbols = [Symbol::variable("x", &x),
///                Symbol::function("twice", Function::Arity1(twice)).pure()];
///
/// let expr = compile("twice(x) + 1", &symbols).unwrap();
/// assert_eq!(expr.eval(), 7.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Symbol<'a> {
    /// The identifier, matched exactly.
    pub name:    &'a str,
    /// What the identifier resolves to.
    pub binding: Binding<'a>,
    /// Whether calls may be folded when all arguments are constant.
    pub pure:    bool,
}

impl<'a> Symbol<'a> {
    /// Binds `name` to host storage.
    #[must_use]
    pub const fn variable(name: &'a str, storage: &'a Variable) -> Self {
        Self { name,
               binding: Binding::Variable(storage),
               pure: false }
    }

    /// Binds `name` to an impure host function.
    #[must_use]
    pub const fn function(name: &'a str, function: Function) -> Self {
        Self { name,
               binding: Binding::Function(function),
               pure: false }
    }

    /// Binds `name` to an impure host function that receives `context` first.
    #[must_use]
    pub const fn closure(name: &'a str, function: ClosureFunction, context: Context<'a>) -> Self {
        Self { name,
               binding: Binding::Closure(function, context),
               pure: false }
    }

    /// Marks the symbol as pure.
    #[must_use]
    pub const fn pure(mut self) -> Self {
        self.pure = true;
        self
    }
}

/// Resolves an identifier, first against `symbols` in order, then against the
/// builtin table.
///
/// The first exact match in `symbols` wins, so user entries shadow builtins of
/// the same name.
///
/// # Parameters
/// - `symbols`: The caller's table, possibly empty.
/// - `name`: The identifier to resolve.
///
/// # Returns
/// The resolved symbol, or `None` when the identifier is unknown.
#[must_use]
pub fn resolve<'a>(symbols: &[Symbol<'a>], name: &str) -> Option<Symbol<'a>> {
    symbols.iter()
           .find(|symbol| symbol.name == name)
           .copied()
           .or_else(|| {
               find_builtin(name).map(|builtin| Symbol { name:    builtin.name,
                                                         binding: Binding::Function(builtin.function),
                                                         pure:    true, })
           })
}
