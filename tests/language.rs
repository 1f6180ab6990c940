use exprtree::{
    ClosureFunction, ContextData, ErrorKind, ExprKind, Function, POWER_ASSOCIATIVITY,
    PowerAssociativity, Symbol, Variable, compile, evaluate, interpret, release,
};

fn assert_value(src: &str, expected: f64) {
    match interpret(src) {
        Ok(value) => assert!((value - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                             "{src}: expected {expected}, found {value}"),
        Err(e) => panic!("{src} failed to compile: {e}"),
    }
}

fn assert_failure(src: &str) -> usize {
    match interpret(src) {
        Ok(value) => panic!("{src} compiled to {value} but was expected to fail"),
        Err(e) => {
            assert!(e.position() >= 1);
            e.position()
        },
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_value("1", 1.0);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 + 3 * sin(pi/2)", 5.0);
    assert_value("7 % 4", 3.0);
    assert_value("-7 % 4", -3.0);
    assert_value("1 / 4 * 2", 0.5);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("  \t1\n+\r2 ", 3.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5E-1", 0.25);
}

#[test]
fn unary_signs() {
    assert_value("-1", -1.0);
    assert_value("--1", 1.0);
    assert_value("+-+1", -1.0);
    assert_value("1 - -1", 2.0);
    assert_value("-(2 + 3)", -5.0);
}

#[test]
fn power_follows_the_configured_associativity() {
    match POWER_ASSOCIATIVITY {
        PowerAssociativity::Left => {
            assert_value("2^3^2", 64.0);
            assert_value("-2^2", 4.0);
        },
        PowerAssociativity::Right => {
            assert_value("2^3^2", 512.0);
            assert_value("-2^2", -4.0);
        },
    }
}

#[test]
fn comma_yields_the_last_operand() {
    assert_value("1, 2", 2.0);
    assert_value("(1, 2, 3) * 2", 6.0);
}

#[test]
fn builtin_functions() {
    assert_value("abs(-2)", 2.0);
    assert_value("atan2(1, 1) * 4", std::f64::consts::PI);
    assert_value("ceil(1.2) + floor(1.8)", 3.0);
    assert_value("cos(0) + cosh(0)", 2.0);
    assert_value("e", std::f64::consts::E);
    assert_value("e()", std::f64::consts::E);
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("ln(e)", 1.0);
    assert_value("log10(1000)", 3.0);
    assert_value("pow(2, 10)", 1024.0);
    assert_value("sqrt 16", 4.0);
    assert_value("tan(0) + tanh(0) + sinh(0) + asin(0) + acos(1) + atan(0)", 0.0);
    assert_value("fac(6)", 720.0);
    assert_value("ncr(6, 2)", 15.0);
    assert_value("npr(6, 2)", 30.0);
}

#[test]
fn log_follows_the_configured_base() {
    if cfg!(feature = "nat-log") {
        assert_value("log(e)", 1.0);
    } else {
        assert_value("log(100)", 2.0);
    }
}

#[test]
fn undefined_math_is_not_an_error() {
    assert_eq!(interpret("1/0").unwrap(), f64::INFINITY);
    assert!(interpret("sqrt(-1)").unwrap().is_nan());
    assert!(interpret("fac(-1)").unwrap().is_nan());
    assert_eq!(interpret("fac(100)").unwrap(), f64::INFINITY);
}

#[test]
fn arity_violations_are_rejected() {
    assert_eq!(assert_failure("pow(2)"), 6);
    assert_eq!(assert_failure("pow(2,3,4)"), 8);
    assert_failure("atan2 1");
    assert_failure("pi(1)");
    assert_failure("sin()");
}

#[test]
fn unknown_identifiers_fail() {
    let err = compile("foo(1)", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    assert_eq!(err.position(), 3);
}

#[test]
fn trailing_garbage_is_rejected() {
    let err = compile("2+2 extra", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingInput);
    assert_eq!(err.position(), "2+2 extra".len());
    assert_eq!(assert_failure("1 1"), 3);
}

#[test]
fn malformed_input_fails() {
    assert_eq!(assert_failure(""), 1);
    assert_eq!(assert_failure("("), 1);
    assert_eq!(assert_failure(")"), 1);
    assert_eq!(assert_failure("1+"), 2);
    assert_eq!(assert_failure("(1"), 2);
    assert_eq!(assert_failure("1^^5"), 3);
    assert_eq!(assert_failure("$1"), 1);
    assert_eq!(compile("0x10", &[]).unwrap_err(),
               exprtree::CompileError::new(ErrorKind::TrailingInput, 4));
    assert_failure("sin(cos5");
}

#[test]
fn user_variables_shadow_builtins() {
    let pi = Variable::new(1.0);
    let expr = compile("pi", &[Symbol::variable("pi", &pi)]).unwrap();
    assert_eq!(expr.eval(), 1.0);
}

#[test]
fn first_matching_user_symbol_wins() {
    let (a, b) = (Variable::new(1.0), Variable::new(2.0));
    let expr = compile("x", &[Symbol::variable("x", &a), Symbol::variable("x", &b)]).unwrap();
    assert_eq!(expr.eval(), 1.0);
}

#[test]
fn rebound_variables_are_observed() {
    let x = Variable::new(2.0);
    let y = Variable::new(3.0);
    let symbols = [Symbol::variable("x", &x), Symbol::variable("y", &y)];
    let expr = compile("x * y + sin(0)", &symbols).unwrap();
    assert_eq!(expr.eval(), 6.0);

    x.set(5.0);
    assert_eq!(expr.eval(), 15.0);
    y.set(-1.0);
    assert_eq!(expr.eval(), -5.0);
}

fn mix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64) -> f64 {
    a - b + c - d + e - f + g
}

fn lerp(context: &ContextData, t: f64) -> f64 {
    match context.downcast_ref::<(f64, f64)>() {
        Some((from, to)) => from + (to - from) * t,
        None => f64::NAN,
    }
}

fn counter(context: &ContextData) -> f64 {
    context.downcast_ref::<Variable>().map_or(f64::NAN, |count| {
                                           count.set(count.get() + 1.0);
                                           count.get()
                                       })
}

#[test]
fn seven_argument_functions() {
    let symbols = [Symbol::function("mix", Function::Arity7(mix)).pure()];
    let expr = compile("mix(1, 2, 3, 4, 5, 6, 7)", &symbols).unwrap();
    assert_eq!(expr.kind(), ExprKind::Constant);
    assert_eq!(expr.eval(), 4.0);

    assert!(compile("mix(1, 2, 3, 4, 5, 6)", &symbols).is_err());
    assert!(compile("mix(1, 2, 3, 4, 5, 6, 7, 8)", &symbols).is_err());
}

#[test]
fn closures_receive_their_context() {
    let range = (10.0_f64, 20.0_f64);
    let t = Variable::new(0.5);
    let symbols = [Symbol::closure("lerp", ClosureFunction::Arity1(lerp), &range),
                   Symbol::variable("t", &t)];
    let expr = compile("lerp t", &symbols).unwrap();
    assert_eq!(expr.kind(), ExprKind::Closure);
    assert_eq!(expr.eval(), 15.0);
    t.set(1.0);
    assert_eq!(expr.eval(), 20.0);
}

fn place(context: &ContextData, a: f64, b: f64, c: f64) -> f64 {
    context.downcast_ref::<f64>().map_or(f64::NAN, |base| base * 1e3 + a * 100.0 + b * 10.0 + c)
}

#[test]
fn closures_receive_context_then_arguments_in_order() {
    let base = 4.0_f64;
    let x = Variable::new(3.0);
    let symbols = [Symbol::closure("place", ClosureFunction::Arity3(place), &base),
                   Symbol::variable("x", &x)];
    let expr = compile("place(1, 2, x)", &symbols).unwrap();
    assert_eq!(expr.arity(), 3);
    assert_eq!(expr.eval(), 4123.0);

    x.set(9.0);
    assert_eq!(expr.eval(), 4129.0);
    assert_eq!(compile("place(1, 2)", &symbols).unwrap_err().kind(),
               ErrorKind::ArityMismatch { expected: 3 });
}

#[test]
fn impure_closures_run_on_every_evaluation() {
    let count = Variable::new(0.0);
    let symbols = [Symbol::closure("tick", ClosureFunction::Arity0(counter), &count)];
    let expr = compile("tick() * 10", &symbols).unwrap();
    assert_eq!(count.get(), 0.0);
    assert_eq!(expr.eval(), 10.0);
    assert_eq!(expr.eval(), 20.0);
    assert_eq!(count.get(), 2.0);
}

#[test]
fn compiled_trees_are_folded() {
    let x = Variable::new(0.0);
    let symbols = [Symbol::variable("x", &x)];

    let expr = compile("1 + 2 * 3", &symbols).unwrap();
    assert_eq!(expr.node_count(), 1);

    let expr = compile("x + 2 * 3", &symbols).unwrap();
    assert_eq!(expr.kind(), ExprKind::Function);
    assert!(expr.is_pure());
    assert_eq!(expr.arity(), 2);
    assert_eq!(expr.arguments()[0].kind(), ExprKind::Variable);
    assert_eq!(expr.arguments()[1].as_constant(), Some(6.0));
}

#[test]
fn evaluate_and_release_handles() {
    let compiled = compile("3 * 3", &[]).ok();
    assert_eq!(evaluate(compiled.as_ref()), 9.0);
    release(compiled);

    assert!(evaluate(None).is_nan());
    release(None);
}

#[test]
fn error_display_mentions_the_position() {
    let err = compile("1 + (2", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectedCloseParen);
    assert_eq!(err.to_string(),
               "Error at position 6: expected closing parenthesis ')'.");
}

#[test]
fn compiled_trees_evaluate_on_several_threads() {
    let constant = compile("sin(1) + 2", &[]).unwrap();
    let x = Variable::new(2.0);
    let range = (0.0_f64, 10.0_f64);
    let symbols = [Symbol::variable("x", &x),
                   Symbol::closure("lerp", ClosureFunction::Arity1(lerp), &range).pure()];
    let bound = compile("x ^ 2 + lerp(0.5)", &symbols).unwrap();

    std::thread::scope(|s| {
        let workers: Vec<_> = (0..4).map(|_| s.spawn(|| (constant.eval(), bound.eval())))
                                    .collect();
        for worker in workers {
            let (a, b) = worker.join().unwrap();
            assert_eq!(a, 1_f64.sin() + 2.0);
            assert_eq!(b, 9.0);
        }
    });

    x.set(3.0);
    let moved = std::thread::scope(|s| s.spawn(move || bound.eval()).join().unwrap());
    assert_eq!(moved, 14.0);
}
