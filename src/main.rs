use clap::Parser;
use exprtree::{Symbol, Variable, compile};
use tracing_subscriber::EnvFilter;

/// exprtree evaluates an arithmetic expression, optionally with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, written as `name=value`. May be repeated.
    #[arg(short, long = "var", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    expression: String,
}

/// Splits a `name=value` argument.
fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected `name=value`, found `{arg}`"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for `{name}`: {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let storage: Vec<Variable> = args.vars.iter().map(|(_, value)| Variable::new(*value)).collect();
    let symbols: Vec<Symbol<'_>> = args.vars
                                       .iter()
                                       .zip(&storage)
                                       .map(|((name, _), cell)| Symbol::variable(name, cell))
                                       .collect();

    match compile(&args.expression, &symbols) {
        Ok(expr) => println!("{}", expr.eval()),
        Err(e) => {
            eprintln!("{}", args.expression);
            eprintln!("{:>width$}", "^", width = e.position());
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
