mod error;

use cas_expr::symbolic::{
    expr::{add, constant, multiply, variable, Expr},
    simplify_with_steps,
};
use error::{Error, InvalidPoint, UnknownFlag};
use std::process::ExitCode;

/// The point `g'(x)` is evaluated at when none are given.
const DEFAULT_POINT: f64 = 5.0;

/// Options read from the command line.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    /// Points to evaluate `g'(x)` at.
    points: Vec<f64>,

    /// Whether to print the simplification steps.
    steps: bool,
}

/// Reads the options from the given arguments (without the program name). The arguments are
/// treated as if they were joined with single spaces, which is the input the error spans refer to.
/// Spans count characters, not bytes, since that is how `ariadne` indexes a [`Source`].
///
/// [`Source`]: ariadne::Source
fn parse_args(args: &[String]) -> Result<Options, Vec<Error>> {
    let mut options = Options { points: Vec::new(), steps: false };
    let mut errors = Vec::new();

    let mut start = 0;
    for arg in args {
        let span = start..start + arg.chars().count();
        start = span.end + 1;

        if arg == "--steps" {
            options.steps = true;
        } else if arg.starts_with("--") {
            errors.push(Error::new(span, UnknownFlag { flag: arg.clone() }));
        } else {
            match arg.parse::<f64>() {
                Ok(point) => options.points.push(point),
                Err(_) => errors.push(Error::new(span, InvalidPoint { arg: arg.clone() })),
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if options.points.is_empty() {
        options.points.push(DEFAULT_POINT);
    }
    Ok(options)
}

/// Simplifies the expression and prints the result, along with the steps taken if requested.
fn print_simplified(label: &str, expr: &Expr, options: &Options) -> Expr {
    let (simplified, steps) = simplify_with_steps(expr);
    println!("{label} = {simplified}");
    if options.steps {
        for step in steps {
            println!("    {:?}", step);
        }
    }
    simplified
}

fn run(options: &Options) {
    // f(x) = x + 2x
    let f = add(variable(), multiply(constant(2.0), variable()));

    println!("--- f(x) = x + 2x: differentiate, then simplify ---");
    println!("f(x)              = {f}");
    let df = f.derivative();
    println!("f'(x)             = {df}");
    print_simplified("f'(x) simplified ", &df, options);

    println!();
    println!("--- f(x) = x + 2x: simplify, differentiate, then simplify ---");
    println!("f(x)              = {f}");
    let f_simplified = print_simplified("f(x) simplified  ", &f, options);
    let df = f_simplified.derivative();
    println!("f'(x)             = {df}");
    print_simplified("f'(x) simplified ", &df, options);

    println!();
    println!("--- g(x) = x * x ---");
    let g = multiply(variable(), variable());
    println!("g(x)              = {g}");
    let dg = g.derivative();
    println!("g'(x)             = {dg}");
    let dg = print_simplified("g'(x) simplified ", &dg, options);
    for point in &options.points {
        println!("g'({point}) = {}", dg.evaluate(*point));
    }
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match parse_args(&args) {
        Ok(options) => {
            run(&options);
            ExitCode::SUCCESS
        },
        Err(errs) => {
            let input = args.join(" ");
            for err in errs {
                if let Err(io_err) = err.report_to_stderr(&input) {
                    eprintln!("{}", io_err);
                }
            }
            ExitCode::FAILURE
        },
    }
}
