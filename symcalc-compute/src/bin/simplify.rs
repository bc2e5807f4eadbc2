use std::{io::{self, Read}, process::ExitCode};
use symcalc_compute::symbolic::{simplify::SimplifyOptionsBuilder, simplify_with};
use symcalc_parser::parse;

/// Parses and simplifies the given input, printing both trees in functional notation.
fn run(input: &str, regroup: bool) -> ExitCode {
    let expr = match parse(input) {
        Ok(expr) => expr,
        Err(err) => {
            if err.report_to_stderr("input", input).is_err() {
                eprintln!("error: {:?}", err.kind);
            }
            return ExitCode::FAILURE;
        },
    };
    println!("parsed:     {}", expr.as_functional());

    let options = SimplifyOptionsBuilder::new().regroup(regroup).build();
    match simplify_with(&expr, &options) {
        Ok(simplified) => {
            println!("simplified: {}", simplified.as_functional());
            println!("            {}", simplified);
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    let mut regroup = false;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--regroup" {
            regroup = true;
        } else {
            words.push(arg);
        }
    }

    let input = if words.is_empty() {
        // read the expression from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("error: could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }
        input.trim().to_string()
    } else {
        words.join(" ")
    };

    run(&input, regroup)
}
