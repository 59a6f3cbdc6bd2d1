use calcyard::{error::Error, evaluate_pratt, evaluate_shunting_yard};
use clap::Parser;

/// calcyard evaluates plain arithmetic expressions with two independent
/// strategies: a shunting-yard postfix pipeline and a Pratt parser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Parse with the Pratt (precedence-climbing) parser instead of the
    /// shunting-yard pipeline.
    #[arg(short, long)]
    pratt: bool,

    /// Evaluate with both strategies and print each result.
    #[arg(short, long)]
    both: bool,

    /// The expression to evaluate, e.g. "(1 + 2) * 3".
    expression: String,
}

fn main() {
    let args = Args::parse();

    if args.expression.trim().is_empty() {
        eprintln!("Input is empty.");
        std::process::exit(1);
    }

    if args.both {
        report("shunting-yard", &evaluate_shunting_yard(&args.expression));
        report("pratt", &evaluate_pratt(&args.expression));
        return;
    }

    let result = if args.pratt {
        evaluate_pratt(&args.expression)
    } else {
        evaluate_shunting_yard(&args.expression)
    };

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn report(strategy: &str, result: &Result<f64, Error>) {
    match result {
        Ok(value) => println!("{strategy}: {value}"),
        Err(e) => println!("{strategy}: {e}"),
    }
}
