use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::error;

use simplex_tableau::algorithm::config::{BigM, PivotRuleKind, SolverConfig, DEFAULT_MAX_ITERATIONS};
use simplex_tableau::algorithm::Method;
use simplex_tableau::io::import;

/// Solve small linear programs with the tableau simplex method.
#[derive(Parser, Debug)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// JSON file containing the problem description
    #[arg(value_name = "FILE")]
    problem_file: PathBuf,

    /// standard, big-m or two-phase. Overrides the method in the problem file
    #[arg(short, long)]
    method: Option<Method>,

    /// dantzig or bland
    #[arg(short, long, default_value_t = PivotRuleKind::default())]
    pivot_rule: PivotRuleKind,

    /// Maximum number of pivots per phase
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Penalty for the big-m method: a positive number, or "scaled"
    #[arg(long, default_value = "scaled")]
    big_m: BigM,

    /// Print the result, including all visited tableaus, as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    if !opts.json {
        println!("Reading problem file: {:?}...", opts.problem_file);
    }
    let imported = match import(&opts.problem_file) {
        Ok(imported) => imported,
        Err(import_error) => {
            error!("{}", import_error);
            eprintln!("Couldn't read the problem: {}", import_error);
            exit(1);
        },
    };

    let method = opts.method.or(imported.method).unwrap_or(Method::TwoPhase);
    let config = SolverConfig::default()
        .with_pivot_rule(opts.pivot_rule)
        .with_max_iterations(opts.max_iterations)
        .with_big_m(opts.big_m);

    if !opts.json {
        println!("Solving with the {} method...", method);
    }
    let result = match method.solve(&imported.problem, &config) {
        Ok(result) => result,
        Err(solve_error) => {
            eprintln!("{}", solve_error);
            exit(2);
        },
    };

    if opts.json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(serialization_error) => {
                eprintln!("Couldn't write the result: {}", serialization_error);
                exit(1);
            },
        }
    } else {
        for (k, record) in result.iterations().iter().enumerate() {
            println!("Tableau {}, {}", k, record);
        }
        println!("{}", result);
    }
}
