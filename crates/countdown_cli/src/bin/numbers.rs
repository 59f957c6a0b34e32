//! `numbers TARGET NUMBER [NUMBER ...] [-m MAX_RESULTS]`
//!
//! Solve a Countdown numbers game: enumerate arithmetic expressions over
//! the given operands whose value is a positive integer, ranked by
//! distance to `TARGET`.

use countdown_cli::{parse_max_results, parse_positive_integer, print_records, CountdownError, NUMBERS_MAX_RESULTS_DEFAULT};
use countdown_core::Store;
use countdown_solver::solve;

const USAGE: &str = "usage: numbers TARGET NUMBER [NUMBER ...] [-m MAX_RESULTS]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("{USAGE}");
        eprintln!("numbers: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), CountdownError> {
    let mut positionals: Vec<&str> = Vec::new();
    let mut max_results_raw: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-m" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| CountdownError::Argument("-m expects a MAX_RESULTS value".into()))?;
                max_results_raw = Some(value.as_str());
            }
            other => positionals.push(other),
        }
        i += 1;
    }

    let (target_raw, number_raws) = positionals
        .split_first()
        .ok_or_else(|| CountdownError::Argument("missing TARGET".into()))?;
    if number_raws.is_empty() {
        return Err(CountdownError::Argument("at least one NUMBER is required".into()));
    }

    let target = parse_positive_integer(target_raw)?;
    let operands = number_raws
        .iter()
        .map(|raw| parse_positive_integer(raw))
        .collect::<Result<Vec<i64>, _>>()?;
    let max_results = parse_max_results(max_results_raw, NUMBERS_MAX_RESULTS_DEFAULT)?;

    let mut store = Store::new();
    let ranked = solve(&mut store, target, &operands);
    let records = ranked.into_iter().map(|id| (store.value(id), store.to_string(id)));
    print_records(records, max_results);
    Ok(())
}
