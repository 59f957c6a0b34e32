//! `letters LETTERS [-m MAX_RESULTS] [-w WORD_LIST]`
//!
//! Solve a Countdown letters game: find dictionary words spellable from
//! the given letter pool, ranked by descending length.

use countdown_cli::{parse_max_results, print_records, CountdownError, LETTERS_MAX_RESULTS_DEFAULT, LETTERS_WORD_LIST_DEFAULT};
use countdown_letters::compute_valid_words;

const USAGE: &str = "usage: letters LETTERS [-m MAX_RESULTS] [-w WORD_LIST]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("{USAGE}");
        eprintln!("letters: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), CountdownError> {
    let mut positionals: Vec<&str> = Vec::new();
    let mut max_results_raw: Option<&str> = None;
    let mut word_list_path: Option<&str> = None;

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
            "-w" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| CountdownError::Argument("-w expects a WORD_LIST path".into()))?;
                word_list_path = Some(value.as_str());
            }
            other => positionals.push(other),
        }
        i += 1;
    }

    let letters = positionals
        .first()
        .ok_or_else(|| CountdownError::Argument("missing LETTERS".into()))?;
    let max_results = parse_max_results(max_results_raw, LETTERS_MAX_RESULTS_DEFAULT)?;
    let word_list_path = word_list_path.unwrap_or(LETTERS_WORD_LIST_DEFAULT);

    let contents = std::fs::read_to_string(word_list_path)?;
    let word_list: Vec<String> = contents.lines().map(str::to_string).collect();

    let valid_words = compute_valid_words(&word_list, letters, max_results);
    let records = valid_words.into_iter().map(|word| (word.chars().count() as i64, word));
    print_records(records, max_results);
    Ok(())
}
