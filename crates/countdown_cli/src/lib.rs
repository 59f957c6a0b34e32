#![deny(warnings)]
//! Shared argument-parsing and error-reporting plumbing for the `numbers`
//! and `letters` binaries.
//!
//! The teacher workspace this crate is adapted from carries neither
//! `clap` nor `anyhow` anywhere, so this crate doesn't either: argument
//! parsing is a small hand-rolled pass over `std::env::args`, matching the
//! original Python `argparse` usage/diagnostic convention (exit code 2 for
//! a bad argument, exit code 1 for an I/O failure).

use std::fmt;

pub const NUMBERS_MAX_RESULTS_DEFAULT: usize = 30;
pub const LETTERS_MAX_RESULTS_DEFAULT: usize = 30;
pub const LETTERS_WORD_LIST_DEFAULT: &str = "yawl.txt";

#[derive(Debug)]
pub enum CountdownError {
    /// A non-integer or non-positive argument where one was required.
    Argument(String),
    /// The word-list file could not be opened or read.
    Io(std::io::Error),
}

impl fmt::Display for CountdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownError::Argument(msg) => write!(f, "error: {msg}"),
            CountdownError::Io(err) => write!(f, "error: {err}"),
        }
    }
}

impl From<std::io::Error> for CountdownError {
    fn from(err: std::io::Error) -> Self {
        CountdownError::Io(err)
    }
}

impl CountdownError {
    /// §7 taxonomy: argument errors exit 2, I/O errors exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CountdownError::Argument(_) => 2,
            CountdownError::Io(_) => 1,
        }
    }
}

/// Parse a command-line token as a positive integer, per `check_is_positive_integer`.
pub fn parse_positive_integer(raw: &str) -> Result<i64, CountdownError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| CountdownError::Argument(format!("not integer: '{raw}'")))?;
    if value <= 0 {
        return Err(CountdownError::Argument(format!("not positive: '{raw}'")));
    }
    Ok(value)
}

/// Parse a `-m MAX_RESULTS`-shaped positive-integer option, falling back to
/// `default` when absent.
pub fn parse_max_results(raw: Option<&str>, default: usize) -> Result<usize, CountdownError> {
    match raw {
        None => Ok(default),
        Some(raw) => {
            let value = parse_positive_integer(raw)?;
            Ok(value as usize)
        }
    }
}

/// Print up to `max_results` `⟨integer⟩\t⟨text⟩` records to stdout.
pub fn print_records<I: IntoIterator<Item = (i64, String)>>(records: I, max_results: usize) {
    for (value, text) in records.into_iter().take(max_results) {
        println!("{value}\t{text}");
    }
}
