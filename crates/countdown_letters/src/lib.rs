#![deny(warnings)]
//! countdown_letters: multiset-subset filter over a dictionary for the
//! Countdown letters game.
//!
//! Dictionary loading and argument parsing are external collaborators'
//! concerns (see `countdown_cli`); this crate is a pure function of an
//! already-loaded word list and a letter pool.

use std::collections::HashMap;

/// Strip surrounding whitespace and uppercase. Idempotent:
/// `normalise(normalise(s)) == normalise(s)`.
pub fn normalise(s: &str) -> String {
    s.trim().to_uppercase()
}

fn letter_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// A word is valid for `pool` iff every letter it uses occurs no more
/// often in the word than in the pool. Both arguments are assumed already
/// normalised.
pub fn is_valid(word: &str, pool: &str) -> bool {
    let pool_counts = letter_counts(pool);
    let word_counts = letter_counts(word);
    word_counts.iter().all(|(letter, &count)| count <= pool_counts.get(letter).copied().unwrap_or(0))
}

/// Filter `word_list` to the words valid for `pool`, sorted by descending
/// length (stable on ties), truncated to `max_results`.
pub fn compute_valid_words(word_list: &[String], pool: &str, max_results: usize) -> Vec<String> {
    let pool = normalise(pool);
    let mut valid: Vec<String> = word_list
        .iter()
        .map(|w| normalise(w))
        .filter(|w| is_valid(w, &pool))
        .collect();
    valid.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    valid.truncate(max_results);
    valid
}
