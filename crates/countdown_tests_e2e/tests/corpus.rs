//! Concrete corpus scenarios from the solver's testable-properties list.

use countdown_core::Store;
use countdown_solver::compute_pool;

#[test]
fn three_operand_corpus_excludes_reassociated_duplicate() {
    let mut st = Store::new();
    let pool = compute_pool(&mut st, &[3, 20, 10000]);
    let strings: Vec<String> = pool.iter().map(|&id| st.to_string(id)).collect();

    // (10000 + 3) + 20 is absent: it equals (10000 + 20) + 3, already
    // present as the single flattened canonical form "10000 + 20 + 3".
    assert!(!strings.iter().any(|s| s == "10000 + 3 + 20"));
    assert!(strings.iter().any(|s| s == "10000 + 20 + 3"));
    assert!(strings.iter().any(|s| s == "10000 * (20 + 3)"));
}

#[test]
fn four_operand_corpus_excludes_redundant_identity_ops() {
    let mut st = Store::new();
    let pool = compute_pool(&mut st, &[1, 1, 2, 3]);
    let strings: Vec<String> = pool.iter().map(|&id| st.to_string(id)).collect();

    assert!(!strings.iter().any(|s| s == "2 * 1"));
    assert!(!strings.iter().any(|s| s == "1 * 1"));
    assert!(!strings.iter().any(|s| s == "1 - 1"));
    assert!(!strings.iter().any(|s| s == "3 * (2 - 1)"));
}
