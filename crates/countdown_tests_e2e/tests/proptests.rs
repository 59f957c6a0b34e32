//! Property-based tests spanning the full numbers solver pipeline
//! (countdown_core + countdown_solver together).

use countdown_core::Store;
use countdown_solver::solve;
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = i64> {
    1i64..=20
}

proptest! {
    #[test]
    fn prop_solved_values_are_positive_integers(
        target in operand(),
        operands in proptest::collection::vec(operand(), 1..=4),
    ) {
        let mut st = Store::new();
        let ranked = solve(&mut st, target, &operands);
        for id in ranked {
            prop_assert!(st.value(id) > 0);
        }
    }

    #[test]
    fn prop_output_is_nondecreasing_in_distance(
        target in operand(),
        operands in proptest::collection::vec(operand(), 1..=4),
    ) {
        let mut st = Store::new();
        let ranked = solve(&mut st, target, &operands);
        let mut last = 0i64;
        for id in ranked {
            let dist = (st.value(id) - target).abs();
            prop_assert!(dist >= last);
            last = dist;
        }
    }

    #[test]
    fn prop_solve_never_exceeds_pool_size(
        target in operand(),
        operands in proptest::collection::vec(operand(), 1..=4),
    ) {
        let mut st = Store::new();
        let pool_len = countdown_solver::compute_pool(&mut st, &operands).len();
        let mut st2 = Store::new();
        let ranked = solve(&mut st2, target, &operands);
        prop_assert_eq!(ranked.len(), pool_len);
    }
}
