#![deny(warnings)]
//! countdown_solver: the usefulness filter, multiset validity, the
//! mass-indexed dynamic-programming enumerator, and the target-distance
//! ranker for the Countdown numbers game.
//!
//! The enumerator does not encode "which input operand was used" into the
//! expression kernel itself (`countdown_core::Store` hash-conses purely by
//! value and structure). Instead each pool entry is a `(ExprId, mask)`
//! pair where `mask` is a bitset over input *positions*: this lets two
//! equal-valued operands at different positions (e.g. the two `1`s in
//! `[1, 1, 2, 3]`) combine with each other while still being rejected from
//! combining with themselves.

use countdown_arith::Op;
use countdown_core::{ExprId, Store};
use std::collections::{HashMap, HashSet};

const OPS: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

/// §4.2: cheap pre-check, applied before `Store::combine`, that rejects
/// pairs guaranteed to be non-positive, non-canonical, or a no-op.
pub fn might_be_useful(store: &Store, e1: ExprId, e2: ExprId, op: Op) -> bool {
    let (v1, v2) = (store.value(e1), store.value(e2));
    match op {
        Op::Add => v1 >= v2,
        Op::Sub => v1 > v2,
        Op::Mul => v1 >= v2 && v2 > 1,
        Op::Div => v1 >= v2 && v2 > 1,
    }
}

/// §4.3: the combined operand positions used by `e1` and `e2` must not
/// overlap (each input operand may be used at most once per expression).
pub fn is_valid(mask1: u64, mask2: u64) -> bool {
    mask1 & mask2 == 0
}

/// §4.4: build the canonical-expression pool by mass (operand-leaf count)
/// and return every distinct `ExprId` reachable from `operands`, in no
/// particular order (ranking is a separate step).
///
/// `operands.len()` must not exceed 64 (one bit per input position).
pub fn compute_pool(store: &mut Store, operands: &[i64]) -> Vec<ExprId> {
    let n = operands.len();
    assert!(n <= 64, "compute_pool supports at most 64 input operands");

    let mut by_mass: HashMap<u32, HashSet<(ExprId, u64)>> = HashMap::new();

    let mut layer1: HashSet<(ExprId, u64)> = HashSet::new();
    for (i, &v) in operands.iter().enumerate() {
        let id = store.constant(v);
        layer1.insert((id, 1u64 << i));
    }
    by_mass.insert(1, layer1);

    for m in 2..=n as u32 {
        let mut layer: HashSet<(ExprId, u64)> = HashSet::new();
        for m1 in 1..m {
            let m2 = m - m1;
            let (l1, l2) = match (by_mass.get(&m1), by_mass.get(&m2)) {
                (Some(l1), Some(l2)) => (l1.clone(), l2.clone()),
                _ => continue,
            };
            for &(e1, mask1) in &l1 {
                for &(e2, mask2) in &l2 {
                    if !is_valid(mask1, mask2) {
                        continue;
                    }
                    for &op in &OPS {
                        if !might_be_useful(store, e1, e2, op) {
                            continue;
                        }
                        if let Some(result) = store.combine(e1, e2, op) {
                            layer.insert((result, mask1 | mask2));
                        }
                    }
                }
            }
        }
        by_mass.insert(m, layer);
    }

    let mut seen: HashSet<ExprId> = HashSet::new();
    let mut out: Vec<ExprId> = Vec::new();
    for m in 1..=n as u32 {
        if let Some(layer) = by_mass.get(&m) {
            for &(id, _mask) in layer {
                if seen.insert(id) {
                    out.push(id);
                }
            }
        }
    }
    out
}

/// §4.5: sort `pool` by `(|value - target|, rank)` ascending: the closest
/// hits first, ties broken by the simpler (lower-rank) expression.
pub fn rank_by_target(store: &Store, mut pool: Vec<ExprId>, target: i64) -> Vec<ExprId> {
    pool.sort_by(|&a, &b| {
        let key = |id: ExprId| ((store.value(id) - target).abs(), store.rank(id).clone());
        key(a).cmp(&key(b))
    });
    pool
}

/// Convenience: compute the pool and rank it against `target` in one call.
pub fn solve(store: &mut Store, target: i64, operands: &[i64]) -> Vec<ExprId> {
    let pool = compute_pool(store, operands);
    rank_by_target(store, pool, target)
}
