#![deny(warnings)]
//! countdown_core: immutable, hash-consed expression kernel for the
//! Countdown numbers game.
//!
//! An `Expr` is one of three canonical forms: `Constant`, an additive
//! chain (`+`/`-`), or a multiplicative chain (`*`/`/`), stored in a
//! `Store` arena with structural interning, so that e.g. `a + (b + c)` and
//! `(b + c) + a` collapse to the same `ExprId`. Equality is therefore
//! pointer (id) equality; no separate structural-equality pass is needed.

use countdown_arith::{apply_checked, Op};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExprId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Constant,
    Additive,
    Multiplicative,
}

impl Kind {
    fn of_op(op: Op) -> Kind {
        match op {
            Op::Add | Op::Sub => Kind::Additive,
            Op::Mul | Op::Div => Kind::Multiplicative,
        }
    }

    fn tag(self) -> u8 {
        match self {
            Kind::Constant => 0,
            Kind::Additive => 1,
            Kind::Multiplicative => 2,
        }
    }
}

/// A totally-ordered tie-break key: `(mass, depth, part_count, part_ranks,
/// -value, type)`, compared lexicographically ascending. Recursion through
/// `part_ranks` terminates because every part has strictly smaller depth
/// than its parent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    mass: u32,
    depth: u32,
    part_count: usize,
    part_ranks: Vec<Rank>,
    neg_value: i64,
    type_tag: u8,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: Kind,
    pub value: i64,
    /// `(part, sign)` pairs; empty for `Constant`. Sorted in canonical
    /// order: positive signs first, each sign-group descending by value
    /// with `rank` as the tie-break.
    pub parts: Vec<(ExprId, i8)>,
    pub mass: u32,
    pub depth: u32,
    digest: u64,
    rank: Rank,
}

#[derive(Hash, PartialEq, Eq)]
struct NodeKey {
    tag: u8,
    value: i64,
    parts: Vec<(u64, i8)>,
}

#[derive(Default)]
pub struct Store {
    nodes: Vec<Node>,
    interner: HashMap<NodeKey, ExprId>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ExprId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: ExprId) -> i64 {
        self.get(id).value
    }

    pub fn rank(&self, id: ExprId) -> &Rank {
        &self.get(id).rank
    }

    pub fn mass(&self, id: ExprId) -> u32 {
        self.get(id).mass
    }

    /// Constructor C1: a single operand leaf. Leaves are hash-consed by
    /// value alone: which *input position* supplied the value is tracked
    /// by the enumerator, not by the kernel (see `countdown_solver`).
    pub fn constant(&mut self, value: i64) -> ExprId {
        let key = NodeKey { tag: Kind::Constant.tag(), value, parts: Vec::new() };
        if let Some(&id) = self.interner.get(&key) {
            return id;
        }
        let digest = digest_node(Kind::Constant.tag(), value, &[]);
        let rank = Rank {
            mass: 1,
            depth: 0,
            part_count: 0,
            part_ranks: Vec::new(),
            neg_value: -value,
            type_tag: Kind::Constant.tag(),
        };
        let id = ExprId(self.nodes.len());
        self.nodes.push(Node { kind: Kind::Constant, value, parts: Vec::new(), mass: 1, depth: 0, digest, rank });
        self.interner.insert(key, id);
        id
    }

    /// Constructor C2: combine `e1 op e2`. Returns `None` when the
    /// resulting value overflows, is not an exact integer (division), or
    /// is not a strictly positive integer (per the Countdown rules); such
    /// a candidate is simply discarded, never an error.
    pub fn combine(&mut self, e1: ExprId, e2: ExprId, op: Op) -> Option<ExprId> {
        let value = apply_checked(op, self.get(e1).value, self.get(e2).value)?;
        if value <= 0 {
            return None;
        }

        let chain_kind = Kind::of_op(op);
        let mut parts: Vec<(ExprId, i8)> = Vec::new();
        self.contribute(&mut parts, e1, chain_kind, 1);
        let op_sign: i8 = if matches!(op, Op::Sub | Op::Div) { -1 } else { 1 };
        self.contribute(&mut parts, e2, chain_kind, op_sign);

        parts.sort_by(|&(pa, sa), &(pb, sb)| self.part_cmp(pa, sa, pb, sb));

        let mass = self.get(e1).mass + self.get(e2).mass;
        let depth = 1 + self.get(e1).depth.max(self.get(e2).depth);

        Some(self.intern_chain(chain_kind, value, parts, mass, depth))
    }

    fn contribute(&self, parts: &mut Vec<(ExprId, i8)>, child: ExprId, chain_kind: Kind, op_sign: i8) {
        let node = self.get(child);
        if node.kind == chain_kind {
            for &(part, sign) in &node.parts {
                parts.push((part, sign * op_sign));
            }
        } else {
            parts.push((child, op_sign));
        }
    }

    /// Canonical ordering key `(-sign, -value, rank)`.
    fn part_cmp(&self, a: ExprId, sign_a: i8, b: ExprId, sign_b: i8) -> std::cmp::Ordering {
        let key = |sign: i8, id: ExprId| (-sign, -self.get(id).value, self.get(id).rank.clone());
        key(sign_a, a).cmp(&key(sign_b, b))
    }

    fn intern_chain(&mut self, kind: Kind, value: i64, parts: Vec<(ExprId, i8)>, mass: u32, depth: u32) -> ExprId {
        let key_parts: Vec<(u64, i8)> =
            parts.iter().map(|&(id, sign)| (self.get(id).digest, sign)).collect();
        let key = NodeKey { tag: kind.tag(), value, parts: key_parts.clone() };
        if let Some(&id) = self.interner.get(&key) {
            return id;
        }

        let digest = digest_node(kind.tag(), value, &key_parts);
        let part_ranks: Vec<Rank> = parts.iter().map(|&(id, _)| self.get(id).rank.clone()).collect();
        let rank = Rank {
            mass,
            depth,
            part_count: parts.len(),
            part_ranks,
            neg_value: -value,
            type_tag: kind.tag(),
        };

        let id = ExprId(self.nodes.len());
        self.nodes.push(Node { kind, value, parts, mass, depth, digest, rank });
        self.interner.insert(key, id);
        id
    }

    /// Pretty-print per §4.6: Constant -> decimal; chains join parts with
    /// their sign operator (first operator omitted); a nested additive
    /// chain inside a multiplicative chain is parenthesized.
    pub fn to_string(&self, id: ExprId) -> String {
        self.print(id, false)
    }

    fn print(&self, id: ExprId, parenthesize_additive: bool) -> String {
        let node = self.get(id);
        match node.kind {
            Kind::Constant => node.value.to_string(),
            Kind::Additive | Kind::Multiplicative => {
                let child_wraps_additive = node.kind == Kind::Multiplicative;
                let mut s = String::new();
                for (i, &(part, sign)) in node.parts.iter().enumerate() {
                    let part_str = self.print(part, child_wraps_additive);
                    if i == 0 {
                        s.push_str(&part_str);
                    } else {
                        let op_char = match (node.kind, sign) {
                            (Kind::Additive, 1) => '+',
                            (Kind::Additive, -1) => '-',
                            (Kind::Multiplicative, 1) => '*',
                            (Kind::Multiplicative, -1) => '/',
                            _ => unreachable!("sign is always +1 or -1"),
                        };
                        s.push(' ');
                        s.push(op_char);
                        s.push(' ');
                        s.push_str(&part_str);
                    }
                }
                if parenthesize_additive && node.kind == Kind::Additive {
                    format!("({s})")
                } else {
                    s
                }
            }
        }
    }
}

fn digest_node(tag: u8, value: i64, children: &[(u64, i8)]) -> u64 {
    let mut h = Fnv64::new();
    h.write_u8(tag);
    h.write_i64(value);
    for &(d, sign) in children {
        h.write_u64(d);
        h.write_u8(sign as u8);
    }
    h.finish()
}

struct Fnv64(u64);
impl Fnv64 {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }
    fn write_u8(&mut self, x: u8) {
        self.0 ^= x as u64;
        self.0 = self.0.wrapping_mul(0x100000001b3);
    }
    fn write_i64(&mut self, x: i64) {
        self.write_u64(x as u64);
    }
    fn write_u64(&mut self, x: u64) {
        for b in x.to_le_bytes() {
            self.write_u8(b);
        }
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_hash_cons_by_value() {
        let mut st = Store::new();
        let a = st.constant(7);
        let b = st.constant(7);
        assert_eq!(a, b);
    }

    #[test]
    fn addition_is_commutative_canonical() {
        let mut st = Store::new();
        let a = st.constant(10);
        let b = st.constant(7);
        let sum1 = st.combine(a, b, Op::Add).unwrap();
        // (b + a) is never directly constructible since might_be_useful
        // would reject it upstream, but the kernel itself is symmetric:
        // both orders intern to the same node because parts are sorted.
        let sum2 = st.combine(b, a, Op::Add).unwrap();
        assert_eq!(sum1, sum2);
        assert_eq!(st.value(sum1), 17);
        assert_eq!(st.to_string(sum1), "10 + 7");
    }

    #[test]
    fn additive_chain_flattens() {
        let mut st = Store::new();
        let a = st.constant(10);
        let b = st.constant(7);
        let c = st.constant(3);
        let ab = st.combine(a, b, Op::Add).unwrap();
        let abc = st.combine(ab, c, Op::Add).unwrap();
        let bc = st.combine(b, c, Op::Add).unwrap();
        let abc2 = st.combine(a, bc, Op::Add).unwrap();
        assert_eq!(abc, abc2);
        assert_eq!(st.get(abc).parts.len(), 3);
    }

    #[test]
    fn subtraction_rejects_non_positive() {
        let mut st = Store::new();
        let a = st.constant(3);
        let b = st.constant(3);
        assert!(st.combine(a, b, Op::Sub).is_none());
        let c = st.constant(2);
        assert!(st.combine(c, a, Op::Sub).is_none());
    }

    #[test]
    fn division_requires_exact_result() {
        let mut st = Store::new();
        let a = st.constant(10);
        let b = st.constant(7);
        assert!(st.combine(a, b, Op::Div).is_none());
        let c = st.constant(5);
        let q = st.combine(a, c, Op::Div).unwrap();
        assert_eq!(st.value(q), 2);
    }

    #[test]
    fn printer_parenthesizes_additive_inside_multiplicative() {
        let mut st = Store::new();
        let a = st.constant(10000);
        let b = st.constant(20);
        let c = st.constant(3);
        let sum = st.combine(b, c, Op::Add).unwrap(); // 20 + 3
        let prod = st.combine(a, sum, Op::Mul).unwrap();
        assert_eq!(st.to_string(prod), "10000 * (20 + 3)");
    }

    #[test]
    fn multiplicative_inside_additive_needs_no_parens() {
        let mut st = Store::new();
        let a = st.constant(10);
        let b = st.constant(2);
        let mul = st.combine(a, b, Op::Mul).unwrap(); // 10 * 2
        let three = st.constant(3);
        let sum = st.combine(mul, three, Op::Add).unwrap();
        assert_eq!(st.to_string(sum), "10 * 2 + 3");
    }

    #[test]
    fn canonical_form_collapses_rearrangements() {
        let mut st = Store::new();
        let a = st.constant(3);
        let b = st.constant(20);
        let c = st.constant(10000);
        // (10000 + 20) + 3 should equal 10000 + 20 + 3 flattened, and
        // equal regardless of association order.
        let left = st.combine(c, b, Op::Add).unwrap();
        let whole1 = st.combine(left, a, Op::Add).unwrap();
        let right = st.combine(b, a, Op::Add).unwrap();
        let whole2 = st.combine(c, right, Op::Add).unwrap();
        assert_eq!(whole1, whole2);
    }
}
