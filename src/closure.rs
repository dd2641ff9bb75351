//! Transitive closures of a relation.
//!
//! [`one_pass`] is the closure printed by default: the related pairs plus the
//! gaps found by a single transitivity scan. It is not always transitive, a
//! chain of three steps needs more than one pass. [`fixpoint`] repeats the
//! scan until no pair is missing.
use tracing::debug;

use crate::{
    pairs::{OrderedPair, PairList},
    properties::{Property, PropertyResult},
    relation::Relation,
};

/// Which closure to compute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosureMode {
    #[default]
    OnePass,
    Fixpoint,
}

impl ClosureMode {
    pub fn compute(self, relation: &Relation, transitive: &PropertyResult) -> PairList {
        match self {
            ClosureMode::OnePass => one_pass(relation, transitive),
            ClosureMode::Fixpoint => fixpoint(relation),
        }
    }
}

/// Every related pair followed by every counterexample of `transitive`.
pub fn one_pass(relation: &Relation, transitive: &PropertyResult) -> PairList {
    assert!(transitive.property == Property::Transitive);
    let mut closure: PairList = relation.pairs().collect();
    for &pair in &transitive.counterexamples {
        closure.add_if_absent(pair);
    }
    debug!(pairs = closure.len(), "one-pass closure");
    closure
}

/// The smallest transitive relation containing `relation`, ascending by `x`
/// then `y`.
pub fn fixpoint(relation: &Relation) -> PairList {
    let n = relation.len();
    let mut matrix = relation.matrix().clone();
    let mut passes = 0;
    let mut updated = true;
    while updated {
        updated = false;
        passes += 1;
        for i in 0..n {
            for j in 0..n {
                if !matrix[(i, j)] {
                    continue;
                }
                for k in 0..n {
                    if matrix[(j, k)] && !matrix[(i, k)] {
                        matrix[(i, k)] = true;
                        updated = true;
                    }
                }
            }
        }
    }
    debug_assert!(!matrix.has_transitive_gap());
    debug!(passes, "fixpoint closure");

    let mut closure = PairList::new();
    for i in 0..n {
        for j in 0..n {
            if matrix[(i, j)] {
                closure.add_if_absent(OrderedPair::new(i, j));
            }
        }
    }
    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::transitive;

    fn chain(n: usize) -> Relation {
        let values: Vec<i64> = (1..=n as i64).collect();
        let mut r = Relation::from_elements(&values).unwrap();
        for i in 1..n {
            r.set_related(i - 1, i);
        }
        r
    }

    fn pairs(v: &[(usize, usize)]) -> Vec<OrderedPair> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn one_pass_short_chain() {
        let r = chain(3);
        let c = one_pass(&r, &transitive(&r));
        assert_eq!(c.as_slice(), pairs(&[(0, 1), (1, 2), (0, 2)]));
    }

    #[test]
    fn one_pass_misses_long_chain() {
        let r = chain(4);
        let c = one_pass(&r, &transitive(&r));
        assert_eq!(c.as_slice(), pairs(&[(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)]));
        assert!(!c.contains(OrderedPair::new(0, 3)));
    }

    #[test]
    fn fixpoint_long_chain() {
        let r = chain(4);
        let c = fixpoint(&r);
        assert_eq!(c.as_slice(), pairs(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]));
    }

    #[test]
    fn mode() {
        let r = chain(4);
        let t = transitive(&r);
        assert_eq!(ClosureMode::default().compute(&r, &t), one_pass(&r, &t));
        assert_eq!(ClosureMode::Fixpoint.compute(&r, &t), fixpoint(&r));
    }

    #[test]
    #[should_panic]
    fn one_pass_needs_transitive_result() {
        let r = chain(2);
        one_pass(&r, &crate::properties::reflexive(&r));
    }

    fn to_relation(base: &Relation, pairs: &PairList) -> Relation {
        let mut r = Relation::from_elements(base.elements()).unwrap();
        for p in pairs {
            r.set_related(p.x, p.y);
        }
        r
    }

    #[quickcheck]
    fn fixpoint_is_transitive(r: Relation) -> bool {
        transitive(&to_relation(&r, &fixpoint(&r))).holds
    }

    #[quickcheck]
    fn closures_contain_relation(r: Relation) -> bool {
        let once = one_pass(&r, &transitive(&r));
        let full = fixpoint(&r);
        r.pairs().all(|p| once.contains(p) && full.contains(p))
    }

    #[quickcheck]
    fn one_pass_within_fixpoint(r: Relation) -> bool {
        let full = fixpoint(&r);
        one_pass(&r, &transitive(&r)).iter().all(|&p| full.contains(p))
    }

    #[quickcheck]
    fn transitive_relation_is_own_closure(r: Relation) -> bool {
        let full = to_relation(&r, &fixpoint(&r));
        let once = one_pass(&full, &transitive(&full));
        fixpoint(&full) == once
    }
}
