//! Checkers for the elementary properties of a relation, and the compound
//! properties derived from them.
//!
//! Every checker scans the whole matrix, so a failing property lists every
//! counterexample and not just the first one found.
use std::fmt;

use tracing::{debug, trace};

use crate::{
    closure,
    pairs::{OrderedPair, PairList},
    relation::Relation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Reflexive,
    Irreflexive,
    Symmetric,
    Antisymmetric,
    Asymmetric,
    Transitive,
}

impl Property {
    /// Every property, in the order they are reported.
    pub const ALL: [Property; 6] = [
        Property::Reflexive,
        Property::Irreflexive,
        Property::Symmetric,
        Property::Antisymmetric,
        Property::Asymmetric,
        Property::Transitive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Property::Reflexive => "Reflexive",
            Property::Irreflexive => "Irreflexive",
            Property::Symmetric => "Symmetric",
            Property::Antisymmetric => "Antisymmetric",
            Property::Asymmetric => "Asymmetric",
            Property::Transitive => "Transitive",
        }
    }

    /// Asymmetry only has a verdict, every other property also lists its
    /// counterexamples.
    pub fn tracks_counterexamples(self) -> bool {
        self != Property::Asymmetric
    }

    pub fn check(self, relation: &Relation) -> PropertyResult {
        match self {
            Property::Reflexive => reflexive(relation),
            Property::Irreflexive => irreflexive(relation),
            Property::Symmetric => symmetric(relation),
            Property::Antisymmetric => antisymmetric(relation),
            Property::Asymmetric => asymmetric(relation),
            Property::Transitive => transitive(relation),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyResult {
    pub property: Property,
    pub holds: bool,
    /// Pairs of positions witnessing that the property fails. Always empty
    /// for [`Property::Asymmetric`].
    pub counterexamples: PairList,
}

impl PropertyResult {
    fn new(property: Property) -> Self {
        PropertyResult { property, holds: true, counterexamples: PairList::new() }
    }

    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    fn violated(&mut self, pair: OrderedPair) {
        self.holds = false;
        if self.property.tracks_counterexamples() && self.counterexamples.add_if_absent(pair) {
            trace!(property = self.name(), x = pair.x, y = pair.y, "counterexample");
        }
    }

    fn finish(self) -> Self {
        let count = self.counterexamples.len();
        debug!(property = self.name(), holds = self.holds, count, "checked");
        self
    }
}

/// Every element relates to itself. Records each missing `(x, x)`.
pub fn reflexive(relation: &Relation) -> PropertyResult {
    let mut result = PropertyResult::new(Property::Reflexive);
    for x in 0..relation.len() {
        if !relation.is_related(x, x) {
            result.violated(OrderedPair::new(x, x));
        }
    }
    result.finish()
}

/// No element relates to itself. Records each present `(x, x)`.
pub fn irreflexive(relation: &Relation) -> PropertyResult {
    let mut result = PropertyResult::new(Property::Irreflexive);
    for x in 0..relation.len() {
        if relation.is_related(x, x) {
            result.violated(OrderedPair::new(x, x));
        }
    }
    result.finish()
}

/// `x → y` implies `y → x`. Records the missing direction `(y, x)`.
pub fn symmetric(relation: &Relation) -> PropertyResult {
    let mut result = PropertyResult::new(Property::Symmetric);
    for x in 0..relation.len() {
        for y in 0..relation.len() {
            if relation.is_related(x, y) && !relation.is_related(y, x) {
                result.violated(OrderedPair::new(y, x));
            }
        }
    }
    result.finish()
}

/// `x → y` and `y → x` never both hold for distinct `x`, `y`. Both `(x, y)`
/// and `(y, x)` are recorded for each offending couple.
pub fn antisymmetric(relation: &Relation) -> PropertyResult {
    let mut result = PropertyResult::new(Property::Antisymmetric);
    for x in 0..relation.len() {
        for y in 0..relation.len() {
            if x != y && relation.is_related(x, y) && relation.is_related(y, x) {
                result.violated(OrderedPair::new(x, y));
            }
        }
    }
    result.finish()
}

/// `x → y` and `y → x` never both hold, `x = y` included.
pub fn asymmetric(relation: &Relation) -> PropertyResult {
    let mut result = PropertyResult::new(Property::Asymmetric);
    for x in 0..relation.len() {
        for y in 0..relation.len() {
            if relation.is_related(x, y) && relation.is_related(y, x) {
                result.violated(OrderedPair::new(x, y));
            }
        }
    }
    result.finish()
}

/// `x → y` and `y → z` implies `x → z`. Records each missing `(x, z)`, in
/// the order found scanning `x`, then `y`, then `z`.
pub fn transitive(relation: &Relation) -> PropertyResult {
    let n = relation.len();
    let mut result = PropertyResult::new(Property::Transitive);
    for x in 0..n {
        for y in 0..n {
            if !relation.is_related(x, y) {
                continue;
            }
            for z in 0..n {
                if relation.is_related(y, z) && !relation.is_related(x, z) {
                    result.violated(OrderedPair::new(x, z));
                }
            }
        }
    }
    result.finish()
}

/// Properties derived from the elementary ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compound {
    /// Reflexive, symmetric and transitive.
    pub is_equivalence: bool,
    /// Reflexive, antisymmetric and transitive.
    pub is_partial_order: bool,
}

impl Compound {
    #[must_use]
    pub fn evaluate(
        reflexive: &PropertyResult,
        symmetric: &PropertyResult,
        antisymmetric: &PropertyResult,
        transitive: &PropertyResult,
    ) -> Self {
        debug_assert!(reflexive.property == Property::Reflexive);
        debug_assert!(symmetric.property == Property::Symmetric);
        debug_assert!(antisymmetric.property == Property::Antisymmetric);
        debug_assert!(transitive.property == Property::Transitive);
        Compound {
            is_equivalence: reflexive.holds && symmetric.holds && transitive.holds,
            is_partial_order: reflexive.holds && antisymmetric.holds && transitive.holds,
        }
    }
}

/// Every property of one relation together with its one-pass transitive
/// closure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    // Indexed like `Property::ALL`
    results: [PropertyResult; 6],
    pub compound: Compound,
    pub closure: PairList,
}

impl Analysis {
    pub fn run(relation: &Relation) -> Self {
        debug!(elements = relation.len(), "checking properties");
        let results = Property::ALL.map(|p| p.check(relation));
        let [reflexive, _, symmetric, antisymmetric, _, transitive] = &results;
        let compound = Compound::evaluate(reflexive, symmetric, antisymmetric, transitive);
        let closure = closure::one_pass(relation, transitive);
        Analysis { results, compound, closure }
    }

    pub fn result(&self, property: Property) -> &PropertyResult {
        &self.results[property as usize]
    }

    /// Results in the order of [`Property::ALL`].
    pub fn results(&self) -> &[PropertyResult] {
        &self.results
    }
}
