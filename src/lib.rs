//! This is a crate used to check which classical properties a finite binary
//! relation has, and why it lacks the others.
//!
//! Elements are integers, addressed everywhere by their position in the
//! element sequence. Every failing elementary property comes with its
//! counterexamples, ordered pairs of positions.
//!
//! Example usage:
//! ```
//! use relprops::prelude::*;
//!
//! let mut relation = Relation::from_elements(&[1, 2, 3]).unwrap();
//! relation.set_related(0, 1);
//! relation.set_related(1, 2);
//!
//! let analysis = Analysis::run(&relation);
//! let transitive = analysis.result(Property::Transitive);
//! assert!(!transitive.holds);
//! assert_eq!(transitive.counterexamples.as_slice(), &[OrderedPair::new(0, 2)]);
//! assert_eq!(analysis.closure.len(), 3);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod closure;
pub mod error;
pub mod formats;
pub mod generators;
mod matrix;
pub mod pairs;
pub mod properties;
pub mod relation;
pub mod report;

/// Commonly used types
pub mod prelude {
    pub use super::{
        pairs::{OrderedPair, PairList},
        properties::{Analysis, Property, PropertyResult},
        relation::Relation,
    };
}
