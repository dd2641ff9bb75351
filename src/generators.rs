//! Ways to build relations without reading them from text.
use rand::{
    distributions::{Bernoulli, Distribution},
    Rng,
};
use tracing::debug;

use crate::{error::GenerateError, relation::Relation};

/// Sample a relation over `elements` where every ordered pair is related
/// with a chance of `p`, where 0.0 <= `p` <= 1.0
pub fn bernoulli<R: Rng>(
    rng: &mut R,
    elements: &[i64],
    p: f64,
) -> Result<Relation, GenerateError> {
    let dist = Bernoulli::new(p).or(Err(GenerateError::InvalidProbability(p)))?;
    let mut relation = Relation::from_elements(elements)?;
    sample(rng, &mut relation, &dist);
    Ok(relation)
}

/// Like [`bernoulli`], over the elements `1..=n`.
pub fn bernoulli_numbered<R: Rng>(
    rng: &mut R,
    n: usize,
    p: f64,
) -> Result<Relation, GenerateError> {
    let dist = Bernoulli::new(p).or(Err(GenerateError::InvalidProbability(p)))?;
    let mut relation = numbered(n)?;
    sample(rng, &mut relation, &dist);
    Ok(relation)
}

/// A relation over the elements `1..=n`, nothing related.
pub fn numbered(n: usize) -> Result<Relation, GenerateError> {
    let mut relation = Relation::allocate(n)?;
    let last = i64::try_from(n).or(Err(GenerateError::TooManyElements(n)))?;
    for (i, v) in (1..=last).enumerate() {
        relation.set_element(i, v);
    }
    Ok(relation)
}

fn sample<R: Rng>(rng: &mut R, relation: &mut Relation, dist: &Bernoulli) {
    for x in 0..relation.len() {
        for y in 0..relation.len() {
            if dist.sample(rng) {
                relation.set_related(x, y);
            }
        }
    }
    debug!(elements = relation.len(), "sampled relation");
}

/// Every element relates only to itself.
pub fn identity(elements: &[i64]) -> Result<Relation, GenerateError> {
    let mut relation = Relation::from_elements(elements)?;
    for x in 0..relation.len() {
        relation.set_related(x, x);
    }
    Ok(relation)
}

/// Every element relates to every element.
pub fn total(elements: &[i64]) -> Result<Relation, GenerateError> {
    let mut relation = Relation::from_elements(elements)?;
    for x in 0..relation.len() {
        for y in 0..relation.len() {
            relation.set_related(x, y);
        }
    }
    Ok(relation)
}
