use std::io;

use thiserror::Error;

/// The relation matrix for `elements` elements could not be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not allocate a relation over {elements} elements")]
pub struct AllocationError {
    pub elements: usize,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input")]
    Io(#[from] io::Error),

    #[error("no input")]
    NoInput,

    #[error("invalid element count {0:?}")]
    InvalidCount(String),

    #[error("no elements given")]
    NoElements,

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("expected {expected} elements, found {found}")]
    ElementCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GenerateError {
    #[error("probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    #[error("{0} elements can't be numbered")]
    TooManyElements(usize),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}
