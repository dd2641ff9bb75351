use std::fmt;

use crate::{error::AllocationError, matrix::MatrixBool, pairs::OrderedPair};

/// A binary relation over a finite sequence of integer elements.
///
/// Elements are addressed by their position in the sequence, `matrix[(i, j)]`
/// is `true` if the element at position `i` relates to the element at
/// position `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    elements: Vec<i64>,
    matrix: MatrixBool,
}

impl Relation {
    /// Reserve a relation over `n` elements, every element `0` and no
    /// elements related.
    ///
    /// Returns `Err` if it failed to allocate
    pub fn allocate(n: usize) -> Result<Self, AllocationError> {
        let matrix = MatrixBool::try_new(n)?;
        let mut elements: Vec<i64> = Vec::new();
        elements.try_reserve_exact(n).or(Err(AllocationError { elements: n }))?;
        elements.resize(n, 0);
        Ok(Relation { elements, matrix })
    }

    /// Allocate a relation over `values`, in order. Nothing is related.
    pub fn from_elements(values: &[i64]) -> Result<Self, AllocationError> {
        let mut relation = Relation::allocate(values.len())?;
        relation.elements.copy_from_slice(values);
        Ok(relation)
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.matrix.dim
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    pub fn value(&self, i: usize) -> i64 {
        self.elements[i]
    }

    pub fn set_element(&mut self, i: usize, value: i64) {
        assert!(i < self.len());
        self.elements[i] = value;
    }

    /// Position of the first element equal to `value`.
    pub fn position_of(&self, value: i64) -> Option<usize> {
        self.elements.iter().position(|&e| e == value)
    }

    /// Mark that the element at `x` relates to the element at `y`.
    pub fn set_related(&mut self, x: usize, y: usize) {
        assert!(x < self.len() && y < self.len());
        self.matrix[(x, y)] = true;
    }

    /// Returns true if and only if the element at `x` relates to the element
    /// at `y`.
    #[must_use]
    pub fn is_related(&self, x: usize, y: usize) -> bool {
        self.matrix[(x, y)]
    }

    /// Every related pair, ascending by `x` then `y`.
    pub fn pairs(&self) -> impl Iterator<Item = OrderedPair> + '_ {
        let n = self.len();
        (0..n)
            .flat_map(move |x| (0..n).map(move |y| OrderedPair::new(x, y)))
            .filter(|p| self.is_related(p.x, p.y))
    }

    /// The pair `p` written using element values instead of positions.
    pub fn values_of(&self, p: OrderedPair) -> (i64, i64) {
        (self.value(p.x), self.value(p.y))
    }

    pub(crate) fn matrix(&self) -> &MatrixBool {
        &self.matrix
    }
}

/// Prints the matrix, one row per line.
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.len() {
            for y in 0..self.len() {
                write!(f, "{:3} ", u8::from(self.is_related(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
