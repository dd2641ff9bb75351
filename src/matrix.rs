use std::ops::{Index, IndexMut};

use crate::error::AllocationError;

/// Square boolean matrix stored in a single buffer, `elements[i * dim + j]`
/// is the cell at row `i`, column `j`.
#[derive(Debug, PartialEq, Eq, Default)]
pub(crate) struct MatrixBool {
    pub(crate) dim: usize,
    pub(crate) elements: Vec<bool>,
}

impl Clone for MatrixBool {
    fn clone(&self) -> Self {
        Self { dim: self.dim, elements: self.elements.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.elements.clone_from(&source.elements);
    }
}

impl MatrixBool {
    /// Allocate a `dim` by `dim` matrix with every cell `false`.
    ///
    /// Returns `Err` if it failed to allocate
    pub fn try_new(dim: usize) -> Result<Self, AllocationError> {
        let cells = dim.checked_mul(dim).ok_or(AllocationError { elements: dim })?;
        let mut elements: Vec<bool> = Vec::new();
        elements.try_reserve_exact(cells).or(Err(AllocationError { elements: dim }))?;
        elements.resize(cells, false);
        Ok(Self { dim, elements })
    }

    #[cfg(test)]
    pub fn from_vec(elements: Vec<bool>, dim: usize) -> Self {
        assert!(dim * dim == elements.len());
        Self { elements, dim }
    }

    /// Returns true if `(a, b)`, `(b, c)` are set but `(a, c)` is not, for
    /// some `a`, `b`, `c`.
    pub fn has_transitive_gap(&self) -> bool {
        for a in 0..self.dim {
            for b in 0..self.dim {
                if !self[(a, b)] {
                    continue;
                }
                for c in 0..self.dim {
                    if self[(b, c)] && !self[(a, c)] {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Index<(usize, usize)> for MatrixBool {
    type Output = bool;

    fn index(&self, i: (usize, usize)) -> &Self::Output {
        assert!(i.0 < self.dim && i.1 < self.dim);
        &self.elements[i.0 * self.dim + i.1]
    }
}

impl IndexMut<(usize, usize)> for MatrixBool {
    fn index_mut(&mut self, i: (usize, usize)) -> &mut Self::Output {
        assert!(i.0 < self.dim && i.1 < self.dim);
        &mut self.elements[i.0 * self.dim + i.1]
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixBool;

    #[test]
    fn new_is_zeroed() {
        let m = MatrixBool::try_new(7).unwrap();
        assert_eq!(m.elements.len(), 49);
        assert!(m.elements.iter().all(|&b| !b));
    }

    #[test]
    fn empty() {
        let m = MatrixBool::try_new(0).unwrap();
        assert!(m.elements.is_empty());
        assert!(!m.has_transitive_gap());
    }

    #[test]
    fn row_major() {
        let mut m = MatrixBool::try_new(3).unwrap();
        m[(0, 2)] = true;
        assert!(m.elements[2]);
        assert!(!m[(2, 0)]);
    }

    #[test]
    fn overflowing_dimension() {
        assert!(MatrixBool::try_new(usize::MAX).is_err());
    }

    #[test]
    fn gap() {
        #[rustfmt::skip]
        let m = MatrixBool::from_vec(vec![
            false, true, false,
            false, false, true,
            false, false, false,
        ], 3);
        assert!(m.has_transitive_gap());
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let m = MatrixBool::try_new(2).unwrap();
        let _ = m[(2, 0)];
    }
}
