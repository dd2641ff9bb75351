use std::{fmt, ops::Deref};

/// A pair of element positions `(x, y)`, meaning the element at position `x`
/// relates to the element at position `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedPair {
    pub x: usize,
    pub y: usize,
}

impl OrderedPair {
    pub fn new(x: usize, y: usize) -> Self {
        OrderedPair { x, y }
    }
}

impl From<(usize, usize)> for OrderedPair {
    fn from((x, y): (usize, usize)) -> Self {
        OrderedPair { x, y }
    }
}

impl fmt::Display for OrderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Ordered list of pairs without duplicates. Pairs keep the position of their
/// first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: Vec<OrderedPair>,
}

impl PairList {
    pub fn new() -> Self {
        PairList { pairs: Vec::new() }
    }

    /// Append `pair` unless it is already in the list. Returns true if it was
    /// added.
    pub fn add_if_absent(&mut self, pair: OrderedPair) -> bool {
        if self.pairs.contains(&pair) {
            return false;
        }
        self.pairs.push(pair);
        true
    }

    pub fn contains(&self, pair: OrderedPair) -> bool {
        self.pairs.contains(&pair)
    }

    pub fn as_slice(&self) -> &[OrderedPair] {
        &self.pairs
    }
}

impl Deref for PairList {
    type Target = [OrderedPair];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a OrderedPair;
    type IntoIter = std::slice::Iter<'a, OrderedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl Extend<OrderedPair> for PairList {
    fn extend<T: IntoIterator<Item = OrderedPair>>(&mut self, iter: T) {
        for pair in iter {
            self.add_if_absent(pair);
        }
    }
}

impl FromIterator<OrderedPair> for PairList {
    fn from_iter<T: IntoIterator<Item = OrderedPair>>(iter: T) -> Self {
        let mut list = PairList::new();
        list.extend(iter);
        list
    }
}
