//! The text format relations are read from.
//!
//! ```text
//! 3
//! 1 2 3
//! 1 2
//! 2 3
//! ```
//!
//! The first line is the number of elements, the second line the elements
//! themselves, and every following pair of integers `x y` relates `x` to `y`.
//! Pairs are only separated by whitespace, so several pairs may share a line.
use std::{fmt, io::BufRead};

use tracing::{debug, info, warn};

use crate::{error::ParseError, relation::Relation};

/// Why reading the pairs stopped before the end of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Truncation {
    /// A pair named a value that isn't one of the elements.
    UnknownElement(i64),
    /// The input ended after the first value of a pair.
    DanglingValue(i64),
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::UnknownElement(v) => write!(f, "element not found: {}", v),
            Truncation::DanglingValue(v) => write!(f, "value {} has no pair", v),
        }
    }
}

/// A parsed relation. If `stopped` is set, the pairs before the offending one
/// are in `relation` and the rest of the input was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingest {
    pub relation: Relation,
    pub stopped: Option<Truncation>,
}

pub fn parse<T: BufRead>(f: &mut T) -> Result<Ingest, ParseError> {
    let mut buf = String::new();
    if f.read_line(&mut buf)? == 0 {
        return Err(ParseError::NoInput);
    }
    remove_newline(&mut buf);

    let mut tokens = buf.split_whitespace();
    let count = tokens.next().ok_or(ParseError::NoInput)?;
    let n: usize = count.parse().or(Err(ParseError::InvalidCount(count.to_string())))?;

    // The elements normally follow on their own line, but may also share the
    // line of the count.
    let mut values = parse_numbers(tokens)?;
    if values.is_empty() {
        buf.clear();
        f.read_line(&mut buf)?;
        remove_newline(&mut buf);
        values = parse_numbers(buf.split_whitespace())?;
    }
    if values.is_empty() {
        return Err(ParseError::NoElements);
    }
    if values.len() != n {
        return Err(ParseError::ElementCountMismatch { expected: n, found: values.len() });
    }

    let mut relation = Relation::allocate(n)?;
    for (i, &v) in values.iter().enumerate() {
        relation.set_element(i, v);
    }
    debug!(elements = n, "read elements");

    buf.clear();
    f.read_to_string(&mut buf)?;
    let stopped = add_pairs(&mut relation, &buf)?;
    Ok(Ingest { relation, stopped })
}

/// Read pairs from `s` into `relation` until the input ends or a pair can't
/// be added.
pub fn add_pairs(relation: &mut Relation, s: &str) -> Result<Option<Truncation>, ParseError> {
    let mut tokens = s.split_whitespace();
    let mut pairs = 0;
    while let Some(a) = tokens.next() {
        let x = parse_number(a)?;
        let y = match tokens.next() {
            Some(b) => parse_number(b)?,
            None => {
                warn!(value = x, "relation input ended in the middle of a pair");
                return Ok(Some(Truncation::DanglingValue(x)));
            }
        };
        let Some(xi) = relation.position_of(x) else {
            warn!(value = x, pairs, "element not found");
            return Ok(Some(Truncation::UnknownElement(x)));
        };
        let Some(yi) = relation.position_of(y) else {
            warn!(value = y, pairs, "element not found");
            return Ok(Some(Truncation::UnknownElement(y)));
        };
        relation.set_related(xi, yi);
        pairs += 1;
    }
    if pairs == 0 {
        info!("no relation defined");
    } else {
        debug!(pairs, "read relation");
    }
    Ok(None)
}

fn parse_number(s: &str) -> Result<i64, ParseError> {
    s.parse().or(Err(ParseError::InvalidNumber(s.to_string())))
}

fn parse_numbers<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Result<Vec<i64>, ParseError> {
    tokens.map(parse_number).collect()
}

fn remove_newline(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Analysis, Property};

    fn parse_str(s: &str) -> Result<Ingest, ParseError> {
        parse(&mut s.as_bytes())
    }

    #[test]
    fn simple() {
        let ingest = parse_str("3\n1 2 3\n1 2\n2 3\n").unwrap();
        assert_eq!(ingest.stopped, None);
        let r = &ingest.relation;
        assert_eq!(r.elements(), &[1, 2, 3]);
        assert!(r.is_related(0, 1));
        assert!(r.is_related(1, 2));
        assert_eq!(r.pairs().count(), 2);
    }

    #[test]
    fn pairs_share_lines() {
        let ingest = parse_str("3\n7 8 9\n7 8 8 9\n9\n7").unwrap();
        assert_eq!(ingest.stopped, None);
        assert_eq!(ingest.relation.pairs().count(), 3);
        assert!(ingest.relation.is_related(2, 0));
    }

    #[test]
    fn elements_on_count_line() {
        let ingest = parse_str("2 5 6\n5 6\n").unwrap();
        assert_eq!(ingest.relation.elements(), &[5, 6]);
        assert!(ingest.relation.is_related(0, 1));
    }

    #[test]
    fn crlf() {
        let ingest = parse_str("2\r\n1 2\r\n2 1\r\n").unwrap();
        assert!(ingest.relation.is_related(1, 0));
    }

    #[test]
    fn no_relation() {
        let ingest = parse_str("2\n1 2\n").unwrap();
        assert_eq!(ingest.stopped, None);
        assert_eq!(ingest.relation.pairs().count(), 0);
        let a = Analysis::run(&ingest.relation);
        assert!(!a.result(Property::Reflexive).holds);
    }

    #[test]
    fn unknown_element_keeps_earlier_pairs() {
        let ingest = parse_str("3\n1 2 3\n1 2\n4 1\n2 3\n").unwrap();
        assert_eq!(ingest.stopped, Some(Truncation::UnknownElement(4)));
        let r = &ingest.relation;
        assert!(r.is_related(0, 1));
        assert!(!r.is_related(1, 2));
        assert_eq!(r.pairs().count(), 1);
    }

    #[test]
    fn unknown_second_element() {
        let ingest = parse_str("2\n1 2\n1 1\n2 5\n").unwrap();
        assert_eq!(ingest.stopped, Some(Truncation::UnknownElement(5)));
        assert_eq!(ingest.relation.pairs().count(), 1);
    }

    #[test]
    fn unknown_element_ignores_invalid_tail() {
        let ingest = parse_str("1\n1\n1 9\nnot numbers\n").unwrap();
        assert_eq!(ingest.stopped, Some(Truncation::UnknownElement(9)));
    }

    #[test]
    fn dangling() {
        let ingest = parse_str("2\n1 2\n1 2\n2").unwrap();
        assert_eq!(ingest.stopped, Some(Truncation::DanglingValue(2)));
        assert_eq!(ingest.relation.pairs().count(), 1);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse_str(""), Err(ParseError::NoInput)));
        assert!(matches!(parse_str("\n"), Err(ParseError::NoInput)));
        assert!(matches!(parse_str("x\n1\n"), Err(ParseError::InvalidCount(_))));
        assert!(matches!(parse_str("-1\n1\n"), Err(ParseError::InvalidCount(_))));
        assert!(matches!(parse_str("2\n"), Err(ParseError::NoElements)));
        assert!(matches!(parse_str("2\n\n1 2\n"), Err(ParseError::NoElements)));
        assert!(matches!(parse_str("2\n1 a\n"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_str("2\n1 2\n1 b\n"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(
            parse_str("3\n1 2\n"),
            Err(ParseError::ElementCountMismatch { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn add_to_existing() {
        let mut r = Relation::from_elements(&[1, 2]).unwrap();
        assert_eq!(add_pairs(&mut r, "1 1 2 2").unwrap(), None);
        assert!(r.is_related(0, 0) && r.is_related(1, 1));
    }
}
