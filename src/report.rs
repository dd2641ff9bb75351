use std::fmt::{self, Display};

use crate::{
    formats::Truncation,
    pairs::PairList,
    properties::{Analysis, Property},
    relation::Relation,
};

/// Language of the labels in a [`Report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    pub fn property(self, p: Property) -> &'static str {
        match self {
            Language::English => p.name(),
            Language::Portuguese => match p {
                Property::Reflexive => "Reflexiva",
                Property::Irreflexive => "Irreflexiva",
                Property::Symmetric => "Simetrica",
                Property::Antisymmetric => "Anti-simetrica",
                Property::Asymmetric => "Assimetrica",
                Property::Transitive => "Transitiva",
            },
        }
    }

    /// Message for input that stopped early.
    pub fn truncation(self, t: Truncation) -> String {
        match (self, t) {
            (Language::English, t) => t.to_string(),
            (Language::Portuguese, Truncation::UnknownElement(v)) => {
                format!("Elemento nao encontrado {}", v)
            }
            (Language::Portuguese, Truncation::DanglingValue(v)) => format!("Valor {} sem par", v),
        }
    }

    fn equivalence(self) -> &'static str {
        match self {
            Language::English => "Equivalence relation",
            Language::Portuguese => "Relacao de equivalencia",
        }
    }

    fn partial_order(self) -> &'static str {
        match self {
            Language::English => "Partial order",
            Language::Portuguese => "Relacao de ordem parcial",
        }
    }

    fn closure(self) -> &'static str {
        match self {
            Language::English => "Transitive closure",
            Language::Portuguese => "Fecho transitivo da relacao",
        }
    }
}

/// Summary of an [`Analysis`], with every pair written using the values of
/// `relation`.
pub struct Report<'a> {
    pub relation: &'a Relation,
    pub analysis: &'a Analysis,
    /// Printed as the closure, normally `analysis.closure`.
    pub closure: &'a PairList,
    pub language: Language,
}

impl<'a> Report<'a> {
    pub fn new(relation: &'a Relation, analysis: &'a Analysis, language: Language) -> Self {
        Report { relation, analysis, closure: &analysis.closure, language }
    }

    fn write_pairs(&self, f: &mut fmt::Formatter<'_>, pairs: &PairList) -> fmt::Result {
        for &p in pairs {
            let (x, y) = self.relation.values_of(p);
            write!(f, "({},{}); ", x, y)?;
        }
        writeln!(f)
    }
}

fn verdict(b: bool) -> char {
    if b { 'V' } else { 'F' }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language == Language::Portuguese {
            writeln!(f)?;
        }
        for result in self.analysis.results() {
            write!(f, "{}: {}", self.language.property(result.property), verdict(result.holds))?;
            if !result.counterexamples.is_empty() {
                writeln!(f)?;
            }
            self.write_pairs(f, &result.counterexamples)?;
        }
        let compound = &self.analysis.compound;
        writeln!(f, "{}: {}", self.language.equivalence(), verdict(compound.is_equivalence))?;
        writeln!(f, "{}: {}", self.language.partial_order(), verdict(compound.is_partial_order))?;
        write!(f, "{}: ", self.language.closure())?;
        self.write_pairs(f, self.closure)
    }
}
