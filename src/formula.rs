use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};

/// A propositional variable, identified by a positive 1-based index.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl TryFrom<isize> for Literal {
    type Error = FormulaError;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Literal::Positive(Variable(value as usize)))
        } else if value < 0 {
            Ok(Literal::Negative(Variable(-value as usize)))
        } else {
            Err(FormulaError::ZeroLiteral)
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

/// A disjunction of literals. Duplicates are kept as given.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// An empty clause can never be satisfied.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The sole literal of a length-1 clause.
    pub fn unit_literal(&self) -> Option<&Literal> {
        if self.literals.len() == 1 {
            self.literals.first()
        } else {
            None
        }
    }
}

/// A conjunction of clauses. An empty formula is vacuously satisfied.
#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    /// Builds a formula from signed-integer literals, the usual CNF
    /// convention: positive asserts the variable, negative denies it.
    /// Rejects the reserved value 0.
    pub fn from_ints(
        conjuncts: impl IntoIterator<Item = impl IntoIterator<Item = isize>>,
    ) -> Result<Self, FormulaError> {
        let clauses = conjuncts
            .into_iter()
            .map(|clause| {
                clause
                    .into_iter()
                    .map(Literal::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Clause::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Every variable mentioned by some literal.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| *literal.variable())
            .collect()
    }

    /// The formula under the assumption that `literal` holds: clauses
    /// containing it are satisfied and dropped, its negation is struck
    /// from the rest. `self` is left untouched.
    pub fn assume(&self, literal: &Literal) -> Formula {
        let negated = literal.negated();
        Formula::new(self.clauses.iter().filter(|clause| !clause.contains(literal)).map(|clause| {
            Clause::new(clause.literals().filter(|l| **l != negated).cloned())
        }))
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            if clause.literals.len() != 1 {
                f.write_str("(")?;
            }
            let mut first_literal = true;
            for literal in &clause.literals {
                if first_literal {
                    first_literal = false;
                } else {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", literal)?;
            }
            if clause.literals.len() != 1 {
                f.write_str(")")?;
            }
        }
        Ok(())
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Debug::fmt(self, f)
    }
}

/// A partial valuation of variables. Each branch of the search works on
/// its own copy, so siblings never observe each other's choices.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Assignment {
    values: HashMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.values.contains_key(&variable)
    }

    pub fn set(&mut self, variable: Variable, value: bool) {
        self.values.insert(variable, value);
    }

    /// Whether the literal evaluates to true right now. An unassigned
    /// variable never satisfies a literal.
    pub fn satisfies(&self, literal: &Literal) -> bool {
        self.value(*literal.variable()) == Some(literal.is_positive())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &bool)> {
        self.values.iter()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let sorted: BTreeMap<_, _> = self.values.iter().collect();
        f.write_str("{")?;
        let mut first = true;
        for (Variable(x), value) in sorted {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", x, value)?;
        }
        f.write_str("}")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormulaError {
    /// Literal value 0 is reserved and never denotes a variable.
    ZeroLiteral,
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FormulaError::ZeroLiteral => f.write_str("literal 0 is not a valid literal"),
        }
    }
}

impl std::error::Error for FormulaError {}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

// Random formulas with up to 3 literals per clause over a small variable
// pool, sized so the brute-force oracle stays cheap.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::collection::vec;
    use proptest::prelude::*;

    vec(vec((1..=6usize, any::<bool>()), 1..=3), 0..=10).prop_map(|clauses| {
        Formula::new(clauses.into_iter().map(|clause| {
            Clause::new(clause.into_iter().map(|(x, positive)| {
                if positive {
                    Literal::Positive(Variable(x))
                } else {
                    Literal::Negative(Variable(x))
                }
            }))
        }))
    })
}
