use crate::formula::{Assignment, Formula, Literal, Variable};
use crate::SatResult;
use log::trace;

/// A backtracking DPLL solver over a CNF formula. Solving is a pure
/// function of the formula and the initial assignment, so one solver can
/// be queried repeatedly with identical results.
pub struct Solver {
    formula: Formula,
    assignment: Assignment,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self::with_assignment(formula, Assignment::new())
    }

    /// Starts the search from a pre-existing partial assignment. The
    /// formula is taken as given; clauses are not pre-simplified against
    /// the assignment.
    pub fn with_assignment(formula: Formula, assignment: Assignment) -> Self {
        Self { formula, assignment }
    }

    pub fn solve(&self) -> SatResult {
        dpll(self.formula.clone(), self.assignment.clone())
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
enum Propagation {
    Simplified(Formula, Assignment),
    Conflict(Variable),
}

// true iff every clause has a literal that evaluates true under the
// current assignment. Unassigned literals do not count, so this answers
// "is it satisfied right now", not "could it still be satisfied".
fn is_satisfied(formula: &Formula, assignment: &Assignment) -> bool {
    formula
        .clauses()
        .all(|clause| clause.literals().any(|literal| assignment.satisfies(literal)))
}

// Forces the sole literal of every length-1 clause to a fixed point.
// Opposing unit clauses for one variable are a conflict, reported
// eagerly instead of letting the later clause overwrite the earlier.
fn unit_propagate(mut formula: Formula, mut assignment: Assignment) -> Propagation {
    loop {
        let units: Vec<Literal> =
            formula.clauses().filter_map(|clause| clause.unit_literal()).cloned().collect();
        if units.is_empty() {
            return Propagation::Simplified(formula, assignment);
        }
        for literal in units {
            let variable = *literal.variable();
            match assignment.value(variable) {
                Some(value) if value == literal.is_positive() => continue,
                Some(_) => {
                    trace!("opposing unit clauses for {:?}", variable);
                    return Propagation::Conflict(variable);
                }
                None => {}
            }
            trace!("unit clause implies {}", literal);
            assignment.set(variable, literal.is_positive());
            formula = formula.assume(&literal);
        }
    }
}

// Assigns every literal whose negation appears nowhere in the formula and
// drops the clauses it satisfies. The whole batch found in one scan is
// eliminated, in sorted order so runs are reproducible.
fn assign_pure_literals(
    mut formula: Formula,
    mut assignment: Assignment,
) -> (Formula, Assignment) {
    let literals: std::collections::BTreeSet<Literal> =
        formula.clauses().flat_map(|clause| clause.literals()).cloned().collect();
    let pure: Vec<Literal> = literals
        .iter()
        .filter(|literal| !literals.contains(&literal.negated()))
        .cloned()
        .collect();
    for literal in pure {
        trace!("pure literal {}", literal);
        assignment.set(*literal.variable(), literal.is_positive());
        formula =
            Formula::new(formula.clauses().filter(|clause| !clause.contains(&literal)).cloned());
    }
    (formula, assignment)
}

// First literal, in clause order then literal order, whose variable is
// still unassigned.
fn decide(formula: &Formula, assignment: &Assignment) -> Option<Variable> {
    formula
        .clauses()
        .flat_map(|clause| clause.literals())
        .map(|literal| *literal.variable())
        .find(|variable| !assignment.contains(*variable))
}

fn dpll(formula: Formula, assignment: Assignment) -> SatResult {
    if is_satisfied(&formula, &assignment) {
        return SatResult::Satisfiable(assignment);
    }
    if formula.has_empty_clause() {
        return SatResult::Unsatisfiable;
    }

    let (formula, assignment) = match unit_propagate(formula, assignment) {
        Propagation::Simplified(formula, assignment) => (formula, assignment),
        Propagation::Conflict(_) => return SatResult::Unsatisfiable,
    };
    let (formula, assignment) = assign_pure_literals(formula, assignment);

    if is_satisfied(&formula, &assignment) {
        return SatResult::Satisfiable(assignment);
    }
    if formula.has_empty_clause() {
        return SatResult::Unsatisfiable;
    }

    let variable = match decide(&formula, &assignment) {
        Some(variable) => variable,
        // every remaining clause is fully assigned yet unsatisfied
        None => return SatResult::Unsatisfiable,
    };

    trace!("decide {:?} = true", variable);
    let mut true_assignment = assignment.clone();
    true_assignment.set(variable, true);
    let true_branch = dpll(formula.assume(&Literal::Positive(variable)), true_assignment);
    if let SatResult::Satisfiable(model) = true_branch {
        return SatResult::Satisfiable(model);
    }

    trace!("decide {:?} = false", variable);
    let mut false_assignment = assignment;
    false_assignment.set(variable, false);
    dpll(formula.assume(&Literal::Negative(variable)), false_assignment)
}
