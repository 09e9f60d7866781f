mod formula;
mod solver;

#[cfg(test)]
mod brute_force;

/// Outcome of a satisfiability search. A success carries the assignment
/// that was found; it may leave variables undecided when the formula was
/// already satisfied without them. Failure carries nothing — a partial
/// assignment that led into a contradiction is meaningless to callers.
#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Assignment),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        match self {
            SatResult::Satisfiable(_) => true,
            SatResult::Unsatisfiable => false,
        }
    }
}

pub use formula::{Assignment, Clause, Formula, FormulaError, Literal, Variable};
pub use solver::Solver;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::formula_3sat_strategy;
    use brute_force::solve_brute_force;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_satisfied(f: &Formula, assignment: &Assignment) -> bool {
        f.clauses().all(|clause| clause.literals().any(|l| assignment.satisfies(l)))
    }

    proptest! {
        #[test]
        fn proptest_solver_matches_brute_force(f in formula_3sat_strategy()) {
            let brute_force = solve_brute_force(&f);
            let solver = Solver::new(f).solve();
            prop_assert_eq!(solver.is_satisfiable(), brute_force);
        }

        #[test]
        fn proptest_models_are_sound(f in formula_3sat_strategy()) {
            if let SatResult::Satisfiable(model) = Solver::new(f.clone()).solve() {
                prop_assert!(is_satisfied(&f, &model));
            }
        }

        #[test]
        fn proptest_solving_is_deterministic(f in formula_3sat_strategy()) {
            let solver = Solver::new(f);
            prop_assert_eq!(solver.solve(), solver.solve());
        }
    }

    // A fixed seed gives one concrete, repeatable medium-sized formula;
    // two independent solvers must agree literal for literal.
    #[test]
    fn seeded_random_formula_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(20);
        let f = Formula::new((0..30).map(|_| {
            Clause::new((0..3).map(|_| {
                let variable = Variable(rng.gen_range(1, 9));
                if rng.gen::<bool>() {
                    Literal::Positive(variable)
                } else {
                    Literal::Negative(variable)
                }
            }))
        }));

        let first = Solver::new(f.clone()).solve();
        let second = Solver::new(f.clone()).solve();
        assert_eq!(first, second);
        assert_eq!(first.is_satisfiable(), solve_brute_force(&f));
        if let SatResult::Satisfiable(model) = first {
            assert!(is_satisfied(&f, &model));
        }
    }
}
