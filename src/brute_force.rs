use crate::*;

// Exhaustive enumeration over the formula's variables, used as the
// oracle for property tests. Unlike the solver it only reports the
// verdict, since many total assignments can witness satisfiability.
pub(crate) fn solve_brute_force(f: &Formula) -> bool {
    let variables: Vec<Variable> = f.variables().into_iter().collect();
    assert!(variables.len() <= 16); // just for safety

    let satisfies = |bits: u32, literal: &Literal| {
        let idx = variables
            .iter()
            .position(|v| v == literal.variable())
            .expect("literal over an unknown variable");
        (bits & (1 << idx) != 0) == literal.is_positive()
    };

    'search: for bits in 0..1u32 << variables.len() {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                if satisfies(bits, literal) {
                    // this clause is satisfied, on to the next one
                    continue 'clauses;
                }
            }
            // an unsatisfied clause sinks this whole assignment
            continue 'search;
        }
        // every clause held, so the formula is satisfiable
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn brute_force_empty_formula() {
        assert!(solve_brute_force(&Formula::new(vec![])));
    }

    #[test]
    fn brute_force_empty_clause() {
        let f = Formula::new(vec![Clause::new(vec![])]);
        assert!(!solve_brute_force(&f));
    }

    #[test]
    fn brute_force_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2]);
        assert!(solve_brute_force(&f));
    }

    #[test]
    fn brute_force_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(vec![c1, c2, c3]);
        assert!(!solve_brute_force(&f));
    }

    #[test]
    fn brute_force_opposing_units() {
        let f = Formula::new(vec![Clause::new(vec![p(1)]), Clause::new(vec![n(1)])]);
        assert!(!solve_brute_force(&f));
    }
}
