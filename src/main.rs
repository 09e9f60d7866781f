use clap::{App, Arg};
use dpllsat::{Formula, FormulaError, SatResult, Solver};

// The classic pair of demo formulas: the first has a model, the second
// enumerates every clause over three variables and has none.
fn samples() -> Result<Vec<Formula>, FormulaError> {
    Ok(vec![
        Formula::from_ints(vec![
            vec![1, 2, 3],
            vec![-1, 2, -3],
            vec![1, -2, 3],
            vec![-1, -2, -3],
        ])?,
        Formula::from_ints(vec![
            vec![1, 2, 3],
            vec![1, 2, -3],
            vec![1, -2, 3],
            vec![1, -2, -3],
            vec![-1, 2, 3],
            vec![-1, 2, -3],
            vec![-1, -2, 3],
            vec![-1, -2, -3],
        ])?,
    ])
}

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat")
        .arg(
            Arg::with_name("SAMPLE")
                .help("index of the built-in sample formula to solve (default: all)")
                .index(1),
        )
        .get_matches();

    let samples = match samples() {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("bad sample formula: {}", e);
            std::process::exit(2);
        }
    };

    let selected: Vec<Formula> = match matches.value_of("SAMPLE") {
        None => samples,
        Some(index) => match index.parse::<usize>().ok().and_then(|i| samples.get(i).cloned()) {
            Some(f) => vec![f],
            None => {
                eprintln!("no sample formula with index {}", index);
                std::process::exit(2);
            }
        },
    };

    let mut all_satisfiable = true;
    for formula in selected {
        println!("formula: {}", formula);
        match Solver::new(formula).solve() {
            SatResult::Satisfiable(assignment) => {
                println!("satisfiable: {}", assignment);
            }
            SatResult::Unsatisfiable => {
                all_satisfiable = false;
                println!("unsatisfiable");
            }
        }
    }

    std::process::exit(if all_satisfiable { 0 } else { 1 });
}
