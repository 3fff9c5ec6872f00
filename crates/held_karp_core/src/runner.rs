//! Load, solve and report: the calling layer around the solver.

use crate::{
    DistanceMatrix, Error, HeldKarpSolver, Labels, Report, Result, Solution,
    io::{input, report},
    options::SolverOptions,
};

/// Runs one solve end to end using the configured input and output.
pub fn run(options: &SolverOptions) -> Result<Solution> {
    let text = input::read_matrix_text(options)?;
    let (solution, rendered) = solve_text(&text, options)?;
    report::write_report(options, &rendered)?;
    Ok(solution)
}

/// Parses `text`, solves it and renders the report without touching any
/// stream.
pub fn solve_text(text: &str, options: &SolverOptions) -> Result<(Solution, String)> {
    let rows = input::parse_matrix(text)?;
    let matrix = DistanceMatrix::from_rows(&rows)?;
    let n = matrix.n();
    if n > options.max_locations {
        return Err(Error::TooManyLocations {
            n,
            max: options.max_locations,
        });
    }

    let labels = Labels::parse(&options.labels)?;
    if let Some(labels) = &labels {
        labels.check_len(n)?;
    }

    let symmetric = matrix.is_symmetric(options.symmetry_tolerance);
    log::info!("runner.solve: n={n} symmetric={symmetric}");

    let solution = HeldKarpSolver::new(&matrix).solve()?;
    solution.tour.metrics(&matrix);

    let rendered = Report::new(&solution, &options.unit)
        .with_labels(labels.as_ref())
        .with_reversible(symmetric)
        .to_string();

    Ok((solution, rendered))
}
