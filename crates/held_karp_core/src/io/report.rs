use std::{
    fmt, fs,
    io::{self, Write},
};

use crate::{Error, Labels, Result, Solution, options::SolverOptions};

const ARROW: &str = " -> ";
const REVERSIBLE_SUFFIX: &str = " (and vice versa)";

/// Human-facing rendering of a [`Solution`].
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    solution: &'a Solution,
    labels: Option<&'a Labels>,
    unit: &'a str,
    reversible: bool,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution, unit: &'a str) -> Self {
        Self {
            solution,
            labels: None,
            unit,
            reversible: false,
        }
    }

    pub fn with_labels(mut self, labels: Option<&'a Labels>) -> Self {
        self.labels = labels;
        self
    }

    /// Marks the tour as equally optimal in reverse, which only holds for a
    /// symmetric matrix.
    pub fn with_reversible(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    fn suffix(&self) -> &'static str {
        if self.reversible { REVERSIBLE_SUFFIX } else { "" }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = ryu::Buffer::new();
        let cost = buffer.format(self.solution.cost);

        writeln!(f, "HELD-KARP ALGORITHM:")?;
        if self.unit.is_empty() {
            writeln!(f, "Shortest distance    : {cost}")?;
        } else {
            writeln!(f, "Shortest distance    : {cost} {}", self.unit)?;
        }
        writeln!(
            f,
            "Shortest path (index): {}{}",
            self.solution.tour,
            self.suffix()
        )?;

        if let Some(labels) = self.labels {
            let names: Vec<String> = self
                .solution
                .tour
                .indices()
                .iter()
                .map(|&idx| {
                    labels
                        .name(idx)
                        .map_or_else(|| idx.to_string(), str::to_string)
                })
                .collect();
            writeln!(f, "Shortest path (label): {}{}", names.join(ARROW), self.suffix())?;
        }

        Ok(())
    }
}

/// Writes `report` to `--output`, or stdout when unset.
pub(crate) fn write_report(options: &SolverOptions, report: &str) -> Result<()> {
    match options.output_path() {
        Some(path) => fs::write(path, report).map_err(|e| {
            Error::other(format!("failed to write output {}: {e}", path.display()))
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use crate::{Labels, solve};

    fn triangle() -> crate::Solution {
        solve(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .expect("solve")
    }

    #[test]
    fn report_prints_cost_unit_and_index_path() {
        let solution = triangle();
        let text = Report::new(&solution, "km").to_string();
        assert_eq!(
            text,
            "HELD-KARP ALGORITHM:\n\
             Shortest distance    : 4.0 km\n\
             Shortest path (index): 0 -> 2 -> 1 -> 0\n"
        );
    }

    #[test]
    fn report_marks_reversible_tours_and_maps_labels() {
        let solution = triangle();
        let labels = Labels::parse("KUL,JAK,BKK").expect("parse").expect("present");
        let text = Report::new(&solution, "km")
            .with_labels(Some(&labels))
            .with_reversible(true)
            .to_string();

        assert!(text.contains("Shortest path (index): 0 -> 2 -> 1 -> 0 (and vice versa)\n"));
        assert!(text.contains("Shortest path (label): KUL -> BKK -> JAK -> KUL (and vice versa)\n"));
    }

    #[test]
    fn report_omits_empty_unit() {
        let solution = triangle();
        let text = Report::new(&solution, "").to_string();
        assert!(text.contains("Shortest distance    : 4.0\n"));
    }
}
