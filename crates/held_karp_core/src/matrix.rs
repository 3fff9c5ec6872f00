use crate::{
    Error, Result,
    constants::{MAX_LOCATIONS, MIN_LOCATIONS},
};

/// Validated N×N travel costs, stored row-major.
///
/// Construction is the only validation point: once a `DistanceMatrix` exists
/// it is square, has between 2 and [`MAX_LOCATIONS`] locations and every entry
/// is finite and non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n < MIN_LOCATIONS {
            return Err(Error::invalid_shape(format!(
                "expected at least {MIN_LOCATIONS} rows, got {n}"
            )));
        }
        if n > MAX_LOCATIONS {
            return Err(Error::invalid_shape(format!(
                "{n} locations exceed the supported maximum of {MAX_LOCATIONS}"
            )));
        }
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::invalid_shape(format!(
                "row {row} has {} columns, expected {n}",
                values.len()
            )));
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistanceValue { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { n, cells })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            (i + 1..self.n).all(|j| (self.distance(i, j) - self.distance(j, i)).abs() <= tolerance)
        })
    }

    /// Sum of consecutive legs along `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|leg| self.distance(leg[0], leg[1]))
            .sum()
    }
}
