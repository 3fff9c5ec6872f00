use std::fmt;

use crate::{DistanceMatrix, constants::ORIGIN};

/// A closed visiting order: starts and ends at the origin and visits every
/// other location exactly once in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The tour without its two origin endpoints.
    pub fn interior(&self) -> &[usize] {
        match self.indices.len() {
            0..=2 => &[],
            len => &self.indices[1..len - 1],
        }
    }

    /// True when this is a closed cycle over exactly `n` locations.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.indices.len() != n + 1
            || self.indices.first() != Some(&ORIGIN)
            || self.indices.last() != Some(&ORIGIN)
        {
            return false;
        }

        let mut seen = vec![false; n];
        seen[ORIGIN] = true;
        for &location in self.interior() {
            if location >= n || seen[location] {
                return false;
            }
            seen[location] = true;
        }
        seen.into_iter().all(|visited| visited)
    }

    pub fn metrics(&self, matrix: &DistanceMatrix) -> TourMetrics {
        let legs = self.indices.len().saturating_sub(1);
        if legs == 0 {
            log::info!("metrics: legs=0 so there's nothing to report");
            return TourMetrics::default();
        }

        let distances: Vec<f64> = self
            .indices
            .windows(2)
            .map(|leg| matrix.distance(leg[0], leg[1]))
            .collect();
        let total: f64 = distances.iter().sum();
        let longest = distances.iter().copied().fold(0.0_f64, f64::max);
        let average = total / legs as f64;

        log::info!("metrics: legs={legs} total={total} longest={longest} avg={average:.3}");

        TourMetrics {
            legs,
            total,
            longest,
            average,
        }
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, location) in self.indices.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub legs: usize,
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::{Tour, TourMetrics};
    use crate::DistanceMatrix;

    #[test]
    fn is_valid_for_accepts_closed_permutations() {
        assert!(Tour::new(vec![0, 2, 1, 3, 0]).is_valid_for(4));
        assert!(Tour::new(vec![0, 1, 0]).is_valid_for(2));
    }

    #[test]
    fn is_valid_for_rejects_open_short_or_repeating_tours() {
        assert!(!Tour::new(vec![1, 2, 0, 1]).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 2]).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 1, 0]).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 5, 0]).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 0, 0]).is_valid_for(3));
    }

    #[test]
    fn interior_strips_origin_endpoints() {
        assert_eq!(Tour::new(vec![0, 3, 1, 2, 0]).interior(), &[3, 1, 2]);
        assert!(Tour::new(vec![0, 0]).interior().is_empty());
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(Tour::new(vec![0, 2, 1, 0]).to_string(), "0 -> 2 -> 1 -> 0");
    }

    #[test]
    fn metrics_report_total_longest_and_average_leg() {
        let matrix = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 6.0],
            vec![2.0, 6.0, 0.0],
        ])
        .expect("valid matrix");
        let metrics = Tour::new(vec![0, 1, 2, 0]).metrics(&matrix);
        assert_eq!(
            metrics,
            TourMetrics {
                legs: 3,
                total: 9.0,
                longest: 6.0,
                average: 3.0,
            }
        );
    }

    #[test]
    fn metrics_of_empty_tour_are_default() {
        let matrix = DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]])
            .expect("valid matrix");
        assert_eq!(Tour::new(Vec::new()).metrics(&matrix), TourMetrics::default());
    }
}
