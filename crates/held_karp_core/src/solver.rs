//! Held-Karp dynamic programming over subsets of non-origin locations.
//!
//! The table is filled layer by layer in increasing subset size, because an
//! entry for a subset of size `s` reads only entries of size `s - 1`. Ties
//! keep the first candidate in ascending index order, so a given matrix always
//! yields the same tour.

use std::collections::VecDeque;

use crate::{
    DistanceMatrix, Error, Result, Subset, Tour,
    constants::ORIGIN,
};

/// Optimal cycle cost and one visiting order achieving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub cost: f64,
    pub tour: Tour,
}

/// Validates `rows` and solves in one call.
pub fn solve(rows: &[Vec<f64>]) -> Result<Solution> {
    let matrix = DistanceMatrix::from_rows(rows)?;
    HeldKarpSolver::new(&matrix).solve()
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    predecessor: usize,
}

/// Arena of `(subset, endpoint)` entries.
///
/// Slot `(bits >> 1) * (n - 1) + (endpoint - 1)`; only slots where the
/// endpoint is a member of the subset are ever written or read.
struct DpTable {
    width: usize,
    entries: Vec<Entry>,
}

impl DpTable {
    const UNSET: Entry = Entry {
        cost: f64::INFINITY,
        predecessor: ORIGIN,
    };

    fn allocate(n: usize) -> Result<Self> {
        let width = n - 1;
        let len = (1_usize << width)
            .checked_mul(width)
            .ok_or(Error::TableAllocation {
                entries: usize::MAX,
            })?;

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(len)
            .map_err(|_| Error::TableAllocation { entries: len })?;
        entries.resize(len, Self::UNSET);

        Ok(Self { width, entries })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn slot(&self, subset: Subset, endpoint: usize) -> usize {
        (subset.bits() >> 1) as usize * self.width + (endpoint - 1)
    }

    #[inline]
    fn get(&self, subset: Subset, endpoint: usize) -> Entry {
        self.entries[self.slot(subset, endpoint)]
    }

    #[inline]
    fn set(&mut self, subset: Subset, endpoint: usize, entry: Entry) {
        let slot = self.slot(subset, endpoint);
        self.entries[slot] = entry;
    }
}

/// Solver over one borrowed matrix. The DP table lives only inside
/// [`HeldKarpSolver::solve`].
#[derive(Clone, Copy, Debug)]
pub struct HeldKarpSolver<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> HeldKarpSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    pub fn solve(&self) -> Result<Solution> {
        let n = self.matrix.n();
        let mut table = DpTable::allocate(n)?;
        log::debug!("solver.table: n={n} entries={}", table.len());

        self.seed(&mut table);
        for size in 2..n {
            let subsets = self.extend(&mut table, size);
            log::trace!("solver.layer: size={size} subsets={subsets}");
        }

        let full = Subset::non_origin(n);
        let (cost, last) = self.close(&table, full)?;
        let tour = backtrack(&table, full, last);
        debug_assert!(tour.is_valid_for(n), "backtracked tour is not a cycle: {tour}");

        log::debug!("solver.done: n={n} cost={cost} last={last}");
        Ok(Solution { cost, tour })
    }

    /// Singleton subsets are reached straight from the origin.
    fn seed(&self, table: &mut DpTable) {
        for k in 1..self.matrix.n() {
            table.set(
                Subset::singleton(k),
                k,
                Entry {
                    cost: self.matrix.distance(ORIGIN, k),
                    predecessor: ORIGIN,
                },
            );
        }
    }

    /// Fills every entry whose subset has `size` members. Returns the number
    /// of subsets visited.
    fn extend(&self, table: &mut DpTable, size: usize) -> usize {
        let mut subsets = 0;
        for subset in Subset::of_size(self.matrix.n(), size) {
            for k in subset.locations() {
                let rest = subset.without(k);
                let mut best: Option<Entry> = None;
                for m in rest.locations() {
                    let cost = table.get(rest, m).cost + self.matrix.distance(m, k);
                    if best.is_none_or(|b| cost < b.cost) {
                        best = Some(Entry {
                            cost,
                            predecessor: m,
                        });
                    }
                }
                table.set(subset, k, best.unwrap_or(DpTable::UNSET));
            }
            subsets += 1;
        }
        subsets
    }

    /// Picks the endpoint whose return leg to the origin closes the cheapest
    /// cycle.
    fn close(&self, table: &DpTable, full: Subset) -> Result<(f64, usize)> {
        let mut best: Option<(f64, usize)> = None;
        for k in full.locations() {
            let cost = table.get(full, k).cost + self.matrix.distance(k, ORIGIN);
            if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                best = Some((cost, k));
            }
        }
        best.ok_or_else(|| Error::invalid_shape("no locations besides the origin"))
    }
}

fn backtrack(table: &DpTable, full: Subset, last: usize) -> Tour {
    let mut order = VecDeque::with_capacity(full.len() + 2);
    let mut subset = full;
    let mut endpoint = last;

    while !subset.is_empty() {
        order.push_front(endpoint);
        let predecessor = table.get(subset, endpoint).predecessor;
        subset = subset.without(endpoint);
        endpoint = predecessor;
    }

    order.push_front(ORIGIN);
    order.push_back(ORIGIN);
    Tour::new(order.into())
}
