//! Exact travelling-salesman tours for small location sets using Held-Karp
//! dynamic programming.
//! Includes the text matrix loader, label mapping and report used by the CLI.

mod constants;
mod error;
mod io;
pub mod logging;
mod matrix;
pub mod runner;
mod solver;
mod subset;
mod tour;

pub(crate) use io::options;

pub use constants::MAX_LOCATIONS;
pub use error::{Error, Result};
pub use io::input::parse_matrix;
pub use io::labels::Labels;
pub use io::options::{LogFormat, LogLevel, SolverOptions};
pub use io::report::Report;
pub use matrix::DistanceMatrix;
pub use solver::{HeldKarpSolver, Solution, solve};
pub use subset::Subset;
pub use tour::{Tour, TourMetrics};
