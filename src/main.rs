use std::time::Instant;

use log::info;

use held_karp_core::{Result, SolverOptions, logging, runner};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let solution = runner::run(&options)?;

    info!(
        "output: n={} cost={} time={:.3}s",
        solution.tour.len().saturating_sub(1),
        solution.cost,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
