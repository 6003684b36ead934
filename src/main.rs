use std::time::Instant;

use log::info;

use tsp_compare_core::{Result, compare_solvers, input, logging, options::RunOptions, report};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = RunOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let cities = input::load_cities(&options)?;
    let comparison = compare_solvers(&cities, &options)?;

    report::write_report_to(options.output_path(), &comparison, &cities)?;
    if let Some(csv_path) = options.csv_path() {
        report::write_csv(csv_path, &comparison.report)?;
    }

    info!(
        "output: n={} optimal={:.4} heuristic={:.4} time={:.2}s",
        cities.len(),
        comparison.report.optimal_length,
        comparison.report.heuristic_length,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
