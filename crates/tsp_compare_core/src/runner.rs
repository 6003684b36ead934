use std::time::{Duration, Instant};

use crate::{
    Algorithm, City, ComparativeAnalyzer, ComparisonReport, DistanceMatrix, Error,
    ExhaustiveSolver, Improvement, NearestNeighborSolver, Result, SolverResult, Step,
    options::RunOptions,
};

/// Everything a reporting or visualization collaborator needs from one run.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub matrix: DistanceMatrix,
    pub exhaustive: SolverResult,
    pub heuristic: SolverResult,
    /// City the heuristic actually started from (resolved for random and
    /// best-of-all modes).
    pub heuristic_start: usize,
    /// Incumbent improvements found by the exhaustive search, in order.
    pub improvements: Vec<Improvement>,
    /// Greedy moves of the heuristic, ending with the closing edge.
    pub steps: Vec<Step>,
    pub report: ComparisonReport,
}

/// Builds the distance matrix, runs exhaustive search then nearest neighbor
/// one after the other, and derives the comparison metrics.
#[tsp_compare_derive::timer("compare")]
pub fn compare_solvers(cities: &[City], options: &RunOptions) -> Result<Comparison> {
    let matrix = DistanceMatrix::from_cities(cities)?;
    let n = matrix.len();
    if n > options.max_exhaustive_cities {
        return Err(Error::invalid_input(format!(
            "{n} cities exceed --max-exhaustive-cities={} ({} permutations)",
            options.max_exhaustive_cities,
            ExhaustiveSolver::new(&matrix).search_space()
        )));
    }

    log::info!(
        "compare: start n={n} start_city={} start_mode={}",
        options.start_city,
        options.start_mode
    );

    let (search, exhaustive_elapsed) = timed(|| {
        ExhaustiveSolver::new(&matrix)
            .with_start(options.start_city)
            .solve()
    })?;
    let (construction, heuristic_elapsed) = timed(|| {
        NearestNeighborSolver::new(&matrix)
            .with_start(options.heuristic_start())
            .solve()
    })?;

    let exhaustive = SolverResult::new(Algorithm::Exhaustive, search.tour, exhaustive_elapsed);
    let heuristic = SolverResult::new(
        Algorithm::NearestNeighbor,
        construction.tour,
        heuristic_elapsed,
    );
    let report = ComparativeAnalyzer::analyze(&exhaustive, &heuristic, search.cycles_evaluated);

    Ok(Comparison {
        matrix,
        exhaustive,
        heuristic,
        heuristic_start: construction.start,
        improvements: search.improvements,
        steps: construction.steps,
        report,
    })
}

/// Wall-clock time of `run`, bracketing the whole call.
fn timed<T>(run: impl FnOnce() -> Result<T>) -> Result<(T, Duration)> {
    let now = Instant::now();
    let value = run()?;
    Ok((value, now.elapsed()))
}
