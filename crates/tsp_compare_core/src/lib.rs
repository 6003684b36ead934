//! Exact vs greedy solving of small Traveling Salesperson instances.
//! Builds a Euclidean distance matrix, runs an exhaustive permutation search
//! and the nearest-neighbor heuristic, and reports optimality gap and speedup.

mod algo;
mod city;
mod constants;
mod datasets;
mod error;
mod io;
pub mod logging;
mod matrix;
mod runner;
mod tour;

pub use io::{input, options, report};

pub use algo::analysis::{ComparativeAnalyzer, ComparisonReport, Measure, Verdict};
pub use algo::exhaustive::{ExhaustiveSearch, ExhaustiveSolver, Improvement};
pub use algo::nearest_neighbor::{
    NearestNeighborConstruction, NearestNeighborSolver, StartCity, Step,
};
pub use algo::{Algorithm, SolverResult};
pub use city::City;
pub use datasets::Dataset;
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use runner::{Comparison, compare_solvers};
pub use tour::Tour;
