pub mod analysis;
pub mod exhaustive;
pub mod nearest_neighbor;

use std::{fmt, time::Duration};

use crate::Tour;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Exhaustive,
    NearestNeighbor,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive search"),
            Self::NearestNeighbor => write!(f, "nearest neighbor"),
        }
    }
}

/// Output of one timed solver run. `elapsed` brackets the whole run and is
/// what the speedup metric is computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverResult {
    pub algorithm: Algorithm,
    pub tour: Tour,
    pub length: f64,
    pub elapsed: Duration,
}

impl SolverResult {
    pub fn new(algorithm: Algorithm, tour: Tour, elapsed: Duration) -> Self {
        Self {
            algorithm,
            length: tour.length(),
            tour,
            elapsed,
        }
    }
}
