use rand::{Rng, SeedableRng, rngs::StdRng};
use tsp_compare_derive::New;

use crate::{DistanceMatrix, Error, Result, Tour};

/// Where the greedy construction begins. The heuristic is start-dependent,
/// so the choice is always explicit; random starts carry their own seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartCity {
    Index(usize),
    Random { seed: u64 },
    /// Run from every city and keep the shortest tour (lowest start on ties).
    BestOfAll,
}

impl Default for StartCity {
    fn default() -> Self {
        Self::Index(0)
    }
}

/// One greedy move. The final step is the closing edge back to the start.
#[derive(Clone, Debug, PartialEq, New)]
pub struct Step {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub cumulative: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NearestNeighborConstruction {
    pub start: usize,
    pub tour: Tour,
    pub steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug)]
pub struct NearestNeighborSolver<'a> {
    matrix: &'a DistanceMatrix,
    start: StartCity,
}

impl<'a> NearestNeighborSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self {
            matrix,
            start: StartCity::default(),
        }
    }

    pub fn with_start(mut self, start: StartCity) -> Self {
        self.start = start;
        self
    }

    pub fn solve(&self) -> Result<NearestNeighborConstruction> {
        let n = self.matrix.len();
        match self.start {
            StartCity::Index(start) if start >= n => Err(Error::invalid_input(format!(
                "start city {start} is out of range for {n} cities"
            ))),
            StartCity::Index(start) => Ok(self.construct(start)),
            StartCity::Random { seed } => {
                let start = StdRng::seed_from_u64(seed).random_range(0..n);
                log::debug!("nearest_neighbor: random start seed={seed} start_city={start}");
                Ok(self.construct(start))
            }
            StartCity::BestOfAll => self.best_of_all(),
        }
    }

    fn best_of_all(&self) -> Result<NearestNeighborConstruction> {
        // Starts are tried in ascending order; a later start must be strictly
        // shorter to win, so ties go to the lowest start index.
        let best = (0..self.matrix.len())
            .map(|start| self.construct(start))
            .reduce(|best, run| {
                if run.tour.length() < best.tour.length() {
                    run
                } else {
                    best
                }
            })
            .ok_or_else(|| Error::other("no start cities to try"))?;

        log::info!(
            "nearest_neighbor: best of all starts start_city={} length={:.4}",
            best.start,
            best.tour.length()
        );
        Ok(best)
    }

    fn construct(&self, start: usize) -> NearestNeighborConstruction {
        let n = self.matrix.len();
        let mut visited = vec![false; n];
        visited[start] = true;

        let mut order = Vec::with_capacity(n);
        order.push(start);
        let mut steps = Vec::with_capacity(n);
        let mut current = start;
        let mut cumulative = 0.0;

        for _ in 1..n {
            let mut nearest: Option<(usize, f64)> = None;
            for (city, &distance) in self.matrix.row(current).iter().enumerate() {
                if visited[city] {
                    continue;
                }
                // Strict comparison keeps the lowest index among exact ties.
                if nearest.is_none_or(|(_, best)| distance < best) {
                    nearest = Some((city, distance));
                }
            }
            let Some((next, distance)) = nearest else {
                break;
            };

            visited[next] = true;
            order.push(next);
            cumulative += distance;
            steps.push(Step::new(current, next, distance, cumulative));
            log::trace!("nearest_neighbor.step: from={current} to={next} distance={distance:.4}");
            current = next;
        }

        let closing = self.matrix.get(current, start);
        cumulative += closing;
        steps.push(Step::new(current, start, closing, cumulative));

        let tour = Tour::from_order(order, self.matrix);
        log::debug!(
            "nearest_neighbor: done start_city={start} length={:.4}",
            tour.length()
        );

        NearestNeighborConstruction { start, tour, steps }
    }
}
