use tsp_compare_derive::New;

use crate::{DistanceMatrix, Error, Result, Tour, constants::PROGRESS_REPORTS};

/// A strict improvement of the incumbent, recorded at the 1-based cycle
/// count where it was found.
#[derive(Clone, Debug, PartialEq, New)]
pub struct Improvement {
    pub iteration: u64,
    pub tour: Tour,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExhaustiveSearch {
    pub tour: Tour,
    pub cycles_evaluated: u64,
    pub improvements: Vec<Improvement>,
}

/// Globally optimal solver: fixes the start city and evaluates every
/// ordering of the remaining `n - 1` cities. Mirror-image cycles are not
/// pruned, so `(n - 1)!` cycles are evaluated.
///
/// Intended for about a dozen cities at most; callers bound `n`.
#[derive(Clone, Copy, Debug)]
pub struct ExhaustiveSolver<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
}

impl<'a> ExhaustiveSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix, start: 0 }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// `(n - 1)!`, saturating at `u64::MAX`.
    pub fn search_space(&self) -> u64 {
        (1..self.matrix.len() as u64)
            .try_fold(1u64, |acc, k| acc.checked_mul(k))
            .unwrap_or(u64::MAX)
    }

    pub fn solve(&self) -> Result<ExhaustiveSearch> {
        let n = self.matrix.len();
        let start = self.start;
        if start >= n {
            return Err(Error::invalid_input(format!(
                "start city {start} is out of range for {n} cities"
            )));
        }

        if n <= 2 {
            let order = if n == 1 {
                vec![start]
            } else {
                vec![start, 1 - start]
            };
            let tour = Tour::from_order(order, self.matrix);
            log::debug!("exhaustive: trivial n={n} length={:.4}", tour.length());
            return Ok(ExhaustiveSearch {
                improvements: vec![Improvement::new(1, tour.clone())],
                tour,
                cycles_evaluated: 1,
            });
        }

        let total = self.search_space();
        let progress_every = (total / PROGRESS_REPORTS).max(1);
        log::info!("exhaustive: start n={n} start_city={start} permutations={total}");

        // Ascending order is the first permutation in lexicographic order.
        let mut rest: Vec<usize> = (0..n).filter(|&idx| idx != start).collect();
        let mut best = f64::INFINITY;
        let mut best_rest = rest.clone();
        let mut evaluated = 0u64;
        let mut improvements = Vec::new();

        loop {
            evaluated += 1;
            let length = self.length_through(&rest);

            // Strict comparison keeps the first permutation among exact ties.
            if length < best {
                best = length;
                best_rest.copy_from_slice(&rest);
                improvements.push(Improvement::new(
                    evaluated,
                    Tour::from_order(self.cycle(&rest), self.matrix),
                ));
                log::trace!("exhaustive.improve: iteration={evaluated} length={length:.4}");
            }

            if evaluated % progress_every == 0 {
                log::debug!(
                    "exhaustive.progress: pct={:.1} evaluated={evaluated} best={best:.4}",
                    evaluated as f64 / total as f64 * 100.0
                );
            }

            if !next_permutation(&mut rest) {
                break;
            }
        }

        let tour = Tour::from_order(self.cycle(&best_rest), self.matrix);
        log::info!(
            "exhaustive: done evaluated={evaluated} improvements={} length={:.4}",
            improvements.len(),
            tour.length()
        );

        Ok(ExhaustiveSearch {
            tour,
            cycles_evaluated: evaluated,
            improvements,
        })
    }

    /// Length of `start → rest… → start`, summed in the same edge order as
    /// `DistanceMatrix::cycle_length` so the two agree bit for bit.
    fn length_through(&self, rest: &[usize]) -> f64 {
        let m = self.matrix;
        let (Some(&first), Some(&last)) = (rest.first(), rest.last()) else {
            return 0.0;
        };
        let mut length = m.get(self.start, first);
        for pair in rest.windows(2) {
            length += m.get(pair[0], pair[1]);
        }
        length + m.get(last, self.start)
    }

    fn cycle(&self, rest: &[usize]) -> Vec<usize> {
        let mut order = Vec::with_capacity(rest.len() + 1);
        order.push(self.start);
        order.extend_from_slice(rest);
        order
    }
}

/// Rearranges `items` into the next lexicographic permutation. Returns
/// `false`, leaving `items` untouched, once the last permutation is reached.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
