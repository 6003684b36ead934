use crate::{City, Error, Result};

/// Dense, symmetric n×n table of Euclidean distances, stored row-major.
///
/// Built once from the city list and shared read-only by both solvers.
/// The diagonal is zero and `get(i, j) == get(j, i)` for every pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_cities(cities: &[City]) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::invalid_input("city list is empty"));
        }
        if let Some((idx, city)) = cities.iter().enumerate().find(|(_, c)| !c.is_valid()) {
            return Err(Error::invalid_input(format!(
                "city {idx} ({}) has non-finite coordinates",
                city.name
            )));
        }

        let n = cities.len();
        let mut data = vec![0.0; n * n];
        let mut longest = 0.0f64;
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].dist(&cities[j]);
                if !d.is_finite() {
                    return Err(Error::invalid_input(format!(
                        "distance between city {i} ({}) and city {j} ({}) is not finite",
                        cities[i].name, cities[j].name
                    )));
                }
                longest = longest.max(d);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        // Every cycle length is bounded by n times the longest edge.
        if !(longest * n as f64).is_finite() {
            return Err(Error::invalid_input(format!(
                "coordinates too far apart: cycle lengths over {n} cities overflow"
            )));
        }

        log::debug!("matrix: built n={n} cells={}", data.len());
        Ok(Self { n, data })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Length of the closed cycle visiting `order` and returning to its first
    /// city. A single city yields zero; two cities yield the out-and-back trip.
    pub fn cycle_length(&self, order: &[usize]) -> f64 {
        let k = order.len();
        (0..k)
            .map(|i| self.get(order[i], order[(i + 1) % k]))
            .sum()
    }
}
