use crate::{City, DistanceMatrix, constants::ROUTE_ARROW};

/// A Hamiltonian cycle over city indices. The closing edge from the last
/// city back to the first is implicit in `order` and included in `length`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    pub fn from_order(order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let length = matrix.cycle_length(&order);
        Self { order, length }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// True when the tour visits each of `0..n` exactly once.
    pub fn is_hamiltonian(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &idx in &self.order {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    /// `Madrid → París → Madrid` style rendering of the closed cycle.
    pub fn route_names(&self, cities: &[City]) -> String {
        self.order
            .iter()
            .chain(self.order.first())
            .map(|&idx| cities[idx].name.as_str())
            .collect::<Vec<_>>()
            .join(ROUTE_ARROW)
    }
}

#[cfg(test)]
mod tests {
    use super::Tour;
    use crate::{City, DistanceMatrix};

    fn triangle() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 3.0, 0.0),
            City::new("c", 3.0, 4.0),
        ]
    }

    #[test]
    fn length_closes_the_cycle() {
        let matrix = DistanceMatrix::from_cities(&triangle()).expect("matrix");
        let tour = Tour::from_order(vec![0, 1, 2], &matrix);
        assert!((tour.length() - 12.0).abs() < 1e-12);
        assert_eq!(tour.start(), Some(0));
    }

    #[test]
    fn is_hamiltonian_rejects_duplicates_and_omissions() {
        let matrix = DistanceMatrix::from_cities(&triangle()).expect("matrix");
        assert!(Tour::from_order(vec![2, 0, 1], &matrix).is_hamiltonian(3));
        assert!(!Tour::from_order(vec![0, 1, 1], &matrix).is_hamiltonian(3));
        assert!(!Tour::from_order(vec![0, 1], &matrix).is_hamiltonian(3));
    }

    #[test]
    fn route_names_returns_to_start() {
        let cities = triangle();
        let matrix = DistanceMatrix::from_cities(&cities).expect("matrix");
        let tour = Tour::from_order(vec![1, 2, 0], &matrix);
        assert_eq!(tour.route_names(&cities), "b → c → a → b");
    }
}
