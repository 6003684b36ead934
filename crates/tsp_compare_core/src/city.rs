use std::fmt;

use crate::constants::UNNAMED_CITY_PREFIX;

/// A named point in the plane. Cities are referred to by their position in
/// the input list; that index is the only identity the solvers see.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// City labelled after its position in the input, e.g. `C3`.
    pub fn unnamed(index: usize, x: f64, y: f64) -> Self {
        Self::new(format!("{UNNAMED_CITY_PREFIX}{index}"), x, y)
    }

    pub fn dist(&self, rhs: &Self) -> f64 {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bx = ryu::Buffer::new();
        let mut by = ryu::Buffer::new();
        write!(f, "{},{},{}", self.name, bx.format(self.x), by.format(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::City;

    #[test]
    fn unnamed_cities_are_labelled_by_index() {
        let city = City::unnamed(3, 1.0, 2.0);
        assert_eq!(city.name, "C3");
    }

    #[test]
    fn dist_uses_euclidean_metric() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 3.0, 4.0);
        assert!((a.dist(&b) - 5.0).abs() < 1e-12);
        assert!((b.dist(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.dist(&a), 0.0);
    }

    #[test]
    fn dist_does_not_overflow_for_large_finite_coordinates() {
        let a = City::new("a", 1e200, 1e200);
        let b = City::new("b", -1e200, -1e200);
        let d = a.dist(&b);
        assert!(d.is_finite());
        assert!((d / (2e200 * 2f64.sqrt()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_coordinates_are_invalid() {
        assert!(City::new("ok", -1.5, 2.0).is_valid());
        assert!(!City::new("nan", f64::NAN, 0.0).is_valid());
        assert!(!City::new("inf", 0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display_formats_as_name_x_y() {
        let city = City::new("Madrid", 40.4168, -3.7038);
        assert_eq!(city.to_string(), "Madrid,40.4168,-3.7038");
    }
}
