use tsp_compare_derive::CliValue;

use crate::City;

/// European capitals as (latitude, longitude) treated as planar coordinates.
const EUROPE_7: [(&str, f64, f64); 7] = [
    ("Madrid", 40.4168, -3.7038),
    ("París", 48.8566, 2.3522),
    ("Londres", 51.5074, -0.1278),
    ("Berlín", 52.5200, 13.4050),
    ("Roma", 41.9028, 12.4964),
    ("Ámsterdam", 52.3676, 4.9041),
    ("Bruselas", 50.8503, 4.3517),
];

const EUROPE_12_EXTRA: [(&str, f64, f64); 5] = [
    ("Viena", 48.2082, 16.3738),
    ("Praga", 50.0755, 14.4378),
    ("Zúrich", 47.3769, 8.5417),
    ("Copenhague", 55.6761, 12.5683),
    ("Budapest", 47.4979, 19.0402),
];

/// Built-in city sets; `None` means the cities come from `--input`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, CliValue)]
#[cli_value(option = "dataset")]
pub enum Dataset {
    #[default]
    None,
    Europe7,
    Europe12,
}

impl Dataset {
    pub fn cities(self) -> Option<Vec<City>> {
        let rows: Vec<&(&str, f64, f64)> = match self {
            Self::None => return None,
            Self::Europe7 => EUROPE_7.iter().collect(),
            Self::Europe12 => EUROPE_7.iter().chain(EUROPE_12_EXTRA.iter()).collect(),
        };
        Some(
            rows.into_iter()
                .map(|&(name, x, y)| City::new(name, x, y))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;

    #[test]
    fn none_has_no_cities() {
        assert!(Dataset::None.cities().is_none());
    }

    #[test]
    fn europe12_extends_europe7() {
        let seven = Dataset::Europe7.cities().expect("europe7");
        let twelve = Dataset::Europe12.cities().expect("europe12");
        assert_eq!(seven.len(), 7);
        assert_eq!(twelve.len(), 12);
        assert_eq!(&twelve[..7], &seven[..]);
        assert_eq!(twelve[11].name, "Budapest");
    }

    #[test]
    fn dataset_names_parse() {
        assert_eq!(Dataset::parse("europe7").expect("parse"), Dataset::Europe7);
        assert_eq!(Dataset::parse("EUROPE12").expect("parse"), Dataset::Europe12);
        assert_eq!(Dataset::Europe12.to_string(), "europe12");
        let err = Dataset::parse("asia").expect_err("unknown dataset");
        assert!(err.to_string().contains("expected none|europe7|europe12"));
    }
}
