use std::{fs, io::Read};

use crate::{City, Error, Result, options::RunOptions};

const COMMENT_PREFIX: char = '#';

/// Loads the city list selected by `--dataset`, `--input`, or stdin.
pub fn load_cities(options: &RunOptions) -> Result<Vec<City>> {
    if let Some(cities) = options.dataset.cities() {
        log::debug!("input: dataset={} n={}", options.dataset, cities.len());
        log_cities(&cities);
        return Ok(cities);
    }

    let text = match options.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read {}: {e}", path.display()))
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let cities = parse_cities(&text)?;
    log::debug!("input: n={}", cities.len());
    log_cities(&cities);
    Ok(cities)
}

/// Echoes the city list in the `name,x,y` input format.
fn log_cities(cities: &[City]) {
    if log::log_enabled!(log::Level::Debug) {
        for (idx, city) in cities.iter().enumerate() {
            log::debug!("input: city[{idx}] {city}");
        }
    }
}

/// One city per line as `name,x,y` or `x,y`. Blank lines and `#` comments
/// are skipped; unnamed cities are labelled by their position.
pub fn parse_cities(text: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();

    for (line_idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let line_no = line_idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let (name, x_s, y_s) = match fields.as_slice() {
            [x, y] => (None, *x, *y),
            [name, x, y] if !name.is_empty() => (Some(*name), *x, *y),
            [_, _, _] => {
                return Err(Error::invalid_input(format!(
                    "Line {line_no}: empty city name"
                )));
            }
            _ => {
                return Err(Error::invalid_input(format!(
                    "Line {line_no}: expected 'name,x,y' or 'x,y' but got: {line}"
                )));
            }
        };

        let x = parse_coordinate(line_no, "x", x_s)?;
        let y = parse_coordinate(line_no, "y", y_s)?;

        cities.push(match name {
            Some(name) => City::new(name, x, y),
            None => City::unnamed(cities.len(), x, y),
        });
    }

    if cities.is_empty() {
        return Err(Error::invalid_input("No cities provided."));
    }

    Ok(cities)
}

fn parse_coordinate(line_no: usize, axis: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|_| {
        Error::invalid_input(format!("Line {line_no}: invalid {axis} coordinate: {raw}"))
    })?;
    if !value.is_finite() {
        return Err(Error::invalid_input(format!(
            "Line {line_no}: {axis} coordinate must be finite: {raw}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{load_cities, parse_cities};
    use crate::{Dataset, options::RunOptions};

    #[test]
    fn parses_named_and_unnamed_cities() {
        let cities = parse_cities("Madrid, 40.4, -3.7\n0,1\n").expect("parse cities");
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Madrid");
        assert_eq!(cities[0].y, -3.7);
        assert_eq!(cities[1].name, "C1");
        assert_eq!(cities[1].x, 0.0);
        assert_eq!(cities[1].y, 1.0);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let cities = parse_cities("# header\n\n  1,2  \n# trailing\n").expect("parse cities");
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "C0");
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_cities(" \n# only a comment\n").expect_err("empty input should fail");
        assert!(err.to_string().contains("No cities provided."));
    }

    #[test]
    fn rejects_missing_coordinate() {
        let err = parse_cities("1,2\n3\n").expect_err("missing y should fail");
        assert!(err.to_string().contains("Line 2: expected 'name,x,y' or 'x,y'"));
    }

    #[test]
    fn rejects_extra_fields() {
        let err = parse_cities("a,1,2,3").expect_err("extra field should fail");
        assert!(err.to_string().contains("expected 'name,x,y'"));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = parse_cities("Roma,north,12.5").expect_err("invalid x should fail");
        assert!(err.to_string().contains("Line 1: invalid x coordinate: north"));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let err = parse_cities("1,inf").expect_err("inf should fail");
        assert!(err.to_string().contains("y coordinate must be finite"));
    }

    #[test]
    fn rejects_empty_names() {
        let err = parse_cities(",1,2").expect_err("empty name should fail");
        assert!(err.to_string().contains("empty city name"));
    }

    #[test]
    fn displayed_cities_parse_back_unchanged() {
        let cities = Dataset::Europe12.cities().expect("europe12");
        let echoed: String = cities.iter().map(|city| format!("{city}\n")).collect();
        assert_eq!(parse_cities(&echoed).expect("parse echoed cities"), cities);
    }

    #[test]
    fn dataset_takes_precedence_over_input() {
        let options = RunOptions {
            dataset: Dataset::Europe7,
            input: "does/not/exist.txt".to_string(),
            ..RunOptions::default()
        };
        let cities = load_cities(&options).expect("dataset cities");
        assert_eq!(cities.len(), 7);
        assert_eq!(cities[0].name, "Madrid");
    }

    #[test]
    fn missing_input_file_is_reported() {
        let options = RunOptions {
            input: "does/not/exist.txt".to_string(),
            ..RunOptions::default()
        };
        let err = load_cities(&options).expect_err("missing file should fail");
        assert!(err.to_string().contains("failed to read does/not/exist.txt"));
    }
}
