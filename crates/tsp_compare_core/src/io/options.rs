use std::{env, path::Path};

use log::LevelFilter;
use tsp_compare_derive::{CliOptions, CliValue, KvDisplay};

use crate::{Dataset, Error, Result, StartCity, constants::DEFAULT_MAX_EXHAUSTIVE_CITIES};

/// Runtime options for a comparison run.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct RunOptions {
    /// Start city for the exhaustive search, and for the heuristic in `fixed` mode.
    #[cli(long = "start-city")]
    pub start_city: usize,
    /// How the nearest-neighbor heuristic picks its start: `fixed`, `random`, or `best-of-all`.
    #[cli(long = "start-mode", parse_with = "StartMode::parse")]
    pub start_mode: StartMode,
    /// Seed for `random` start mode.
    #[cli(long = "seed")]
    pub seed: u64,
    /// Largest instance the exhaustive search is allowed to run on.
    #[cli(long = "max-exhaustive-cities")]
    pub max_exhaustive_cities: usize,
    /// Built-in city set. `none` reads cities from `--input` or stdin.
    #[cli(long = "dataset", parse_with = "Dataset::parse")]
    pub dataset: Dataset,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[cli(long = "log-timestamp", flag)]
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
    /// Optional input file path for cities. Empty means stdin.
    #[cli(long = "input")]
    pub input: String,
    /// Optional output file path for the report. Empty means stdout.
    #[cli(long = "output")]
    pub output: String,
    /// Optional CSV export of the metrics table.
    #[cli(long = "csv")]
    pub csv: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "start-mode")]
pub enum StartMode {
    Fixed,
    Random,
    #[cli(alias = "all")]
    BestOfAll,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            start_city: 0,
            start_mode: StartMode::Fixed,
            seed: 42,
            max_exhaustive_cities: DEFAULT_MAX_EXHAUSTIVE_CITIES,
            dataset: Dataset::None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            input: String::new(),
            output: String::new(),
            csv: String::new(),
        }
    }
}

impl RunOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        Ok(options)
    }

    pub fn usage() -> String {
        let choice_lines = [
            StartMode::USAGE,
            Dataset::USAGE,
            LogLevel::USAGE,
            LogFormat::USAGE,
        ];
        let mut usage = String::from(concat!(
            "Usage:\n",
            "  tsp-compare [options] [--input cities.txt]\n",
            "  tsp-compare [options] < cities.txt\n\n",
            "Input: one city per line as `name,x,y` or `x,y`; `#` starts a comment.\n\n",
            "Options:\n",
            "  --start-city <usize>\n",
            "  --seed <u64>\n",
            "  --max-exhaustive-cities <usize>\n",
        ));
        for line in choice_lines {
            usage.push_str("  ");
            usage.push_str(line);
            usage.push('\n');
        }
        usage.push_str(concat!(
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --csv <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-compare --dataset europe7\n",
            "  tsp-compare --input cities.txt --start-mode best-of-all --csv results.csv\n",
            "  tsp-compare --start-mode=random --seed=7 --log-level=info < cities.txt\n",
        ));
        usage
    }

    /// Start rule for the heuristic derived from `--start-mode`.
    pub fn heuristic_start(&self) -> StartCity {
        match self.start_mode {
            StartMode::Fixed => StartCity::Index(self.start_city),
            StartMode::Random => StartCity::Random { seed: self.seed },
            StartMode::BestOfAll => StartCity::BestOfAll,
        }
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        optional_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        optional_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        optional_path(&self.input)
    }

    pub fn csv_path(&self) -> Option<&Path> {
        optional_path(&self.csv)
    }
}

/// Empty and `-` both mean the standard stream.
fn optional_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}
