use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};
use log::Level;

use crate::options::{LogFormat, RunOptions};
use crate::{Error, Result};

const CRATE_TARGET_PREFIX: &str = "tsp_compare_core::";

/// Installs the global logger described by the `--log-*` options.
/// Log lines never share a stream with the report unless `--log-output`
/// and `--output` point at the same file.
pub fn init_logger(options: &RunOptions) -> Result<()> {
    let mut builder = formatted_builder(options.log_format, options.log_timestamp);
    builder.filter_level(options.log_level.to_filter());

    match options.log_output_path() {
        Some(log_path) => {
            let log_file = File::create(log_path).map_err(|e| {
                Error::other(format!(
                    "failed to create log output file {}: {e}",
                    log_path.display()
                ))
            })?;
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn formatted_builder(log_format: LogFormat, log_timestamp: bool) -> Builder {
    let mut builder = Builder::new();
    builder
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            let tag = level_tag(record.level());
            match log_format {
                LogFormat::Compact => writeln!(buf, "{tag} {}", record.args()),
                LogFormat::Pretty => writeln!(
                    buf,
                    "{tag} [{}] {}",
                    short_target(record.target()),
                    record.args()
                ),
            }
        });
    builder
}

fn short_target(target: &str) -> &str {
    target.strip_prefix(CRATE_TARGET_PREFIX).unwrap_or(target)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
