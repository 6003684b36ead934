use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{City, ComparisonReport, DistanceMatrix, Measure, Result, runner::Comparison};

const RULE_WIDTH: usize = 70;
const MATRIX_DECIMALS: usize = 4;
const MATRIX_CELL_WIDTH: usize = 12;
const CSV_HEADER: [&str; 2] = ["metric", "value"];

/// Metric/value rows shared by the text report and the CSV export.
pub fn metrics_table(report: &ComparisonReport) -> Vec<(&'static str, String)> {
    vec![
        ("Cities", report.city_count.to_string()),
        ("Optimal length (L*)", format!("{:.4}", report.optimal_length)),
        ("Heuristic length (L_NN)", format!("{:.4}", report.heuristic_length)),
        ("Absolute difference", format!("{:.4}", report.absolute_difference)),
        ("Gap (%)", format!("{:.2}", report.gap_percent)),
        (
            "Exhaustive time (s)",
            format!("{:.6}", report.exhaustive_elapsed.as_secs_f64()),
        ),
        (
            "Heuristic time (s)",
            format!("{:.6}", report.heuristic_elapsed.as_secs_f64()),
        ),
        ("Speedup (x)", format!("{:.2}", report.speedup)),
        ("Cycles evaluated", report.cycles_evaluated.to_string()),
    ]
}

/// Writes the full text report to `path`, or stdout when `path` is `None`.
pub fn write_report_to(
    path: Option<&Path>,
    comparison: &Comparison,
    cities: &[City],
) -> Result<()> {
    match path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_report(&mut out, comparison, cities)?;
            out.flush()?;
            log::info!("report: written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_report(&mut out, comparison, cities)?;
        }
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, comparison: &Comparison, cities: &[City]) -> Result<()> {
    let report = &comparison.report;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "{:^RULE_WIDTH$}", "EXHAUSTIVE SEARCH vs NEAREST NEIGHBOR")?;
    writeln!(out, "{rule}")?;

    section(out, "DISTANCE MATRIX")?;
    write!(out, "{}", render_matrix(&comparison.matrix, cities))?;

    section(out, "METRICS")?;
    let rows = metrics_table(report);
    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &rows {
        writeln!(out, "  {key:<key_width$}  {value:>14}")?;
    }

    section(out, "CYCLES")?;
    writeln!(out, "  Optimal cycle:")?;
    writeln!(out, "    {}", comparison.exhaustive.tour.route_names(cities))?;
    writeln!(
        out,
        "  Heuristic cycle (start: {}):",
        cities[comparison.heuristic_start].name
    )?;
    writeln!(out, "    {}", comparison.heuristic.tour.route_names(cities))?;

    section(out, "CONCLUSIONS")?;
    write_conclusions(out, report)?;
    writeln!(out, "{rule}")?;

    Ok(())
}

fn write_conclusions<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    match report.gap_percent {
        Measure::Value(gap) => writeln!(out, "  Gap {gap:.2}%: {}", report.verdict)?,
        Measure::Undefined => writeln!(out, "  Gap undefined: {}", report.verdict)?,
    }
    match report.speedup {
        Measure::Value(speedup) => {
            writeln!(out, "  The heuristic ran {speedup:.0}x faster than exhaustive search")?
        }
        Measure::Undefined => writeln!(
            out,
            "  Speedup undefined: the heuristic finished below clock resolution"
        )?,
    }
    if report.recommends_heuristic() {
        writeln!(out, "  For this instance the heuristic is the better trade-off")?;
    }
    Ok(())
}

/// Exports [`metrics_table`] as a two-column CSV file.
pub fn write_csv(path: &Path, report: &ComparisonReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for (metric, value) in metrics_table(report) {
        writer.write_record([metric, value.as_str()])?;
    }
    writer.flush()?;
    log::info!("report: csv written to {}", path.display());
    Ok(())
}

/// Labelled distance matrix, one row per city.
pub fn render_matrix(matrix: &DistanceMatrix, cities: &[City]) -> String {
    let label_width = cities.iter().map(|c| c.name.chars().count()).max().unwrap_or(0) + 2;
    let mut out = String::new();

    out.push_str(&" ".repeat(label_width));
    for city in cities {
        out.push_str(&format!("{:>MATRIX_CELL_WIDTH$}", city.name));
    }
    out.push('\n');

    for (i, city) in cities.iter().enumerate() {
        out.push_str(&format!("{:<label_width$}", city.name));
        for d in matrix.row(i) {
            out.push_str(&format!("{d:>MATRIX_CELL_WIDTH$.MATRIX_DECIMALS$}"));
        }
        out.push('\n');
    }
    out
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:-^RULE_WIDTH$}", format!(" {title} "))
}
