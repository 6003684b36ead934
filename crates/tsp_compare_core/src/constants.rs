/// Default upper bound on cities accepted for exhaustive search.
pub(crate) const DEFAULT_MAX_EXHAUSTIVE_CITIES: usize = 12;
/// Exhaustive search logs progress this many times over the search space.
pub(crate) const PROGRESS_REPORTS: u64 = 20;

/// Gap (percent) below which the heuristic counts as effective.
pub(crate) const GAP_EFFECTIVE_PERCENT: f64 = 5.0;
/// Gap (percent) below which the heuristic counts as acceptable.
pub(crate) const GAP_ACCEPTABLE_PERCENT: f64 = 15.0;

pub(crate) const UNNAMED_CITY_PREFIX: &str = "C";
pub(crate) const ROUTE_ARROW: &str = " → ";
