use std::{fmt, time::Duration};

use tsp_compare_derive::KvDisplay;

use crate::{
    SolverResult,
    constants::{GAP_ACCEPTABLE_PERCENT, GAP_EFFECTIVE_PERCENT},
};

const RECOMMEND_MAX_GAP_PERCENT: f64 = 10.0;
const RECOMMEND_MIN_SPEEDUP: f64 = 100.0;

/// A derived metric that may have no meaningful value, e.g. a ratio whose
/// denominator is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measure {
    Value(f64),
    Undefined,
}

impl Measure {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Self::Value(v), Some(precision)) => write!(f, "{v:.precision$}"),
            (Self::Value(v), None) => write!(f, "{v}"),
            (Self::Undefined, _) => write!(f, "undefined"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Effective,
    Acceptable,
    Suboptimal,
    Undetermined,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Effective => "very small gap, the heuristic is very effective",
            Self::Acceptable => "moderate gap, the heuristic is acceptable",
            Self::Suboptimal => "significant gap, the heuristic is suboptimal",
            Self::Undetermined => "gap undefined for a zero-length optimum",
        };
        write!(f, "{text}")
    }
}

#[derive(Clone, Debug, PartialEq, KvDisplay)]
pub struct ComparisonReport {
    pub city_count: usize,
    pub optimal_length: f64,
    pub heuristic_length: f64,
    pub absolute_difference: f64,
    pub gap_percent: Measure,
    #[kv(fmt = "secs")]
    pub exhaustive_elapsed: Duration,
    #[kv(fmt = "secs")]
    pub heuristic_elapsed: Duration,
    pub speedup: Measure,
    pub cycles_evaluated: u64,
    #[kv(fmt = "debug")]
    pub verdict: Verdict,
}

impl ComparisonReport {
    /// Small gap bought with a large speedup.
    pub fn recommends_heuristic(&self) -> bool {
        matches!(
            (self.gap_percent, self.speedup),
            (Measure::Value(gap), Measure::Value(speedup))
                if gap < RECOMMEND_MAX_GAP_PERCENT && speedup > RECOMMEND_MIN_SPEEDUP
        )
    }
}

pub struct ComparativeAnalyzer;

impl ComparativeAnalyzer {
    pub fn analyze(
        exhaustive: &SolverResult,
        heuristic: &SolverResult,
        cycles_evaluated: u64,
    ) -> ComparisonReport {
        let gap_percent = Self::optimality_gap(exhaustive.length, heuristic.length);
        let speedup = Self::speedup(exhaustive.elapsed, heuristic.elapsed);
        let report = ComparisonReport {
            city_count: exhaustive.tour.len(),
            optimal_length: exhaustive.length,
            heuristic_length: heuristic.length,
            absolute_difference: Self::difference(exhaustive.length, heuristic.length),
            gap_percent,
            exhaustive_elapsed: exhaustive.elapsed,
            heuristic_elapsed: heuristic.elapsed,
            speedup,
            cycles_evaluated,
            verdict: Self::verdict(gap_percent),
        };

        log::info!(
            "analysis: gap_pct={:.2} speedup={:.2} verdict={:?}",
            report.gap_percent,
            report.speedup,
            report.verdict
        );
        report
    }

    /// `(L_NN - L*) / L* * 100`. A zero-length optimum only admits the
    /// zero-length heuristic tour, reported as a 0% gap; anything else over a
    /// zero optimum is undefined.
    pub fn optimality_gap(optimal: f64, heuristic: f64) -> Measure {
        let difference = Self::difference(optimal, heuristic);
        if optimal > 0.0 {
            Measure::Value(difference / optimal * 100.0)
        } else if difference == 0.0 {
            Measure::Value(0.0)
        } else {
            Measure::Undefined
        }
    }

    /// Exhaustive time over heuristic time; undefined when the heuristic
    /// finished below clock resolution.
    pub fn speedup(exhaustive: Duration, heuristic: Duration) -> Measure {
        if heuristic.is_zero() {
            Measure::Undefined
        } else {
            Measure::Value(exhaustive.as_secs_f64() / heuristic.as_secs_f64())
        }
    }

    pub fn verdict(gap_percent: Measure) -> Verdict {
        match gap_percent {
            Measure::Value(gap) if gap < GAP_EFFECTIVE_PERCENT => Verdict::Effective,
            Measure::Value(gap) if gap < GAP_ACCEPTABLE_PERCENT => Verdict::Acceptable,
            Measure::Value(_) => Verdict::Suboptimal,
            Measure::Undefined => Verdict::Undetermined,
        }
    }

    // The heuristic can never beat the optimum; a negative difference is
    // summation-order noise.
    fn difference(optimal: f64, heuristic: f64) -> f64 {
        (heuristic - optimal).max(0.0)
    }
}
