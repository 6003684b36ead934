use std::time::Duration;

use proptest::prelude::*;
use tsp_compare_core::{
    Algorithm, City, ComparativeAnalyzer, DistanceMatrix, ExhaustiveSolver, Measure,
    NearestNeighborSolver, SolverResult, StartCity, Verdict, compare_solvers, input,
    options::RunOptions,
};

fn cities_from(coords: &[(f64, f64)]) -> Vec<City> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| City::unnamed(i, x, y))
        .collect()
}

fn unit_square() -> Vec<City> {
    cities_from(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
}

#[test]
fn unit_square_perimeter_is_found_by_both_solvers() {
    let matrix = DistanceMatrix::from_cities(&unit_square()).expect("matrix");

    let search = ExhaustiveSolver::new(&matrix).solve().expect("exhaustive");
    let construction = NearestNeighborSolver::new(&matrix)
        .with_start(StartCity::Index(0))
        .solve()
        .expect("nearest neighbor");

    assert_eq!(search.tour.length(), 4.0);
    assert_eq!(construction.tour.length(), 4.0);
    assert_eq!(
        ComparativeAnalyzer::optimality_gap(search.tour.length(), construction.tour.length()),
        Measure::Value(0.0)
    );
}

#[test]
fn collinear_cities_give_out_and_back_from_every_start() {
    let matrix =
        DistanceMatrix::from_cities(&cities_from(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]))
            .expect("matrix");

    for start in 0..3 {
        let search = ExhaustiveSolver::new(&matrix)
            .with_start(start)
            .solve()
            .expect("exhaustive");
        let construction = NearestNeighborSolver::new(&matrix)
            .with_start(StartCity::Index(start))
            .solve()
            .expect("nearest neighbor");

        assert_eq!(search.tour.length(), 4.0, "exhaustive from {start}");
        assert_eq!(construction.tour.length(), 4.0, "heuristic from {start}");
    }
}

#[test]
fn single_city_reports_a_zero_gap() {
    let comparison = compare_solvers(&cities_from(&[(3.0, 4.0)]), &RunOptions::default())
        .expect("comparison");

    assert_eq!(comparison.exhaustive.length, 0.0);
    assert_eq!(comparison.heuristic.length, 0.0);
    assert_eq!(comparison.report.gap_percent, Measure::Value(0.0));
    assert_eq!(comparison.report.verdict, Verdict::Effective);
    assert_eq!(comparison.exhaustive.tour.order(), &[0]);
}

#[test]
fn coincident_cities_give_a_zero_gap_and_undefined_speedup() {
    let cities = cities_from(&[(0.0, 0.0), (0.0, 0.0)]);
    let matrix = DistanceMatrix::from_cities(&cities).expect("matrix");
    let exhaustive = SolverResult::new(
        Algorithm::Exhaustive,
        ExhaustiveSolver::new(&matrix).solve().expect("exhaustive").tour,
        Duration::from_millis(2),
    );
    let heuristic = SolverResult::new(
        Algorithm::NearestNeighbor,
        NearestNeighborSolver::new(&matrix).solve().expect("nearest neighbor").tour,
        Duration::ZERO,
    );

    let report = ComparativeAnalyzer::analyze(&exhaustive, &heuristic, 1);
    assert_eq!(report.optimal_length, 0.0);
    assert_eq!(report.heuristic_length, 0.0);
    assert_eq!(report.gap_percent, Measure::Value(0.0));
    assert_eq!(report.verdict, Verdict::Effective);
    assert_eq!(report.speedup, Measure::Undefined);
}

#[test]
fn zero_length_optimum_with_longer_heuristic_is_undefined() {
    let coincident = cities_from(&[(0.0, 0.0), (0.0, 0.0)]);
    let apart = cities_from(&[(0.0, 0.0), (3.0, 4.0)]);
    let optimum = DistanceMatrix::from_cities(&coincident).expect("matrix");
    let longer = DistanceMatrix::from_cities(&apart).expect("matrix");

    let exhaustive = SolverResult::new(
        Algorithm::Exhaustive,
        ExhaustiveSolver::new(&optimum).solve().expect("exhaustive").tour,
        Duration::from_millis(2),
    );
    let heuristic = SolverResult::new(
        Algorithm::NearestNeighbor,
        NearestNeighborSolver::new(&longer).solve().expect("nearest neighbor").tour,
        Duration::from_micros(5),
    );

    let report = ComparativeAnalyzer::analyze(&exhaustive, &heuristic, 1);
    assert_eq!(report.optimal_length, 0.0);
    assert!((report.heuristic_length - 10.0).abs() < 1e-12);
    assert_eq!(report.absolute_difference, report.heuristic_length);
    assert_eq!(report.gap_percent, Measure::Undefined);
    assert_eq!(report.verdict, Verdict::Undetermined);
    let speedup = report.speedup.value().expect("defined speedup");
    assert!((speedup - 400.0).abs() < 1e-6);
}

#[test]
fn malformed_input_fails_before_any_solver_runs() {
    assert!(input::parse_cities("").is_err());
    assert!(input::parse_cities("A,1").is_err());
    assert!(input::parse_cities("A,one,2").is_err());

    let err = compare_solvers(&[], &RunOptions::default()).expect_err("empty city list");
    assert!(err.to_string().contains("city list is empty"));
}

#[test]
fn parsed_text_flows_through_the_whole_comparison() {
    let cities = input::parse_cities(
        "# corners\nA,0,0\nB,0,1\nC,1,1\nD,1,0\n",
    )
    .expect("parse cities");
    let comparison = compare_solvers(&cities, &RunOptions::default()).expect("comparison");

    assert_eq!(comparison.report.city_count, 4);
    assert_eq!(comparison.report.optimal_length, 4.0);
    assert_eq!(
        comparison.exhaustive.tour.route_names(&cities),
        "A → B → C → D → A"
    );
}

fn coordinates(max_len: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn optimum_is_a_lower_bound_for_every_start(coords in coordinates(7)) {
        let matrix = DistanceMatrix::from_cities(&cities_from(&coords)).expect("matrix");
        let optimum = ExhaustiveSolver::new(&matrix).solve().expect("exhaustive").tour.length();

        for start in 0..matrix.len() {
            let construction = NearestNeighborSolver::new(&matrix)
                .with_start(StartCity::Index(start))
                .solve()
                .expect("nearest neighbor");
            prop_assert!(optimum <= construction.tour.length() + 1e-9);
        }
    }

    #[test]
    fn tours_visit_every_city_once_and_include_the_closing_edge(
        coords in coordinates(7),
        seed in any::<u64>(),
    ) {
        let matrix = DistanceMatrix::from_cities(&cities_from(&coords)).expect("matrix");
        let n = matrix.len();
        let search = ExhaustiveSolver::new(&matrix).solve().expect("exhaustive");
        let construction = NearestNeighborSolver::new(&matrix)
            .with_start(StartCity::Random { seed })
            .solve()
            .expect("nearest neighbor");

        for tour in [&search.tour, &construction.tour] {
            prop_assert!(tour.is_hamiltonian(n));
            prop_assert_eq!(tour.length(), matrix.cycle_length(tour.order()));
        }
        prop_assert_eq!(
            construction.steps.last().map(|step| step.to),
            Some(construction.start)
        );
    }

    #[test]
    fn solvers_are_deterministic(coords in coordinates(6), start in 0usize..6) {
        let matrix = DistanceMatrix::from_cities(&cities_from(&coords)).expect("matrix");
        let start = start % matrix.len();

        let first = ExhaustiveSolver::new(&matrix).with_start(start).solve().expect("first");
        let second = ExhaustiveSolver::new(&matrix).with_start(start).solve().expect("second");
        prop_assert_eq!(first, second);

        let heuristic = NearestNeighborSolver::new(&matrix).with_start(StartCity::Index(start));
        prop_assert_eq!(
            heuristic.solve().expect("first"),
            heuristic.solve().expect("second")
        );
    }

    #[test]
    fn gap_is_never_negative(coords in coordinates(7)) {
        let comparison =
            compare_solvers(&cities_from(&coords), &RunOptions::default()).expect("comparison");

        if comparison.report.optimal_length > 0.0 {
            let gap = comparison.report.gap_percent.value().expect("defined gap");
            prop_assert!(gap >= 0.0);
        }
        prop_assert!(comparison.report.absolute_difference >= 0.0);
    }
}
