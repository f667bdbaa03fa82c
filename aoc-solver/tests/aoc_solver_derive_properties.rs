//! Property-based tests for the AocSolver derive macro

use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type Parsed = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().sum())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().product())
    }
}

fn render(numbers: &[i64]) -> String {
    numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n")
}

/// `Solver::solve_part(parsed, N)` is the same as `<Self as PartSolver<N>>::solve(parsed)`
mod part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            numbers in prop::collection::vec(1i64..10, 1..5),
            part in 1u8..=2
        ) {
            let parsed = TestSolver::parse(&render(&numbers)).unwrap();

            let solver_result = <TestSolver as Solver>::solve_part(&parsed, part);
            let direct_result = match part {
                1 => <TestSolver as PartSolver<1>>::solve(&parsed),
                2 => <TestSolver as PartSolver<2>>::solve(&parsed),
                _ => unreachable!(),
            };

            prop_assert_eq!(solver_result.unwrap(), direct_result.unwrap());
        }
    }
}

/// Parts without a `PartSolver` come back as `PartNotImplemented`
mod invalid_part_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let parsed = TestSolver::parse("1\n2\n3").unwrap();

            match <TestSolver as Solver>::solve_part(&parsed, invalid_part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                _ => prop_assert!(false, "Expected PartNotImplemented error for part {}", invalid_part),
            }
        }
    }
}

/// Parsed data is read-only: solving any part, any number of times, in any
/// order, gives the same answers.
mod repeatable {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solving_is_repeatable(
            numbers in prop::collection::vec(1i64..100, 1..5),
            order in prop::collection::vec(1u8..=2, 1..6)
        ) {
            let parsed = TestSolver::parse(&render(&numbers)).unwrap();
            let expected_sum: i64 = numbers.iter().sum();
            let expected_product: i64 = numbers.iter().product();

            for part in order {
                let answer = TestSolver::solve_part(&parsed, part).unwrap();
                let expected = if part == 1 { expected_sum } else { expected_product };
                prop_assert_eq!(answer, expected);
            }
        }
    }
}
