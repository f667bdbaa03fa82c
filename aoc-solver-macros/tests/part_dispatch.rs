use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
        })
        .collect()
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TwoParts;

impl AocParser for TwoParts {
    type Parsed = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for TwoParts {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().sum())
    }
}

impl PartSolver<2> for TwoParts {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().product())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TwoParts as Solver>::PARTS, 2);
}

#[test]
fn test_dispatch_reaches_each_part() {
    let parsed = TwoParts::parse("2\n3\n4").unwrap();

    assert_eq!(TwoParts::solve_part(&parsed, 1).unwrap(), 9);
    assert_eq!(TwoParts::solve_part(&parsed, 2).unwrap(), 24);
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let parsed = TwoParts::parse("1").unwrap();

    let result = TwoParts::solve_part(&parsed, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_before_dispatch() {
    let parsed = TwoParts::parse("1").unwrap();

    assert!(matches!(
        TwoParts::solve_part_checked_range(&parsed, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
    assert!(matches!(
        TwoParts::solve_part_checked_range(&parsed, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

// Part errors pass through the generated dispatch untouched
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Failing;

impl AocParser for Failing {
    type Parsed = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Failing {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        parsed
            .iter()
            .max()
            .copied()
            .ok_or_else(|| SolveError::failed("empty input"))
    }
}

#[test]
fn test_part_error_propagates() {
    let parsed = Failing::parse("").unwrap();

    match Failing::solve_part(&parsed, 1) {
        Err(SolveError::SolveFailed(e)) => assert_eq!(e.to_string(), "empty input"),
        other => panic!("expected SolveFailed, got {:?}", other),
    }
}

// Generic solvers get the impl generics carried over
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Scaled<const K: i64>;

impl<const K: i64> AocParser for Scaled<K> {
    type Parsed = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_numbers(input)
    }
}

impl<const K: i64> PartSolver<1> for Scaled<K> {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().sum::<i64>() * K)
    }
}

#[test]
fn test_generic_solver_dispatch() {
    let parsed = Scaled::<3>::parse("1\n2").unwrap();
    assert_eq!(Scaled::<3>::solve_part(&parsed, 1).unwrap(), 9);
}
