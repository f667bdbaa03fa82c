//! Registry behaviour: registration bounds, duplicates, lookup and instances

use aoc_solver::{
    Answer, AocParser, FactoryInfo, ParseError, RegistrationError, SolveError, Solver,
    SolverError, SolverRegistryBuilder, BASE_YEAR, MAX_YEARS,
};
use proptest::prelude::*;

struct Doubler;

impl AocParser for Doubler {
    type Parsed = i64;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("not a number: {input:?}")))
    }
}

impl Solver for Doubler {
    const PARTS: u8 = 2;

    fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(parsed * 2),
            2 => Ok(parsed * 4),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Doubler>(2023, 5)
        .unwrap()
        .register::<Doubler>(2023, 5);

    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2023, 5))));
}

#[test]
fn test_iter_info_is_ordered_by_year_then_day() {
    let registry = SolverRegistryBuilder::new()
        .register::<Doubler>(2023, 6)
        .unwrap()
        .register::<Doubler>(2016, 1)
        .unwrap()
        .register::<Doubler>(2023, 1)
        .unwrap()
        .build();

    let info: Vec<FactoryInfo> = registry.storage().iter_info().collect();
    let keys: Vec<(u16, u8)> = info.iter().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2016, 1), (2023, 1), (2023, 6)]);
    assert!(info.iter().all(|i| i.parts == 2));
    assert_eq!(registry.storage().len(), 3);
}

#[test]
fn test_create_solver_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<Doubler>(2023, 5)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 6, "1"),
        Err(SolverError::NotFound(2023, 6))
    ));
    assert!(matches!(
        registry.create_solver(1999, 6, "1"),
        Err(SolverError::InvalidYearDay(1999, 6))
    ));
    assert!(matches!(
        registry.create_solver(2023, 5, "x"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_instance_solves_and_reports_metadata() {
    let registry = SolverRegistryBuilder::new()
        .register::<Doubler>(2023, 5)
        .unwrap()
        .build();

    let solver = registry.create_solver(2023, 5, "21\n").unwrap();
    assert_eq!(solver.year(), 2023);
    assert_eq!(solver.day(), 5);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_end() >= solver.parse_start());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, 42);
    assert!(result.duration() >= chrono::TimeDelta::zero());

    assert_eq!(solver.solve(2).unwrap().answer, 84);
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_empty_registry() {
    let registry = SolverRegistryBuilder::default().build();
    assert!(registry.storage().is_empty());
    assert_eq!(registry.storage().len(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Registration succeeds exactly for the addressable year/day window
    #[test]
    fn prop_registration_bounds(year in 2000u16..2050, day in 0u8..=30) {
        let in_bounds = (BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year)
            && (1..=25).contains(&day);

        match SolverRegistryBuilder::new().register::<Doubler>(year, day) {
            Ok(builder) => {
                prop_assert!(in_bounds);
                let registry = builder.build();
                prop_assert_eq!(
                    registry.storage().get_info(year, day),
                    Some(FactoryInfo { year, day, parts: 2 })
                );
            }
            Err(RegistrationError::InvalidYearDay(y, d)) => {
                prop_assert!(!in_bounds);
                prop_assert_eq!((y, d), (year, day));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
