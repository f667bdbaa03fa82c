use aoc_solver::{
    Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["test", "combined"])]
struct Combined;

impl AocParser for Combined {
    type Parsed = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .split_whitespace()
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Combined {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().sum())
    }
}

impl PartSolver<2> for Combined {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(parsed.iter().product())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4)]
struct Untagged;

impl AocParser for Untagged {
    type Parsed = usize;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
        Ok(*parsed as Answer)
    }
}

#[test]
fn test_plugin_is_discovered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let solver = registry
        .create_solver(2016, 3, "5 6 7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, 18);
    assert_eq!(solver.solve(2).unwrap().answer, 210);
}

#[test]
fn test_plugin_metadata() {
    let tags: Vec<&[&str]> = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .filter(|p| p.year == 2016)
        .map(|p| p.tags)
        .collect();

    let combined: &[&str] = &["test", "combined"];
    let empty: &[&str] = &[];
    assert!(tags.contains(&combined));
    assert!(tags.contains(&empty));
}

#[test]
fn test_tag_filter_skips_untagged() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 3));
    assert!(!registry.storage().contains(2016, 4));
}
