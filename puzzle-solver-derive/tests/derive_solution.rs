use puzzle_solver::{
    InputParser, ParseError, PartSolver, RegistryBuilder, SolveError, Solver, SolverExt,
};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 1, tags = ["test"])]
struct TwoParts;

impl InputParser for TwoParts {
    type Shared<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TwoParts {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for TwoParts {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

#[derive(Solution)]
#[solution(year = 2022, day = 25, parts = 1)]
struct OnePart;

impl InputParser for OnePart {
    type Shared<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for OnePart {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn generated_dispatch_reaches_part_impls() {
    let mut shared = TwoParts::parse("1\n2\n3\n4").unwrap();
    assert_eq!(TwoParts::solve_part(&mut shared, 1).unwrap(), "10");
    assert_eq!(TwoParts::solve_part(&mut shared, 2).unwrap(), "24");
}

#[test]
fn generated_parts_constant() {
    assert_eq!(TwoParts::PARTS, 2);
    assert_eq!(OnePart::PARTS, 1);
}

#[test]
fn parts_past_dispatch_rejected() {
    let mut shared = TwoParts::parse("1").unwrap();
    assert!(matches!(
        TwoParts::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));

    let mut shared = OnePart::parse("abc").unwrap();
    assert!(matches!(
        OnePart::solve_part_checked(&mut shared, 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn derived_solvers_submitted_to_inventory() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.year == 2022)
        .unwrap()
        .build();

    assert!(registry.contains(2022, 1));
    assert!(registry.contains(2022, 25));
    assert_eq!(registry.info(2022, 25).unwrap().parts, 1);

    let mut solver = registry.create_solver(2022, 1, "2\n3").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "5");
}

#[test]
fn tag_filter_limits_registration() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"test"))
        .unwrap()
        .build();

    assert!(registry.contains(2022, 1));
    assert!(!registry.contains(2022, 25));
}
