//! Day 18: Boiling Boulders

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashSet;

#[derive(Solution)]
#[solution(year = 2022, day = 18, tags = ["2022", "grid"])]
pub struct Solver;

type Cube = (i32, i32, i32);

const NEIGHBORS: [Cube; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

impl InputParser for Solver {
    type Shared<'a> = HashSet<Cube>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<Cube> {
                let mut parts = line.split(',');
                let mut next = || {
                    parts
                        .next()
                        .ok_or_else(|| anyhow!("expected three coordinates in {:?}", line))?
                        .parse::<i32>()
                        .with_context(|| format!("coordinate in {line:?}"))
                };
                let cube = (next()?, next()?, next()?);
                if parts.next().is_some() {
                    return Err(anyhow!("too many coordinates in {:?}", line));
                }
                Ok(cube)
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn offset(cube: Cube, delta: Cube) -> Cube {
    (cube.0 + delta.0, cube.1 + delta.1, cube.2 + delta.2)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let faces: usize = shared
            .iter()
            .flat_map(|&cube| NEIGHBORS.iter().map(move |&d| offset(cube, d)))
            .filter(|neighbor| !shared.contains(neighbor))
            .count();
        Ok(faces.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let min = shared
            .iter()
            .fold((i32::MAX, i32::MAX, i32::MAX), |acc, &(x, y, z)| {
                (acc.0.min(x - 1), acc.1.min(y - 1), acc.2.min(z - 1))
            });
        let max = shared
            .iter()
            .fold((i32::MIN, i32::MIN, i32::MIN), |acc, &(x, y, z)| {
                (acc.0.max(x + 1), acc.1.max(y + 1), acc.2.max(z + 1))
            });
        if shared.is_empty() {
            return Err(SolveError::Failed("no cubes scanned".into()));
        }

        // Flood the bounding shell with steam; faces touched from outside
        // are the exterior surface.
        let in_bounds = |(x, y, z): Cube| {
            (min.0..=max.0).contains(&x)
                && (min.1..=max.1).contains(&y)
                && (min.2..=max.2).contains(&z)
        };
        let mut steam = HashSet::from([min]);
        let mut frontier = vec![min];
        let mut faces = 0u64;
        while let Some(at) = frontier.pop() {
            for &delta in &NEIGHBORS {
                let next = offset(at, delta);
                if !in_bounds(next) {
                    continue;
                }
                if shared.contains(&next) {
                    faces += 1;
                } else if steam.insert(next) {
                    frontier.push(next);
                }
            }
        }
        Ok(faces.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "64");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "58");
    }

    #[test]
    fn adjacent_pair() {
        let mut shared = Solver::parse("1,1,1\n2,1,1").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "10");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "10");
    }

    #[test]
    fn malformed_coordinates_rejected() {
        assert!(Solver::parse("1,2").is_err());
        assert!(Solver::parse("1,2,3,4").is_err());
    }
}
