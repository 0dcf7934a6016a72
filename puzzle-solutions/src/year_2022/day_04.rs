//! Day 4: Camp Cleanup

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

/// One elf's section assignment, inclusive on both ends
#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    start: u32,
    end: u32,
}

impl Assignment {
    fn contains(&self, other: &Assignment) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    fn overlaps(&self, other: &Assignment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[derive(Solution)]
#[solution(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

impl InputParser for Solver {
    type Shared<'a> = Vec<(Assignment, Assignment)>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        fn assignment(s: &str) -> anyhow::Result<Assignment> {
            let (start, end) = s
                .split_once('-')
                .ok_or_else(|| anyhow!("expected a-b, got {:?}", s))?;
            Ok(Assignment {
                start: start.parse()?,
                end: end.parse()?,
            })
        }

        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<_> {
                let (first, second) = line
                    .split_once(',')
                    .ok_or_else(|| anyhow!("expected two assignments"))?;
                Ok((assignment(first)?, assignment(second)?))
            })
            .enumerate()
            .map(|(i, res)| res.with_context(|| format!("line {}", i + 1)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| a.contains(b) || b.contains(a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| a.overlaps(b)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "4");
    }

    #[test]
    fn parse_failure_names_line() {
        let err = Solver::parse("1-2,3-4\n5-6").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
