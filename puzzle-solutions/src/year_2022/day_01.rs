//! Day 1: Calorie Counting

use anyhow::Context;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 1, tags = ["2022", "counting"])]
pub struct Solver;

impl InputParser for Solver {
    /// Total calories carried per elf
    type Shared<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .trim()
            .split("\n\n")
            .map(|block| {
                block
                    .lines()
                    .map(|line| {
                        line.trim()
                            .parse::<u64>()
                            .with_context(|| format!("bad calorie count {:?}", line))
                    })
                    .sum()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|max| max.to_string())
            .ok_or_else(|| SolveError::Failed("no elves in input".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared.sort_unstable_by(|a, b| b.cmp(a));
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}
