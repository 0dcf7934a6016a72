//! Day 20: Grove Positioning System

use anyhow::Context;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 20, tags = ["2022", "sequence"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;

impl InputParser for Solver {
    type Shared<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.parse::<i64>().with_context(|| line.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Mix the file `rounds` times and return the grove coordinate sum. Values
/// move by original order; positions track where each original index sits.
fn decrypt(file: &[i64], key: i64, rounds: u32) -> Result<i64, SolveError> {
    let values: Vec<i64> = file.iter().map(|&v| v * key).collect();
    let mut order: Vec<usize> = (0..values.len()).collect();
    let wrap = values.len() as i64 - 1;
    if wrap <= 0 {
        return Err(SolveError::Failed("file too short to mix".into()));
    }

    for _ in 0..rounds {
        for (original, &value) in values.iter().enumerate() {
            let from = order
                .iter()
                .position(|&index| index == original)
                .ok_or_else(|| SolveError::Failed("mixing lost an entry".into()))?;
            order.remove(from);
            let to = (from as i64 + value).rem_euclid(wrap) as usize;
            order.insert(to, original);
        }
    }

    let zero = values
        .iter()
        .position(|&value| value == 0)
        .ok_or_else(|| SolveError::Failed("file contains no 0".into()))?;
    let zero_at = order
        .iter()
        .position(|&index| index == zero)
        .ok_or_else(|| SolveError::Failed("mixing lost an entry".into()))?;
    Ok([1000, 2000, 3000]
        .iter()
        .map(|offset| values[order[(zero_at + offset) % order.len()]])
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(decrypt(shared, 1, 1)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(decrypt(shared, DECRYPTION_KEY, 10)?.to_string())
    }
}
