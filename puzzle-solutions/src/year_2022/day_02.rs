//! Day 2: Rock Paper Scissors

use anyhow::{anyhow, bail};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 2, tags = ["2022", "counting"])]
pub struct Solver;

impl InputParser for Solver {
    /// Per round: opponent's shape and the second column, both as 1..=3
    type Shared<'a> = Vec<(i64, i64)>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<(i64, i64)> {
                let bytes = line.as_bytes();
                let first = *bytes.first().ok_or_else(|| anyhow!("empty round"))?;
                let second = *bytes.last().ok_or_else(|| anyhow!("empty round"))?;
                if !(b'A'..=b'C').contains(&first) || !(b'X'..=b'Z').contains(&second) {
                    bail!("bad round {:?}", line);
                }
                Ok(((first - b'A' + 1) as i64, (second - b'X' + 1) as i64))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Score one round: 1/2/3 for the shape plus 0/3/6 for loss/draw/win.
fn score(opponent: i64, mine: i64) -> i64 {
    let outcome = (mine - opponent + 4) % 3;
    3 * outcome + mine
}

/// Pick the shape producing `outcome` (1 loss, 2 draw, 3 win) against `opponent`.
fn pick_shape(opponent: i64, outcome: i64) -> i64 {
    (opponent + outcome) % 3 + 1
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().map(|&(opp, mine)| score(opp, mine)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: i64 = shared
            .iter()
            .map(|&(opp, outcome)| score(opp, pick_shape(opp, outcome)))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "A Y\nB X\nC Z";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "15");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "12");
    }

    #[test]
    fn draw_against_every_shape() {
        for opp in 1..=3 {
            assert_eq!(pick_shape(opp, 2), opp);
            assert_eq!(score(opp, opp), 3 + opp);
        }
    }
}
