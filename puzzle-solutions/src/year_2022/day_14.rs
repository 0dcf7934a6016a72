//! Day 14: Regolith Reservoir

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashSet;

#[derive(Solution)]
#[solution(year = 2022, day = 14, tags = ["2022", "simulation"])]
pub struct Solver;

const SOURCE: (i64, i64) = (500, 0);

pub struct Cave {
    rock: HashSet<(i64, i64)>,
    floor: i64,
}

fn parse_point(text: &str) -> anyhow::Result<(i64, i64)> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("bad point {:?}", text))?;
    Ok((x.parse().context("x")?, y.parse().context("y")?))
}

impl InputParser for Solver {
    type Shared<'a> = Cave;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let mut rock = HashSet::new();
        for line in input.lines().filter(|line| !line.is_empty()) {
            let points = line
                .split(" -> ")
                .map(parse_point)
                .collect::<anyhow::Result<Vec<_>>>()
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            for pair in points.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let (dx, dy) = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
                let mut at = from;
                rock.insert(at);
                while at != to {
                    at = (at.0 + dx, at.1 + dy);
                    rock.insert(at);
                }
            }
        }
        let floor = rock.iter().map(|&(_, y)| y).max().unwrap_or(0) + 2;
        Ok(Cave { rock, floor })
    }
}

/// Drop sand until a grain passes `lowest_rock` (part one) or the source
/// clogs (part two). Returns grains at rest at each milestone.
fn pour(cave: &Cave) -> (u64, u64) {
    let mut filled = cave.rock.clone();
    let mut resting = 0u64;
    let mut into_abyss = None;
    // The path to each grain's resting place is a prefix of the previous
    // grain's path, so walking back up it skips the common descent.
    let mut path = vec![SOURCE];

    while let Some(&grain) = path.last() {
        let next = [0, -1, 1]
            .into_iter()
            .map(|dx| (grain.0 + dx, grain.1 + 1))
            .find(|candidate| candidate.1 < cave.floor && !filled.contains(candidate));
        match next {
            Some(candidate) => {
                if candidate.1 >= cave.floor - 2 {
                    into_abyss.get_or_insert(resting);
                }
                path.push(candidate);
            }
            None => {
                filled.insert(grain);
                resting += 1;
                path.pop();
            }
        }
    }

    (into_abyss.unwrap_or(resting), resting)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        if shared.rock.contains(&SOURCE) {
            return Err(SolveError::Failed("sand source is blocked".into()));
        }
        Ok(pour(shared).0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        if shared.rock.contains(&SOURCE) {
            return Err(SolveError::Failed("sand source is blocked".into()));
        }
        Ok(pour(shared).1.to_string())
    }
}
