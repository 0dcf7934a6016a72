//! Day 9: Rope Bridge

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashSet;

#[derive(Solution)]
#[solution(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

pub struct SharedData {
    motions: Vec<((i32, i32), u32)>,
    visited: Option<Visited>,
}

/// Distinct positions visited by knot 1 and by knot 9
struct Visited {
    short_rope: usize,
    long_rope: usize,
}

impl InputParser for Solver {
    type Shared<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let motions = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<((i32, i32), u32)> {
                let (dir, count) = line
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("bad motion {:?}", line))?;
                let step = match dir {
                    "U" => (0, -1),
                    "D" => (0, 1),
                    "L" => (-1, 0),
                    "R" => (1, 0),
                    _ => return Err(anyhow!("bad direction {:?}", dir)),
                };
                Ok((step, count.parse()?))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            motions,
            visited: None,
        })
    }
}

/// Pull one knot after the one ahead of it.
fn follow(knot: &mut (i32, i32), ahead: (i32, i32)) {
    let (dx, dy) = (ahead.0 - knot.0, ahead.1 - knot.1);
    if dx.abs().max(dy.abs()) > 1 {
        knot.0 += dx.signum();
        knot.1 += dy.signum();
    }
}

/// Both parts come from one pass over the motions: knot 1 answers part one,
/// the tail answers part two.
fn simulate(shared: &mut SharedData) -> &Visited {
    shared.visited.get_or_insert_with(|| {
        let mut rope = [(0i32, 0i32); 10];
        let mut short = HashSet::new();
        let mut long = HashSet::new();

        for &((dx, dy), count) in &shared.motions {
            for _ in 0..count {
                rope[0].0 += dx;
                rope[0].1 += dy;
                for i in 1..rope.len() {
                    let ahead = rope[i - 1];
                    follow(&mut rope[i], ahead);
                }
                short.insert(rope[1]);
                long.insert(rope[9]);
            }
        }

        Visited {
            short_rope: short.len(),
            long_rope: long.len(),
        }
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(simulate(shared).short_rope.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(simulate(shared).long_rope.to_string())
    }
}
