//! Day 17: Pyroclastic Flow

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashMap;

#[derive(Solution)]
#[solution(year = 2022, day = 17, tags = ["2022", "simulation"])]
pub struct Solver;

/// Rock shapes as row bitmasks, bottom row first, bit 0 at the left wall.
const SHAPES: [&[u8]; 5] = [
    &[0b1111],
    &[0b010, 0b111, 0b010],
    &[0b111, 0b100, 0b100],
    &[0b1, 0b1, 0b1, 0b1],
    &[0b11, 0b11],
];

const WIDTH: u32 = 7;

impl InputParser for Solver {
    type Shared<'a> = Vec<i8>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let jets = input
            .trim()
            .bytes()
            .map(|jet| match jet {
                b'<' => Ok(-1),
                b'>' => Ok(1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected jet byte {:?}",
                    other as char
                ))),
            })
            .collect::<Result<Vec<i8>, _>>()?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("no jet pattern".into()));
        }
        Ok(jets)
    }
}

struct Chamber {
    rows: Vec<u8>,
    jet_index: usize,
}

impl Chamber {
    fn collides(&self, shape: &[u8], x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        shape.iter().enumerate().any(|(row, &bits)| {
            let shifted = (bits as u32) << x;
            shifted >= (1 << WIDTH)
                || self
                    .rows
                    .get(y as usize + row)
                    .is_some_and(|&settled| settled as u32 & shifted != 0)
        })
    }

    fn drop_rock(&mut self, shape: &[u8], jets: &[i8]) {
        let mut x = 2i64;
        let mut y = self.rows.len() as i64 + 3;
        loop {
            let pushed = x + jets[self.jet_index] as i64;
            self.jet_index = (self.jet_index + 1) % jets.len();
            if !self.collides(shape, pushed, y) {
                x = pushed;
            }
            if self.collides(shape, x, y - 1) {
                break;
            }
            y -= 1;
        }
        for (row, &bits) in shape.iter().enumerate() {
            let at = y as usize + row;
            if at == self.rows.len() {
                self.rows.push(0);
            }
            self.rows[at] |= bits << x;
        }
    }
}

/// Tower height after `rocks` rocks fall. The (jet, shape) index pair recurs
/// with a fixed height and rock delta once the simulation settles into its
/// cycle, which covers the quadrillion-rock part without simulating it.
fn tower_height(jets: &[i8], rocks: u64) -> u64 {
    let mut chamber = Chamber {
        rows: Vec::new(),
        jet_index: 0,
    };
    let mut seen: HashMap<(usize, usize), (u64, u64)> = HashMap::new();
    let mut dropped = 0u64;
    let mut skipped_height = 0u64;

    while dropped < rocks {
        let shape_index = (dropped % SHAPES.len() as u64) as usize;
        chamber.drop_rock(SHAPES[shape_index], jets);
        dropped += 1;

        if skipped_height == 0 {
            let key = (chamber.jet_index, shape_index);
            let state = (dropped, chamber.rows.len() as u64);
            if let Some(&(prev_dropped, prev_height)) = seen.get(&key) {
                let period = dropped - prev_dropped;
                let remaining = rocks - dropped;
                if remaining % period == 0 {
                    let cycles = remaining / period;
                    skipped_height = cycles * (chamber.rows.len() as u64 - prev_height);
                    dropped += cycles * period;
                }
            }
            seen.insert(key, state);
        }
    }

    chamber.rows.len() as u64 + skipped_height
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 1_000_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "3068"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "1514285714288"
        );
    }

    #[test]
    fn first_rocks_settle() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(tower_height(&jets, 1), 1);
        assert_eq!(tower_height(&jets, 2), 4);
        assert_eq!(tower_height(&jets, 10), 17);
    }

    #[test]
    fn invalid_jet_rejected() {
        assert!(Solver::parse("<>^").is_err());
    }
}
