//! Day 8: Treetop Tree House

use anyhow::{anyhow, ensure};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 8, tags = ["2022", "grids"])]
pub struct Solver;

pub struct Grid {
    heights: Vec<Vec<i8>>,
    width: usize,
    height: usize,
}

impl InputParser for Solver {
    type Shared<'a> = Grid;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let parse = || -> anyhow::Result<Grid> {
            let heights: Vec<Vec<i8>> = input
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| {
                    line.bytes()
                        .map(|b| {
                            b.is_ascii_digit()
                                .then(|| (b - b'0') as i8)
                                .ok_or_else(|| anyhow!("bad tree height {:?}", b as char))
                        })
                        .collect()
                })
                .collect::<anyhow::Result<_>>()?;
            ensure!(!heights.is_empty(), "empty grid");
            let width = heights[0].len();
            ensure!(
                heights.iter().all(|row| row.len() == width),
                "ragged grid rows"
            );
            let height = heights.len();
            Ok(Grid {
                heights,
                width,
                height,
            })
        };
        parse().map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Grid {
    /// Walk from (x, y) in one direction, yielding heights until the edge.
    fn line_of_sight(&self, x: usize, y: usize, (dx, dy): (isize, isize)) -> impl Iterator<Item = i8> {
        let (mut cx, mut cy) = (x as isize, y as isize);
        std::iter::from_fn(move || {
            cx += dx;
            cy += dy;
            if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
                return None;
            }
            Some(self.heights[cy as usize][cx as usize])
        })
    }

    fn visible(&self, x: usize, y: usize) -> bool {
        let own = self.heights[y][x];
        DIRECTIONS
            .iter()
            .any(|&dir| self.line_of_sight(x, y, dir).all(|h| h < own))
    }

    fn scenic_score(&self, x: usize, y: usize) -> u64 {
        let own = self.heights[y][x];
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let mut distance = 0;
                for h in self.line_of_sight(x, y, dir) {
                    distance += 1;
                    if h >= own {
                        break;
                    }
                }
                distance
            })
            .product()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let count = (0..shared.height)
            .flat_map(|y| (0..shared.width).map(move |x| (x, y)))
            .filter(|&(x, y)| shared.visible(x, y))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        (0..shared.height)
            .flat_map(|y| (0..shared.width).map(move |x| (x, y)))
            .map(|(x, y)| shared.scenic_score(x, y))
            .max()
            .map(|best| best.to_string())
            .ok_or_else(|| SolveError::Failed("empty grid".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
30373
25512
65332
33549
35390";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "21");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "8");
    }

    #[test]
    fn scenic_scores_of_known_cells() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(grid.scenic_score(2, 1), 4);
        assert_eq!(grid.scenic_score(2, 3), 8);
    }
}
