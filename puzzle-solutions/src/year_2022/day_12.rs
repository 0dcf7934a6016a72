//! Day 12: Hill Climbing Algorithm

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::VecDeque;

#[derive(Solution)]
#[solution(year = 2022, day = 12, tags = ["2022", "graph"])]
pub struct Solver;

pub struct HeightMap {
    heights: Vec<Vec<u8>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl InputParser for Solver {
    type Shared<'a> = HeightMap;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let mut start = None;
        let mut end = None;
        let heights: Vec<Vec<u8>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.bytes()
                    .enumerate()
                    .map(|(x, cell)| match cell {
                        b'S' => {
                            start = Some((x, y));
                            b'a'
                        }
                        b'E' => {
                            end = Some((x, y));
                            b'z'
                        }
                        b'a'..=b'z' => cell,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();

        if heights.iter().flatten().any(|&h| h == 0) {
            return Err(ParseError::InvalidFormat("unexpected map cell".into()));
        }
        let (start, end) = start
            .zip(end)
            .ok_or_else(|| ParseError::InvalidFormat(anyhow!("missing S or E marker").to_string()))?;
        Ok(HeightMap {
            heights,
            start,
            end,
        })
    }
}

/// Breadth-first search downhill from the end, so one pass answers both the
/// fixed start and the nearest lowest cell.
fn distances_from_end(map: &HeightMap) -> Vec<Vec<Option<u32>>> {
    let height = map.heights.len();
    let width = map.heights[0].len();
    let mut distances: Vec<Vec<Option<u32>>> = vec![vec![None; width]; height];
    let mut queue = VecDeque::new();

    distances[map.end.1][map.end.0] = Some(0);
    queue.push_back(map.end);

    while let Some((x, y)) = queue.pop_front() {
        let steps = distances[y][x].unwrap_or(0) + 1;
        for (dx, dy) in [(0i64, -1i64), (0, 1), (-1, 0), (1, 0)] {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            // Reversed climb rule: moving end-to-start may drop at most one.
            if distances[ny][nx].is_none() && map.heights[y][x] <= map.heights[ny][nx] + 1 {
                distances[ny][nx] = Some(steps);
                queue.push_back((nx, ny));
            }
        }
    }

    distances
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        distances_from_end(shared)[shared.start.1][shared.start.0]
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::Failed("no path from start to end".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let distances = distances_from_end(shared);
        shared
            .heights
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                let distances = &distances;
                row.iter()
                    .enumerate()
                    .filter(|&(_, &h)| h == b'a')
                    .filter_map(move |(x, _)| distances[y][x])
            })
            .min()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::Failed("no lowest cell can reach the end".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "31");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "29");
    }

    #[test]
    fn markers_located() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.start, (0, 0));
        assert_eq!(shared.end, (5, 2));
    }

    #[test]
    fn unreachable_end_is_an_error() {
        let mut shared = Solver::parse("Sa\nza\naE").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::Failed(_))
        ));
    }
}
