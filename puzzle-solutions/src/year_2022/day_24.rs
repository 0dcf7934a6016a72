//! Day 24: Blizzard Basin

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashSet;

#[derive(Solution)]
#[solution(year = 2022, day = 24, tags = ["2022", "search"])]
pub struct Solver;

type Point = (i64, i64);

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// The valley interior spans `1..=width` by `1..=height`; the start and goal
/// sit in the walls above and below.
pub struct Valley {
    width: i64,
    height: i64,
    up: HashSet<Point>,
    down: HashSet<Point>,
    left: HashSet<Point>,
    right: HashSet<Point>,
}

impl InputParser for Solver {
    type Shared<'a> = Valley;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.len());
        if rows < 3 || columns < 3 {
            return Err(ParseError::MissingData("valley too small".into()));
        }

        let mut valley = Valley {
            width: columns as i64 - 2,
            height: rows as i64 - 2,
            up: HashSet::new(),
            down: HashSet::new(),
            left: HashSet::new(),
            right: HashSet::new(),
        };
        for (y, line) in lines.iter().enumerate() {
            for (x, cell) in line.chars().enumerate() {
                let at = (x as i64, y as i64);
                match cell {
                    '^' => {
                        valley.up.insert(at);
                    }
                    'v' => {
                        valley.down.insert(at);
                    }
                    '<' => {
                        valley.left.insert(at);
                    }
                    '>' => {
                        valley.right.insert(at);
                    }
                    '#' | '.' => {}
                    _ => {
                        return Err(ParseError::InvalidFormat(format!(
                            "unexpected valley cell {cell:?}"
                        )));
                    }
                }
            }
        }
        Ok(valley)
    }
}

impl Valley {
    fn start(&self) -> Point {
        (1, 0)
    }

    fn goal(&self) -> Point {
        (self.width, self.height + 1)
    }

    /// Blizzard positions cycle, so instead of advancing them each minute we
    /// look up where a blizzard occupying `at` now would have started.
    fn clear_at(&self, at: Point, minute: i64) -> bool {
        if at == self.start() || at == self.goal() {
            return true;
        }
        let (x, y) = at;
        if x < 1 || x > self.width || y < 1 || y > self.height {
            return false;
        }
        !self.up.contains(&(x, (y - 1 + minute).rem_euclid(self.height) + 1))
            && !self.down.contains(&(x, (y - 1 - minute).rem_euclid(self.height) + 1))
            && !self.left.contains(&((x - 1 + minute).rem_euclid(self.width) + 1, y))
            && !self.right.contains(&((x - 1 - minute).rem_euclid(self.width) + 1, y))
    }

    /// Earliest arrival at `to` leaving `from` at `start_minute`, found by a
    /// breadth-first frontier advanced one minute at a time.
    fn trip(&self, from: Point, to: Point, start_minute: i64) -> Result<i64, SolveError> {
        // Blizzard layouts repeat with period lcm(width, height); past one
        // full period per cell the goal is unreachable.
        let cycle = self.width * self.height / gcd(self.width, self.height);
        let limit = cycle * (self.width * self.height + 2);
        let mut frontier = HashSet::from([from]);

        for minute in start_minute + 1..=start_minute + limit {
            let mut next = HashSet::new();
            for &(x, y) in &frontier {
                for (dx, dy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let candidate = (x + dx, y + dy);
                    if candidate == to {
                        return Ok(minute);
                    }
                    if self.clear_at(candidate, minute) {
                        next.insert(candidate);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        Err(SolveError::Failed("no route through the blizzards".into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.trip(shared.start(), shared.goal(), 0)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let there = shared.trip(shared.start(), shared.goal(), 0)?;
        let back = shared.trip(shared.goal(), shared.start(), there)?;
        let again = shared.trip(shared.start(), shared.goal(), back)?;
        Ok(again.to_string())
    }
}
