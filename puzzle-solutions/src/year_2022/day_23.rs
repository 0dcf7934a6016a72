//! Day 23: Unstable Diffusion

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::{HashMap, HashSet};

#[derive(Solution)]
#[solution(year = 2022, day = 23, tags = ["2022", "simulation"])]
pub struct Solver;

type Point = (i64, i64);

pub struct SharedData {
    elves: HashSet<Point>,
    outcome: Option<Outcome>,
}

struct Outcome {
    empty_after_ten: i64,
    settled_round: u64,
}

impl InputParser for Solver {
    type Shared<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let mut elves = HashSet::new();
        for (y, line) in input.lines().filter(|line| !line.is_empty()).enumerate() {
            for (x, cell) in line.chars().enumerate() {
                match cell {
                    '#' => {
                        elves.insert((x as i64, y as i64));
                    }
                    '.' => {}
                    _ => {
                        return Err(ParseError::InvalidFormat(format!(
                            "unexpected grove cell {cell:?}"
                        )));
                    }
                }
            }
        }
        if elves.is_empty() {
            return Err(ParseError::MissingData("no elves in the grove".into()));
        }
        Ok(SharedData {
            elves,
            outcome: None,
        })
    }
}

/// The four proposal rules in round-zero order: the cells to check and the
/// step taken when all three are clear.
const RULES: [([Point; 3], Point); 4] = [
    ([(-1, -1), (0, -1), (1, -1)], (0, -1)),
    ([(-1, 1), (0, 1), (1, 1)], (0, 1)),
    ([(-1, -1), (-1, 0), (-1, 1)], (-1, 0)),
    ([(1, -1), (1, 0), (1, 1)], (1, 0)),
];

fn neighbors((x, y): Point) -> impl Iterator<Item = Point> {
    (-1..=1)
        .flat_map(move |dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
        .filter(move |&p| p != (x, y))
}

fn run_round(elves: &HashSet<Point>, round: u64) -> Option<HashSet<Point>> {
    let mut proposals: HashMap<Point, Vec<Point>> = HashMap::new();
    let mut moved = false;

    for &elf in elves {
        let proposal = if neighbors(elf).any(|p| elves.contains(&p)) {
            (0..4)
                .map(|i| RULES[(round as usize + i) % 4])
                .find(|(checks, _)| {
                    checks
                        .iter()
                        .all(|&(dx, dy)| !elves.contains(&(elf.0 + dx, elf.1 + dy)))
                })
                .map(|(_, (dx, dy))| (elf.0 + dx, elf.1 + dy))
        } else {
            None
        };
        match proposal {
            Some(target) => proposals.entry(target).or_default().push(elf),
            None => proposals.entry(elf).or_default().push(elf),
        }
    }

    let mut next = HashSet::with_capacity(elves.len());
    for (target, movers) in proposals {
        if movers.len() == 1 {
            if movers[0] != target {
                moved = true;
            }
            next.insert(target);
        } else {
            next.extend(movers);
        }
    }
    moved.then_some(next)
}

fn empty_ground(elves: &HashSet<Point>) -> i64 {
    let (min_x, max_x, min_y, max_y) = elves.iter().fold(
        (i64::MAX, i64::MIN, i64::MAX, i64::MIN),
        |(min_x, max_x, min_y, max_y), &(x, y)| {
            (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
        },
    );
    (max_x - min_x + 1) * (max_y - min_y + 1) - elves.len() as i64
}

/// Both parts come out of one simulation run to the settled round.
fn diffuse(shared: &mut SharedData) -> &Outcome {
    shared.outcome.get_or_insert_with(|| {
        let mut elves = shared.elves.clone();
        let mut empty_after_ten = None;
        let mut round = 0u64;
        loop {
            match run_round(&elves, round) {
                Some(next) => elves = next,
                None => break,
            }
            round += 1;
            if round == 10 {
                empty_after_ten = Some(empty_ground(&elves));
            }
        }
        let empty_after_ten = empty_after_ten.unwrap_or_else(|| empty_ground(&elves));
        Outcome {
            empty_after_ten,
            settled_round: round + 1,
        }
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(diffuse(shared).empty_after_ten.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(diffuse(shared).settled_round.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "110"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "20");
    }

    #[test]
    fn small_grove_settles() {
        let mut shared = Solver::parse(".....\n..##.\n..#..\n.....\n..##.").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "25");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "4");
    }

    #[test]
    fn lone_elf_never_moves() {
        let mut shared = Solver::parse("#").unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
    }
}
