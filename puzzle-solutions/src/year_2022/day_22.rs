//! Day 22: Monkey Map

use anyhow::{anyhow, ensure};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashMap;

#[derive(Solution)]
#[solution(year = 2022, day = 22, tags = ["2022", "geometry"])]
pub struct Solver;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Void,
    Open,
    Wall,
}

pub enum Step {
    Forward(u32),
    Left,
    Right,
}

pub struct BoardMap {
    grid: Vec<Vec<Cell>>,
    path: Vec<Step>,
}

/// Facing indices follow the password encoding.
const RIGHT: usize = 0;
const DOWN: usize = 1;
const LEFT: usize = 2;
const UP: usize = 3;

const DELTAS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

fn parse_path(line: &str) -> anyhow::Result<Vec<Step>> {
    let mut steps = Vec::new();
    let mut digits = String::new();
    for c in line.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            'L' | 'R' => {
                if !digits.is_empty() {
                    steps.push(Step::Forward(digits.parse()?));
                    digits.clear();
                }
                steps.push(if c == 'L' { Step::Left } else { Step::Right });
            }
            _ => return Err(anyhow!("unexpected path character {:?}", c)),
        }
    }
    if !digits.is_empty() {
        steps.push(Step::Forward(digits.parse()?));
    }
    ensure!(!steps.is_empty(), "empty path");
    Ok(steps)
}

impl InputParser for Solver {
    type Shared<'a> = BoardMap;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let (board, path) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::InvalidFormat("missing blank line before path".into()))?;

        let grid = board
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        ' ' => Ok(Cell::Void),
                        '.' => Ok(Cell::Open),
                        '#' => Ok(Cell::Wall),
                        _ => Err(ParseError::InvalidFormat(format!("unexpected map cell {c:?}"))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoardMap {
            grid,
            path: parse_path(path).map_err(|e| ParseError::InvalidFormat(e.to_string()))?,
        })
    }
}

impl BoardMap {
    fn cell(&self, x: i64, y: i64) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Void;
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Cell::Void)
    }

    fn start(&self) -> Result<(i64, i64), SolveError> {
        let x = self.grid.first().and_then(|row| {
            row.iter()
                .position(|&cell| cell == Cell::Open)
                .map(|x| x as i64)
        });
        x.map(|x| (x, 0))
            .ok_or_else(|| SolveError::Failed("no open tile on the top row".into()))
    }

    /// Walk the path; `wrap` decides where walking off the board leads.
    fn walk(
        &self,
        wrap: impl Fn(i64, i64, usize) -> ((i64, i64), usize),
    ) -> Result<i64, SolveError> {
        let (mut x, mut y) = self.start()?;
        let mut facing = RIGHT;

        for step in &self.path {
            match step {
                Step::Left => facing = (facing + 3) % 4,
                Step::Right => facing = (facing + 1) % 4,
                Step::Forward(count) => {
                    for _ in 0..*count {
                        let (dx, dy) = DELTAS[facing];
                        let (mut next, mut next_facing) = ((x + dx, y + dy), facing);
                        if self.cell(next.0, next.1) == Cell::Void {
                            (next, next_facing) = wrap(x, y, facing);
                        }
                        match self.cell(next.0, next.1) {
                            Cell::Wall => break,
                            Cell::Open => {
                                (x, y) = next;
                                facing = next_facing;
                            }
                            Cell::Void => {
                                return Err(SolveError::Failed(
                                    "wrapped onto a missing tile".into(),
                                ));
                            }
                        }
                    }
                }
            }
        }

        Ok(1000 * (y + 1) + 4 * (x + 1) + facing as i64)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .walk(|x, y, facing| {
                // Re-enter from the far side, skipping the void margin.
                let (dx, dy) = DELTAS[facing];
                let (mut wx, mut wy) = (x, y);
                while shared.cell(wx - dx, wy - dy) != Cell::Void {
                    wx -= dx;
                    wy -= dy;
                }
                ((wx, wy), facing)
            })
            .map(|password| password.to_string())
    }
}

type Vec3 = [i32; 3];

fn neg(v: Vec3) -> Vec3 {
    [-v[0], -v[1], -v[2]]
}

fn add3(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(v: Vec3, k: i32) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

fn dot(a: Vec3, b: Vec3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// One face of the folded cube: which layout sector it occupies and the 3D
/// directions its local right and down axes map to.
#[derive(Clone, Copy)]
struct Face {
    sector: (i64, i64),
    right: Vec3,
    down: Vec3,
    normal: Vec3,
}

impl Face {
    fn axis(&self, facing: usize) -> Vec3 {
        match facing {
            RIGHT => self.right,
            DOWN => self.down,
            LEFT => neg(self.right),
            UP => neg(self.down),
            _ => unreachable!("facing is reduced modulo 4"),
        }
    }
}

struct Cube {
    side: i64,
    faces: Vec<Face>,
    by_sector: HashMap<(i64, i64), usize>,
    by_normal: HashMap<Vec3, usize>,
}

impl Cube {
    /// Fold the layout into a cube by breadth-first search over sectors,
    /// rotating the axis triple across each fold.
    fn fold(board: &BoardMap) -> Result<Cube, SolveError> {
        let tiles = board
            .grid
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Void)
            .count() as i64;
        let side = (1..).find(|n| 6 * n * n >= tiles).unwrap_or(1);
        if 6 * side * side != tiles {
            return Err(SolveError::Failed("tile count is not six squares".into()));
        }

        let occupied = |sector: (i64, i64)| {
            board.cell(sector.0 * side, sector.1 * side) != Cell::Void
        };
        let start = (0..)
            .map(|sx| (sx, 0))
            .take_while(|&(sx, _)| (sx * side) < board.grid[0].len() as i64 + 1)
            .find(|&sector| occupied(sector))
            .ok_or_else(|| SolveError::Failed("no face on the top row".into()))?;

        let mut faces = vec![Face {
            sector: start,
            right: [1, 0, 0],
            down: [0, 1, 0],
            normal: [0, 0, 1],
        }];
        let mut by_sector = HashMap::from([(start, 0usize)]);
        let mut queue = vec![0usize];

        while let Some(index) = queue.pop() {
            let face = faces[index];
            for facing in 0..4 {
                let (dx, dy) = DELTAS[facing];
                let sector = (face.sector.0 + dx, face.sector.1 + dy);
                if sector.0 < 0 || sector.1 < 0 || by_sector.contains_key(&sector) {
                    continue;
                }
                if !occupied(sector) {
                    continue;
                }
                let folded = match facing {
                    RIGHT => Face {
                        sector,
                        right: neg(face.normal),
                        down: face.down,
                        normal: face.right,
                    },
                    LEFT => Face {
                        sector,
                        right: face.normal,
                        down: face.down,
                        normal: neg(face.right),
                    },
                    DOWN => Face {
                        sector,
                        right: face.right,
                        down: neg(face.normal),
                        normal: face.down,
                    },
                    _ => Face {
                        sector,
                        right: face.right,
                        down: face.normal,
                        normal: neg(face.down),
                    },
                };
                by_sector.insert(sector, faces.len());
                queue.push(faces.len());
                faces.push(folded);
            }
        }

        if faces.len() != 6 {
            return Err(SolveError::Failed("layout does not fold into a cube".into()));
        }
        let by_normal = faces
            .iter()
            .enumerate()
            .map(|(i, face)| (face.normal, i))
            .collect();
        Ok(Cube {
            side,
            faces,
            by_sector,
            by_normal,
        })
    }

    /// Where walking off the board at `(x, y)` facing `facing` re-enters.
    ///
    /// Cells live on a doubled integer lattice centered on the cube, so the
    /// landing cell is the exit point shifted one half-step out along the
    /// travel direction and one half-step in along the old face normal.
    fn wrap(&self, x: i64, y: i64, facing: usize) -> ((i64, i64), usize) {
        let n = self.side as i32;
        let sector = (x.div_euclid(self.side), y.div_euclid(self.side));
        let (lx, ly) = (
            x.rem_euclid(self.side) as i32,
            y.rem_euclid(self.side) as i32,
        );
        let face = self.faces[self.by_sector[&sector]];

        let exit = add3(
            add3(
                scale(face.right, 2 * lx + 1 - n),
                scale(face.down, 2 * ly + 1 - n),
            ),
            scale(face.normal, n),
        );
        let travel = face.axis(facing);
        let entry_point = add3(exit, add3(travel, neg(face.normal)));

        let target = self.faces[self.by_normal[&travel]];
        let entry_facing = (0..4)
            .find(|&d| target.axis(d) == neg(face.normal))
            .unwrap_or(facing);
        let ex = (dot(entry_point, target.right) + n - 1) / 2;
        let ey = (dot(entry_point, target.down) + n - 1) / 2;
        (
            (
                target.sector.0 * self.side + ex as i64,
                target.sector.1 * self.side + ey as i64,
            ),
            entry_facing,
        )
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let cube = Cube::fold(shared)?;
        shared
            .walk(|x, y, facing| cube.wrap(x, y, facing))
            .map(|password| password.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "6032"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "5031"
        );
    }

    #[test]
    fn folds_to_six_faces() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&shared).unwrap();
        assert_eq!(cube.side, 4);
        assert_eq!(cube.faces.len(), 6);
    }

    #[test]
    fn cube_edge_crossing_turns() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&shared).unwrap();
        // Walking right off row 5 lands on the bottom-right face heading down.
        assert_eq!(cube.wrap(11, 5, RIGHT), ((14, 8), DOWN));
        // And the reverse crossing heads left again.
        assert_eq!(cube.wrap(14, 8, UP), ((11, 5), LEFT));
    }

    #[test]
    fn opposite_facings_have_opposite_axes() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&shared).unwrap();
        for face in &cube.faces {
            assert_eq!(face.axis(LEFT), neg(face.axis(RIGHT)));
            assert_eq!(face.axis(UP), neg(face.axis(DOWN)));
        }
    }

    #[test]
    fn path_parses_counts_and_turns() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.path.len(), 13);
        assert!(matches!(shared.path[0], Step::Forward(10)));
        assert!(matches!(shared.path[1], Step::Right));
    }
}
