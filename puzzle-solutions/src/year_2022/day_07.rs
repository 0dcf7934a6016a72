//! Day 7: No Space Left On Device

use anyhow::{anyhow, bail};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

#[derive(Solution)]
#[solution(year = 2022, day = 7, tags = ["2022", "trees"])]
pub struct Solver;

impl InputParser for Solver {
    /// Total size (files plus subdirectories) of every directory, root first
    type Shared<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        directory_sizes(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Replay the shell session, accumulating each file's size into every
/// directory on the current path. Index 0 is the root.
fn directory_sizes(session: &str) -> anyhow::Result<Vec<u64>> {
    let mut sizes: Vec<u64> = vec![0];
    // Stack of indices into `sizes` for the current working path
    let mut path: Vec<usize> = vec![0];

    for line in session.lines().filter(|line| !line.is_empty()) {
        if let Some(target) = line.strip_prefix("$ cd ") {
            match target {
                "/" => path.truncate(1),
                ".." => {
                    if path.len() > 1 {
                        path.pop();
                    }
                }
                _ => {
                    sizes.push(0);
                    path.push(sizes.len() - 1);
                }
            }
        } else if line == "$ ls" || line.starts_with("dir ") {
            // Listing output carries no sizes of its own
        } else {
            let (size, _name) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("bad listing entry {:?}", line))?;
            let size: u64 = size.parse()?;
            for &dir in &path {
                sizes[dir] += size;
            }
        }
    }

    if sizes.iter().all(|&s| s == 0) {
        bail!("session lists no files");
    }
    Ok(sizes)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().filter(|&&s| s <= 100_000).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let used = shared[0];
        let needed = used.saturating_sub(DISK_SIZE - UPDATE_SIZE);
        shared
            .iter()
            .filter(|&&s| s >= needed)
            .min()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::Failed("no directory large enough".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "95437");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "24933642"
        );
    }

    #[test]
    fn root_totals_whole_tree() {
        let sizes = directory_sizes(EXAMPLE).unwrap();
        assert_eq!(sizes[0], 48381165);
    }
}
