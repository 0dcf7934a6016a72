//! Day 3: Rucksack Reorganization

use anyhow::{bail, ensure};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 3, tags = ["2022", "sets"])]
pub struct Solver;

impl InputParser for Solver {
    type Shared<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let rucksacks: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        for sack in &rucksacks {
            if !sack.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(ParseError::InvalidFormat(format!("bad rucksack {:?}", sack)));
            }
        }
        Ok(rucksacks)
    }
}

/// Item priority: a-z is 1..=26, A-Z is 27..=52.
fn priority(item: u8) -> u32 {
    if item.is_ascii_lowercase() {
        (item - b'a' + 1) as u32
    } else {
        (item - b'A' + 27) as u32
    }
}

/// Bitmask over priorities of the items in `sack`.
fn item_mask(sack: &str) -> u64 {
    sack.bytes().fold(0, |mask, b| mask | 1 << priority(b))
}

/// Priority of the single item present in every mask.
fn common_priority(masks: impl IntoIterator<Item = u64>) -> anyhow::Result<u32> {
    let common = masks.into_iter().fold(u64::MAX, |acc, m| acc & m);
    if common == 0 {
        bail!("no common item");
    }
    Ok(common.trailing_zeros())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|sack| {
                let (front, back) = sack.split_at(sack.len() / 2);
                common_priority([item_mask(front), item_mask(back)])
            })
            .sum::<anyhow::Result<u32>>()
            .map(|total| total.to_string())
            .map_err(|e| SolveError::Failed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let badges = || -> anyhow::Result<u32> {
            ensure!(shared.len() % 3 == 0, "rucksack count not divisible by 3");
            shared
                .chunks(3)
                .map(|group| common_priority(group.iter().map(|sack| item_mask(sack))))
                .sum()
        };
        badges()
            .map(|total| total.to_string())
            .map_err(|e| SolveError::Failed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "157");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "70");
    }

    #[test]
    fn priorities() {
        assert_eq!(priority(b'a'), 1);
        assert_eq!(priority(b'z'), 26);
        assert_eq!(priority(b'A'), 27);
        assert_eq!(priority(b'Z'), 52);
    }
}
