//! Day 13: Distress Signal

use anyhow::{anyhow, ensure};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::cmp::Ordering;

#[derive(Solution)]
#[solution(year = 2022, day = 13, tags = ["2022", "parsing"])]
pub struct Solver;

#[derive(Clone, PartialEq, Eq)]
pub enum Packet {
    Number(u64),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Number(left), Packet::Number(right)) => left.cmp(right),
            (Packet::List(left), Packet::List(right)) => left.cmp(right),
            (Packet::Number(left), Packet::List(_)) => {
                Packet::List(vec![Packet::Number(*left)]).cmp(other)
            }
            (Packet::List(_), Packet::Number(right)) => {
                self.cmp(&Packet::List(vec![Packet::Number(*right)]))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Recursive descent over the bracketed list syntax.
fn parse_packet(bytes: &[u8], pos: &mut usize) -> anyhow::Result<Packet> {
    match bytes.get(*pos) {
        Some(b'[') => {
            *pos += 1;
            let mut items = Vec::new();
            while bytes.get(*pos) != Some(&b']') {
                items.push(parse_packet(bytes, pos)?);
                if bytes.get(*pos) == Some(&b',') {
                    *pos += 1;
                }
            }
            *pos += 1;
            Ok(Packet::List(items))
        }
        Some(b'0'..=b'9') => {
            let start = *pos;
            while matches!(bytes.get(*pos), Some(b'0'..=b'9')) {
                *pos += 1;
            }
            Ok(Packet::Number(
                std::str::from_utf8(&bytes[start..*pos])?.parse()?,
            ))
        }
        other => Err(anyhow!("unexpected byte {:?} at offset {}", other, pos)),
    }
}

fn parse_line(line: &str) -> anyhow::Result<Packet> {
    let mut pos = 0;
    let packet = parse_packet(line.as_bytes(), &mut pos)?;
    ensure!(pos == line.len(), "trailing data in {:?}", line);
    Ok(packet)
}

impl InputParser for Solver {
    type Shared<'a> = Vec<Packet>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_line)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: usize = shared
            .chunks(2)
            .enumerate()
            .filter(|(_, pair)| pair.len() == 2 && pair[0] < pair[1])
            .map(|(index, _)| index + 1)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let dividers = [
            Packet::List(vec![Packet::List(vec![Packet::Number(2)])]),
            Packet::List(vec![Packet::List(vec![Packet::Number(6)])]),
        ];
        // Sorting is unnecessary, counting packets below each divider gives
        // the ranks directly.
        let first = shared.iter().filter(|p| **p < dividers[0]).count() + 1;
        let second = shared.iter().filter(|p| **p < dividers[1]).count() + 2;
        Ok((first * second).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "13");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "140"
        );
    }

    #[test]
    fn number_compares_against_list() {
        let left = parse_line("[9]").unwrap();
        let right = parse_line("[[8,7,6]]").unwrap();
        assert!(left > right);
    }

    #[test]
    fn trailing_data_rejected() {
        assert!(parse_line("[1]x").is_err());
        assert!(Solver::parse("[1,2]\n[1,x]").is_err());
    }
}
