//! Day 6: Tuning Trouble

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 6, tags = ["2022", "strings"])]
pub struct Solver;

impl InputParser for Solver {
    type Shared<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| ParseError::MissingData("empty datastream".into()))
    }
}

/// 1-based index just past the first window of `len` distinct bytes.
///
/// Tracks the last position of each byte; a repeat pushes the earliest
/// possible window end forward, so the scan is a single pass.
fn find_marker(message: &str, len: usize) -> Option<usize> {
    let mut seen = [0usize; 256];
    let mut min_valid = len;
    for (i, b) in message.bytes().enumerate() {
        let pos = i + 1;
        min_valid = min_valid.max(seen[b as usize] + len);
        seen[b as usize] = pos;
        if pos >= min_valid {
            return Some(pos);
        }
    }
    None
}

fn solve_marker(message: &str, len: usize) -> Result<String, SolveError> {
    find_marker(message, len)
        .map(|pos| pos.to_string())
        .ok_or_else(|| SolveError::Failed(format!("no {}-byte marker found", len).into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_markers() {
        assert_eq!(find_marker("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 4), Some(7));
        assert_eq!(find_marker("bvwbjplbgvbhsrlpgdmjqwftvncz", 4), Some(5));
        assert_eq!(find_marker("nppdvjthqldpwncqszvftbrmjlhg", 4), Some(6));
        assert_eq!(find_marker("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 4), Some(10));
        assert_eq!(find_marker("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 4), Some(11));
    }

    #[test]
    fn message_markers() {
        assert_eq!(find_marker("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 14), Some(19));
        assert_eq!(find_marker("bvwbjplbgvbhsrlpgdmjqwftvncz", 14), Some(23));
        assert_eq!(find_marker("nppdvjthqldpwncqszvftbrmjlhg", 14), Some(23));
        assert_eq!(find_marker("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 14), Some(29));
        assert_eq!(find_marker("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 14), Some(26));
    }

    #[test]
    fn no_marker_in_short_stream() {
        assert_eq!(find_marker("abcabcabc", 14), None);
        assert_eq!(find_marker("aaa", 4), None);
    }
}
