//! Day 25: Full of Hot Air

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 25, parts = 1, tags = ["2022", "numbers"])]
pub struct Solver;

fn from_snafu(text: &str) -> Result<i64, ParseError> {
    text.chars().try_fold(0i64, |total, digit| {
        let value = match digit {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "invalid SNAFU digit {digit:?} in {text:?}"
                )));
            }
        };
        Ok(total * 5 + value)
    })
}

fn to_snafu(mut value: i64) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value != 0 {
        let remainder = (value + 2).rem_euclid(5) - 2;
        digits.push(match remainder {
            2 => '2',
            1 => '1',
            0 => '0',
            -1 => '-',
            _ => '=',
        });
        value = (value - remainder) / 5;
    }
    digits.iter().rev().collect()
}

impl InputParser for Solver {
    type Shared<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(from_snafu)
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(to_snafu(shared.iter().sum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "2=-1=0"
        );
    }

    #[test]
    fn known_conversions() {
        assert_eq!(from_snafu("1=-0-2").unwrap(), 1747);
        assert_eq!(from_snafu("2=-01").unwrap(), 976);
        assert_eq!(to_snafu(2022), "1=11-2");
        assert_eq!(to_snafu(314159265), "1121-1110-1=0");
        assert_eq!(to_snafu(0), "0");
    }

    #[test]
    fn invalid_digit_rejected() {
        assert!(matches!(from_snafu("12a"), Err(ParseError::InvalidFormat(_))));
    }

    proptest! {
        #[test]
        fn snafu_digits_round_trip(value in 0i64..=1_000_000_000_000) {
            prop_assert_eq!(from_snafu(&to_snafu(value)).unwrap(), value);
        }
    }
}
