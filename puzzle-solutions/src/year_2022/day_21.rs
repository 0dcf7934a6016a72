//! Day 21: Monkey Math

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashMap;

#[derive(Solution)]
#[solution(year = 2022, day = 21, tags = ["2022", "expression"])]
pub struct Solver;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

pub enum Job<'a> {
    Number(i64),
    Operation(&'a str, Op, &'a str),
}

impl InputParser for Solver {
    type Shared<'a> = HashMap<&'a str, Job<'a>>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<(&str, Job<'_>)> {
                let (name, job) = line
                    .split_once(": ")
                    .ok_or_else(|| anyhow!("bad job line {:?}", line))?;
                let mut words = job.split(' ');
                let job = match (words.next(), words.next(), words.next()) {
                    (Some(number), None, _) => Job::Number(number.parse()?),
                    (Some(left), Some(op), Some(right)) => {
                        let op = match op {
                            "+" => Op::Add,
                            "-" => Op::Sub,
                            "*" => Op::Mul,
                            "/" => Op::Div,
                            _ => return Err(anyhow!("unknown operator {:?}", op)),
                        };
                        Job::Operation(left, op, right)
                    }
                    _ => return Err(anyhow!("bad job {:?}", job)),
                };
                Ok((name, job))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn apply(op: Op, left: i64, right: i64) -> Result<i64, SolveError> {
    match op {
        Op::Add => Ok(left + right),
        Op::Sub => Ok(left - right),
        Op::Mul => Ok(left * right),
        Op::Div if right != 0 => Ok(left / right),
        Op::Div => Err(SolveError::Failed("division by zero".into())),
    }
}

fn evaluate(jobs: &HashMap<&str, Job<'_>>, name: &str) -> Result<i64, SolveError> {
    match jobs
        .get(name)
        .ok_or_else(|| SolveError::Failed(format!("no monkey named {name:?}").into()))?
    {
        Job::Number(value) => Ok(*value),
        Job::Operation(left, op, right) => {
            apply(*op, evaluate(jobs, left)?, evaluate(jobs, right)?)
        }
    }
}

fn depends_on_humn(jobs: &HashMap<&str, Job<'_>>, name: &str) -> bool {
    if name == "humn" {
        return true;
    }
    match jobs.get(name) {
        Some(Job::Operation(left, _, right)) => {
            depends_on_humn(jobs, left) || depends_on_humn(jobs, right)
        }
        _ => false,
    }
}

/// Walk down the humn-dependent side of the tree, inverting each operation
/// against the known value of the other side.
fn solve_for_humn(
    jobs: &HashMap<&str, Job<'_>>,
    name: &str,
    target: i64,
) -> Result<i64, SolveError> {
    if name == "humn" {
        return Ok(target);
    }
    let Some(Job::Operation(left, op, right)) = jobs.get(name) else {
        return Err(SolveError::Failed(
            format!("cannot invert through {name:?}").into(),
        ));
    };
    if depends_on_humn(jobs, left) {
        let known = evaluate(jobs, right)?;
        let next = match op {
            Op::Add => target - known,
            Op::Sub => target + known,
            Op::Mul if known != 0 => target / known,
            Op::Div => target * known,
            Op::Mul => return Err(SolveError::Failed("cannot divide by zero".into())),
        };
        solve_for_humn(jobs, left, next)
    } else {
        let known = evaluate(jobs, left)?;
        let next = match op {
            Op::Add => target - known,
            Op::Sub => known - target,
            Op::Mul if known != 0 => target / known,
            Op::Div if target != 0 => known / target,
            _ => return Err(SolveError::Failed("cannot divide by zero".into())),
        };
        solve_for_humn(jobs, right, next)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(evaluate(shared, "root")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let Some(Job::Operation(left, _, right)) = shared.get("root") else {
            return Err(SolveError::Failed("root does not compare two sides".into()));
        };
        let (unknown, known) = if depends_on_humn(shared, left) {
            (left, right)
        } else {
            (right, left)
        };
        let target = evaluate(shared, known)?;
        Ok(solve_for_humn(shared, unknown, target)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
lgvd: ljgn * ptdq
pppw: cczh / lfqf
drzm: hmdt - zczc
hmdt: 32";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "152"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "301"
        );
    }

    #[test]
    fn subtraction_inverts_on_both_sides() {
        let mut jobs = Solver::parse("root: a + b\na: c - humn\nc: 10\nb: 3\nhumn: 0").unwrap();
        // 10 - humn = 3
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut jobs).unwrap(), "7");
    }

    #[test]
    fn missing_monkey_is_an_error() {
        let mut jobs = Solver::parse("root: a + b\na: 1").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut jobs),
            Err(SolveError::Failed(_))
        ));
    }
}
