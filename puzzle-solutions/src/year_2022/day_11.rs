//! Day 11: Monkey in the Middle

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 11, tags = ["2022", "simulation"])]
pub struct Solver;

#[derive(Clone)]
pub enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(&self, old: u64) -> u64 {
        match self {
            Operation::Add(value) => old + value,
            Operation::Multiply(value) => old * value,
            Operation::Square => old * old,
        }
    }
}

#[derive(Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn field<'a>(line: Option<&'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    line.and_then(|line| line.trim_start().strip_prefix(prefix))
        .ok_or_else(|| anyhow!("expected line starting with {:?}", prefix))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines();
    lines.next().ok_or_else(|| anyhow!("empty monkey block"))?;

    let items = field(lines.next(), "Starting items: ")?
        .split(", ")
        .map(|item| item.parse().context("starting item"))
        .collect::<anyhow::Result<Vec<u64>>>()?;

    let operation = match field(lines.next(), "Operation: new = old ")? {
        "* old" => Operation::Square,
        expr => match expr.split_once(' ') {
            Some(("+", value)) => Operation::Add(value.parse().context("operand")?),
            Some(("*", value)) => Operation::Multiply(value.parse().context("operand")?),
            _ => return Err(anyhow!("unknown operation {:?}", expr)),
        },
    };

    Ok(Monkey {
        items,
        operation,
        divisor: field(lines.next(), "Test: divisible by ")?.parse()?,
        if_true: field(lines.next(), "If true: throw to monkey ")?.parse()?,
        if_false: field(lines.next(), "If false: throw to monkey ")?.parse()?,
    })
}

impl InputParser for Solver {
    type Shared<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(parse_monkey)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn monkey_business(
    monkeys: &[Monkey],
    rounds: usize,
    relief: impl Fn(u64) -> u64,
) -> Result<u64, SolveError> {
    let mut monkeys = monkeys.to_vec();
    let mut inspections = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for index in 0..monkeys.len() {
            let thrown: Vec<(usize, u64)> = {
                let monkey = &mut monkeys[index];
                inspections[index] += monkey.items.len() as u64;
                monkey
                    .items
                    .drain(..)
                    .map(|item| {
                        let worry = relief(monkey.operation.apply(item));
                        let target = if worry % monkey.divisor == 0 {
                            monkey.if_true
                        } else {
                            monkey.if_false
                        };
                        (target, worry)
                    })
                    .collect()
            };
            for (target, worry) in thrown {
                monkeys
                    .get_mut(target)
                    .ok_or_else(|| SolveError::Failed("throw target out of range".into()))?
                    .items
                    .push(worry);
            }
        }
    }

    inspections.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspections[0] * inspections[1])
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, |worry| worry / 3)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let modulus: u64 = shared.iter().map(|monkey| monkey.divisor).product();
        Ok(monkey_business(shared, 10_000, move |worry| worry % modulus)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "10605"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "2713310158"
        );
    }

    #[test]
    fn square_operation_parsed() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(shared[2].operation, Operation::Square));
        assert_eq!(shared[2].operation.apply(6), 36);
    }
}
