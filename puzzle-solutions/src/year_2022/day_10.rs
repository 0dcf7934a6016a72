//! Day 10: Cathode-Ray Tube

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 10, tags = ["2022", "vm"])]
pub struct Solver;

pub enum Instruction {
    Noop,
    Addx(i64),
}

impl InputParser for Solver {
    type Shared<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| -> anyhow::Result<Instruction> {
                match line.split_once(' ') {
                    None if line == "noop" => Ok(Instruction::Noop),
                    Some(("addx", value)) => Ok(Instruction::Addx(
                        value.parse().with_context(|| format!("addx {value:?}"))?,
                    )),
                    _ => Err(anyhow!("unknown instruction {:?}", line)),
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Value of the X register during each cycle, starting at cycle 1.
fn register_trace(program: &[Instruction]) -> Vec<i64> {
    let mut x = 1;
    let mut trace = Vec::new();
    for instruction in program {
        match instruction {
            Instruction::Noop => trace.push(x),
            Instruction::Addx(value) => {
                trace.push(x);
                trace.push(x);
                x += value;
            }
        }
    }
    trace
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let trace = register_trace(shared);
        let total: i64 = (20..=220)
            .step_by(40)
            .map(|cycle: usize| cycle as i64 * trace.get(cycle - 1).copied().unwrap_or(1))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let trace = register_trace(shared);
        let mut screen = String::new();
        for row in 0..6 {
            if row > 0 {
                screen.push('\n');
            }
            for column in 0..40i64 {
                let x = trace.get(row * 40 + column as usize).copied().unwrap_or(1);
                screen.push(if (x - column).abs() <= 1 { '#' } else { '.' });
            }
        }
        Ok(screen)
    }
}
