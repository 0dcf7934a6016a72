//! Day 5: Supply Stacks

use anyhow::{Context, anyhow, ensure};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

/// `move n from a to b`, with 0-based stack indices
#[derive(Debug, Clone, Copy)]
pub struct Step {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct SharedData {
    stacks: Vec<Vec<char>>,
    steps: Vec<Step>,
}

#[derive(Solution)]
#[solution(year = 2022, day = 5, tags = ["2022", "simulation"])]
pub struct Solver;

impl InputParser for Solver {
    type Shared<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let parse = || -> anyhow::Result<SharedData> {
            let (drawing, moves) = input
                .split_once("\n\n")
                .ok_or_else(|| anyhow!("expected stack drawing and move list"))?;

            // Bottom-up, skipping the stack number line. Each stack is 3
            // characters wide with one space between stacks.
            let mut lines = drawing.lines().rev();
            let label_line = lines.next().ok_or_else(|| anyhow!("empty drawing"))?;
            let stack_count = (label_line.len() + 1) / 4;
            ensure!(stack_count > 0, "no stacks in drawing");

            let mut stacks = vec![Vec::new(); stack_count];
            for line in lines {
                let chars: Vec<char> = line.chars().collect();
                for (pos, stack) in stacks.iter_mut().enumerate() {
                    match chars.get(4 * pos + 1) {
                        Some(&c) if c != ' ' => stack.push(c),
                        _ => {}
                    }
                }
            }

            let steps = moves
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| -> anyhow::Result<Step> {
                    let numbers: Vec<usize> = line
                        .split_whitespace()
                        .filter_map(|token| token.parse().ok())
                        .collect();
                    ensure!(numbers.len() == 3, "bad step {:?}", line);
                    let (count, from, to) = (numbers[0], numbers[1], numbers[2]);
                    ensure!(
                        (1..=stack_count).contains(&from) && (1..=stack_count).contains(&to),
                        "step {:?} references missing stack",
                        line
                    );
                    Ok(Step {
                        count,
                        from: from - 1,
                        to: to - 1,
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .context("parsing move list")?;

            Ok(SharedData { stacks, steps })
        };
        parse().map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn stack_tops(stacks: &[Vec<char>]) -> String {
    stacks
        .iter()
        .map(|stack| stack.last().copied().unwrap_or('_'))
        .collect()
}

fn run<F>(shared: &SharedData, mut apply: F) -> Result<String, SolveError>
where
    F: FnMut(&mut Vec<Vec<char>>, Step) -> Option<()>,
{
    let mut stacks = shared.stacks.clone();
    for &step in &shared.steps {
        apply(&mut stacks, step)
            .ok_or_else(|| SolveError::Failed("step moves more crates than available".into()))?;
    }
    Ok(stack_tops(&stacks))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        // One crate at a time, reversing the order of each batch
        run(shared, |stacks, step| {
            for _ in 0..step.count {
                let top = stacks[step.from].pop()?;
                stacks[step.to].push(top);
            }
            Some(())
        })
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        // Whole batch at once, preserving order
        run(shared, |stacks, step| {
            let from_len = stacks[step.from].len();
            let split = from_len.checked_sub(step.count)?;
            let batch = stacks[step.from].split_off(split);
            stacks[step.to].extend(batch);
            Some(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\nmove 3 from 1 to 3\nmove 2 from 2 to 1\nmove 1 from 1 to 2";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "CMZ");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "MCD");
    }

    #[test]
    fn parses_stack_drawing() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.stacks, vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
        assert_eq!(shared.steps.len(), 4);
    }
}
