//! Day 19: Not Enough Minerals

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 19, tags = ["2022", "search"])]
pub struct Solver;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

/// Cost of each robot in ore, clay and obsidian.
#[derive(Clone, Copy)]
pub struct Blueprint {
    id: u32,
    costs: [[u32; 3]; 4],
}

fn number_after<'a>(rest: &mut &'a str, prefix: &str) -> anyhow::Result<u32> {
    let start = rest
        .find(prefix)
        .ok_or_else(|| anyhow!("expected {:?}", prefix))?
        + prefix.len();
    let tail = &rest[start..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    let value = tail[..end].parse().with_context(|| prefix.to_string())?;
    *rest = &tail[end..];
    Ok(value)
}

fn parse_blueprint(line: &str) -> anyhow::Result<Blueprint> {
    let mut rest = line;
    let id = number_after(&mut rest, "Blueprint ")?;
    let mut costs = [[0u32; 3]; 4];
    costs[ORE][ORE] = number_after(&mut rest, "Each ore robot costs ")?;
    costs[CLAY][ORE] = number_after(&mut rest, "Each clay robot costs ")?;
    costs[OBSIDIAN][ORE] = number_after(&mut rest, "Each obsidian robot costs ")?;
    costs[OBSIDIAN][CLAY] = number_after(&mut rest, " ore and ")?;
    costs[GEODE][ORE] = number_after(&mut rest, "Each geode robot costs ")?;
    costs[GEODE][OBSIDIAN] = number_after(&mut rest, " ore and ")?;
    Ok(Blueprint { id, costs })
}

impl InputParser for Solver {
    type Shared<'a> = Vec<Blueprint>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_blueprint)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

struct Search {
    costs: [[u32; 3]; 4],
    // Building more robots of a kind than its largest per-minute cost can
    // never help.
    robot_caps: [u32; 3],
    best: u32,
}

impl Search {
    /// Branch on the next robot kind to build, fast-forwarding to the minute
    /// it becomes affordable.
    fn run(&mut self, time: u32, robots: [u32; 4], resources: [u32; 4]) {
        let idle_geodes = resources[GEODE] + robots[GEODE] * time;
        self.best = self.best.max(idle_geodes);
        // Even one new geode robot per minute cannot beat the record.
        if idle_geodes + time * time.saturating_sub(1) / 2 <= self.best {
            return;
        }

        for kind in (0..4).rev() {
            if kind < GEODE && robots[kind] >= self.robot_caps[kind] {
                continue;
            }
            let Some(wait) = (0..3)
                .map(|resource| {
                    let need = self.costs[kind][resource].saturating_sub(resources[resource]);
                    match (need, robots[resource]) {
                        (0, _) => Some(0),
                        (_, 0) => None,
                        (need, rate) => Some(need.div_ceil(rate)),
                    }
                })
                .try_fold(0u32, |acc, minutes| Some(acc.max(minutes?)))
            else {
                continue;
            };
            // The robot takes a minute to build after the wait.
            if wait + 1 >= time {
                continue;
            }

            let mut next_robots = robots;
            next_robots[kind] += 1;
            let mut next_resources = resources;
            for resource in 0..4 {
                next_resources[resource] += robots[resource] * (wait + 1);
            }
            for resource in 0..3 {
                next_resources[resource] -= self.costs[kind][resource];
            }
            self.run(time - wait - 1, next_robots, next_resources);
        }
    }
}

fn most_geodes(blueprint: &Blueprint, minutes: u32) -> u32 {
    let mut caps = [0u32; 3];
    for cost in blueprint.costs {
        for resource in 0..3 {
            caps[resource] = caps[resource].max(cost[resource]);
        }
    }
    let mut search = Search {
        costs: blueprint.costs,
        robot_caps: caps,
        best: 0,
    };
    search.run(minutes, [1, 0, 0, 0], [0; 4]);
    search.best
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|blueprint| blueprint.id * most_geodes(blueprint, 24))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .iter()
            .take(3)
            .map(|blueprint| most_geodes(blueprint, 32) as u64)
            .product();
        Ok(product.to_string())
    }
}
