//! Day 16: Proboscidea Volcanium

use anyhow::{Context, anyhow};
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;
use std::collections::HashMap;

#[derive(Solution)]
#[solution(year = 2022, day = 16, tags = ["2022", "search"])]
pub struct Solver;

/// Valve graph reduced to the start and the valves with nonzero flow, with
/// all-pairs travel times between them.
pub struct Network {
    flows: Vec<u64>,
    travel: Vec<Vec<u32>>,
    start: usize,
}

struct RawValve<'a> {
    flow: u64,
    tunnels: Vec<&'a str>,
}

fn parse_valve(line: &str) -> anyhow::Result<(&str, RawValve<'_>)> {
    let rest = line
        .strip_prefix("Valve ")
        .ok_or_else(|| anyhow!("bad valve line {:?}", line))?;
    let (name, rest) = rest
        .split_once(" has flow rate=")
        .ok_or_else(|| anyhow!("missing flow rate in {:?}", line))?;
    let (flow, tunnels) = rest
        .split_once("; tunnel leads to valve ")
        .or_else(|| rest.split_once("; tunnels lead to valves "))
        .ok_or_else(|| anyhow!("missing tunnels in {:?}", line))?;
    Ok((
        name,
        RawValve {
            flow: flow.parse().context("flow rate")?,
            tunnels: tunnels.split(", ").collect(),
        },
    ))
}

impl InputParser for Solver {
    type Shared<'a> = Network;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let valves: HashMap<&str, RawValve<'_>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_valve)
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let mut names: Vec<&str> = valves.keys().copied().collect();
        names.sort_unstable();
        let index: HashMap<&str, usize> =
            names.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        // Floyd-Warshall over the full tunnel graph.
        let n = names.len();
        let mut dist = vec![vec![u32::MAX / 2; n]; n];
        for (i, &name) in names.iter().enumerate() {
            dist[i][i] = 0;
            for tunnel in &valves[name].tunnels {
                let j = *index
                    .get(tunnel)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unknown valve {tunnel}")))?;
                dist[i][j] = 1;
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                }
            }
        }

        let start = *index
            .get("AA")
            .ok_or_else(|| ParseError::MissingData("no valve AA".into()))?;
        let mut keep: Vec<usize> = (0..n).filter(|&i| valves[names[i]].flow > 0).collect();
        if keep.len() > 62 {
            return Err(ParseError::InvalidFormat(
                "too many working valves".into(),
            ));
        }
        keep.push(start);

        Ok(Network {
            flows: keep[..keep.len() - 1]
                .iter()
                .map(|&i| valves[names[i]].flow)
                .collect(),
            travel: keep
                .iter()
                .map(|&i| keep[..keep.len() - 1].iter().map(|&j| dist[i][j]).collect())
                .collect(),
            start: keep.len() - 1,
        })
    }
}

/// For every subset of valves, the most pressure one actor can release
/// within the time budget, found by depth-first search with memoization on
/// (position, minutes left, opened set).
fn best_per_subset(network: &Network, minutes: u32) -> HashMap<u64, u64> {
    fn walk(
        network: &Network,
        at: usize,
        left: u32,
        opened: u64,
        released: u64,
        best: &mut HashMap<u64, u64>,
    ) {
        let entry = best.entry(opened).or_insert(0);
        *entry = (*entry).max(released);
        for next in 0..network.flows.len() {
            let bit = 1 << next;
            let cost = network.travel[at][next] + 1;
            if opened & bit == 0 && cost < left {
                let remaining = left - cost;
                walk(
                    network,
                    next,
                    remaining,
                    opened | bit,
                    released + network.flows[next] * remaining as u64,
                    best,
                );
            }
        }
    }

    let mut best = HashMap::new();
    walk(network, network.start, minutes, 0, 0, &mut best);
    best
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let best = best_per_subset(shared, 30)
            .into_values()
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let table = best_per_subset(shared, 26);
        let mut entries: Vec<(u64, u64)> = table.into_iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        let mut best = 0;
        for (i, &(mine, my_release)) in entries.iter().enumerate() {
            if my_release * 2 <= best {
                break;
            }
            for &(theirs, their_release) in &entries[i..] {
                let total = my_release + their_release;
                if total <= best {
                    break;
                }
                if mine & theirs == 0 {
                    best = total;
                }
            }
        }
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "1651"
        );
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "1707"
        );
    }

    #[test]
    fn graph_is_reduced_to_working_valves() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.flows.len(), 6);
        assert_eq!(shared.travel.len(), 7);
    }

    #[test]
    fn missing_start_valve_rejected() {
        let result = Solver::parse("Valve BB has flow rate=13; tunnel leads to valve BB");
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }
}
