//! Day 15: Beacon Exclusion Zone

use anyhow::{Context, anyhow};
use itertools::Itertools;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_derive::Solution;

#[derive(Solution)]
#[solution(year = 2022, day = 15, tags = ["2022", "geometry"])]
pub struct Solver;

#[derive(Clone, Copy)]
pub struct Sensor {
    at: (i64, i64),
    beacon: (i64, i64),
    radius: i64,
}

fn parse_coordinate(text: &str, prefix: &str) -> anyhow::Result<i64> {
    text.strip_prefix(prefix)
        .ok_or_else(|| anyhow!("expected {:?} before {:?}", prefix, text))?
        .parse()
        .with_context(|| format!("coordinate in {text:?}"))
}

fn parse_sensor(line: &str) -> anyhow::Result<Sensor> {
    let (sensor, beacon) = line
        .strip_prefix("Sensor at ")
        .and_then(|rest| rest.split_once(": closest beacon is at "))
        .ok_or_else(|| anyhow!("bad report {:?}", line))?;
    let (sx, sy) = sensor.split_once(", ").ok_or_else(|| anyhow!("bad point"))?;
    let (bx, by) = beacon.split_once(", ").ok_or_else(|| anyhow!("bad point"))?;
    let at = (parse_coordinate(sx, "x=")?, parse_coordinate(sy, "y=")?);
    let beacon = (parse_coordinate(bx, "x=")?, parse_coordinate(by, "y=")?);
    Ok(Sensor {
        at,
        beacon,
        radius: (at.0 - beacon.0).abs() + (at.1 - beacon.1).abs(),
    })
}

impl InputParser for Solver {
    type Shared<'a> = Vec<Sensor>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_sensor)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Sample inputs use row 10 and a 0..=20 search square; real reports carry
/// more than 20 sensors and use the large scale.
fn scale(sensors: &[Sensor]) -> (i64, i64) {
    if sensors.len() > 20 {
        (2_000_000, 4_000_000)
    } else {
        (10, 20)
    }
}

fn covered_in_row(sensors: &[Sensor], row: i64) -> u64 {
    let mut spans: Vec<(i64, i64)> = sensors
        .iter()
        .filter_map(|sensor| {
            let reach = sensor.radius - (sensor.at.1 - row).abs();
            (reach >= 0).then(|| (sensor.at.0 - reach, sensor.at.0 + reach))
        })
        .collect();
    spans.sort_unstable();

    let mut covered = 0u64;
    let mut high = i64::MIN;
    for (start, end) in spans {
        let start = start.max(high + 1);
        if end >= start {
            covered += (end - start + 1) as u64;
            high = end;
        }
        high = high.max(end);
    }

    let beacons_in_row = sensors
        .iter()
        .map(|sensor| sensor.beacon)
        .filter(|&(_, y)| y == row)
        .unique()
        .count() as u64;
    covered - beacons_in_row
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let (row, _) = scale(shared);
        Ok(covered_in_row(shared, row).to_string())
    }
}

/// The lone uncovered point sits just outside two sensors, on the crossing
/// of an ascending edge (y = x + a) and a descending edge (y = -x + b).
fn find_beacon(sensors: &[Sensor], limit: i64) -> Option<(i64, i64)> {
    let mut ascending = Vec::new();
    let mut descending = Vec::new();
    for sensor in sensors {
        let (x, y) = sensor.at;
        let outside = sensor.radius + 1;
        ascending.push(y - x + outside);
        ascending.push(y - x - outside);
        descending.push(y + x + outside);
        descending.push(y + x - outside);
    }

    for (&a, &b) in ascending.iter().cartesian_product(&descending) {
        if (b - a) % 2 != 0 {
            continue;
        }
        let (x, y) = ((b - a) / 2, (a + b) / 2);
        if x < 0 || y < 0 || x > limit || y > limit {
            continue;
        }
        if sensors
            .iter()
            .all(|s| (s.at.0 - x).abs() + (s.at.1 - y).abs() > s.radius)
        {
            return Some((x, y));
        }
    }
    None
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let (_, limit) = scale(shared);
        let (x, y) = find_beacon(shared, limit)
            .ok_or_else(|| SolveError::Failed("no uncovered position in range".into()))?;
        Ok((x * 4_000_000 + y).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn part_one_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "26");
    }

    #[test]
    fn part_two_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "56000011"
        );
    }

    #[test]
    fn scale_follows_sensor_count_not_coordinates() {
        let far = format!(
            "{EXAMPLE}\nSensor at x=150, y=100: closest beacon is at x=150, y=101"
        );
        let mut shared = Solver::parse(&far).unwrap();
        assert_eq!(scale(&shared), (10, 20));
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "26");
    }

    #[test]
    fn beacon_location() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(find_beacon(&shared, 20), Some((14, 11)));
    }

    #[test]
    fn negative_coordinates_parse() {
        let sensor =
            parse_sensor("Sensor at x=-3, y=5: closest beacon is at x=1, y=-2").unwrap();
        assert_eq!(sensor.at, (-3, 5));
        assert_eq!(sensor.radius, 11);
    }
}
