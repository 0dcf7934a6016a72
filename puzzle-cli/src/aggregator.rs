//! In-order streaming of results that arrive from parallel workers.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, BTreeSet};

/// Output position of a result. Lexicographic field order gives the
/// year, then day, then part ordering the report uses.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Buffers out-of-order results and releases them once every earlier
/// position has been filled.
pub struct ResultAggregator {
    /// Positions announced up front that have not been emitted yet
    waiting: BTreeSet<ResultKey>,
    /// Arrived results held back behind an unfilled position
    buffered: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected: Vec<ResultKey>) -> Self {
        Self {
            waiting: expected.into_iter().collect(),
            buffered: BTreeMap::new(),
        }
    }

    /// Accept one result and return the prefix that is now ready, in order.
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.buffered.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(&next) = self.waiting.first() {
            match self.buffered.remove(&next) {
                Some(result) => {
                    self.waiting.remove(&next);
                    ready.push(result);
                }
                None => break,
            }
        }
        ready
    }

    /// Hand back whatever is still buffered, in output order. Called once
    /// the workers hang up, whether or not every position was filled.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.buffered).into_values().collect()
    }

    /// True once every announced position has been emitted.
    pub fn is_complete(&self) -> bool {
        self.waiting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{}_{}_{}", year, day, part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    #[test]
    fn in_order_results_stream_through() {
        let mut agg = ResultAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2)]);

        let ready = agg.add(make_result(2022, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2022, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn out_of_order_results_buffer_until_ready() {
        let mut agg =
            ResultAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2), key(2022, 2, 1)]);

        let ready = agg.add(make_result(2022, 1, 2));
        assert!(ready.is_empty()); // Waiting for part 1

        let ready = agg.add(make_result(2022, 2, 1));
        assert!(ready.is_empty()); // Still waiting for 2022/1/1

        let ready = agg.add(make_result(2022, 1, 1));
        assert_eq!(ready.len(), 3);
        assert_eq!(
            ready.iter().map(|r| (r.day, r.part)).collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn years_order_before_days() {
        let mut agg = ResultAggregator::new(vec![key(2021, 25, 1), key(2022, 1, 1)]);

        let ready = agg.add(make_result(2022, 1, 1));
        assert!(ready.is_empty());

        let ready = agg.add(make_result(2021, 25, 1));
        assert_eq!(ready.len(), 2);
        assert_eq!(ready[0].year, 2021);
        assert_eq!(ready[1].year, 2022);
    }

    #[test]
    fn drain_returns_stragglers_sorted() {
        let mut agg = ResultAggregator::new(vec![
            key(2022, 1, 1),
            key(2022, 1, 2),
            key(2022, 2, 1),
            key(2022, 2, 2),
        ]);

        agg.add(make_result(2022, 2, 2));
        agg.add(make_result(2022, 1, 2));
        agg.add(make_result(2022, 2, 1));

        let remaining = agg.drain();
        assert_eq!(
            remaining.iter().map(|r| (r.day, r.part)).collect::<Vec<_>>(),
            vec![(1, 2), (2, 1), (2, 2)]
        );
        assert!(!agg.is_complete());
    }
}
