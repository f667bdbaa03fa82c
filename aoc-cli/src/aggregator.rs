//! Result aggregator for ordering parallel solver results
//!
//! Results arrive in whatever order the thread pool finishes them. Each one is
//! parked until every key before it has been released, so output streams in
//! (year, day, part) order.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, BTreeSet};

/// Key for ordering results (year, day, part) - ordered ascending
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

impl ResultKey {
    /// One key per part of each work item
    pub fn expected(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Keys not yet released; the first one gates output
    expected: BTreeSet<ResultKey>,
    /// Received results waiting for their turn
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.first()
            && let Some(result) = self.pending.remove(next)
        {
            self.expected.pop_first();
            ready.push(result);
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<SolverResult> {
        for key in self.pending.keys() {
            self.expected.remove(key);
        }
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(i64::from(year) * 100 + i64::from(day) * 10 + i64::from(part)),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        let ready = agg.add(make_result(2023, 1, 1));
        assert_eq!(keys_of(&ready), vec![key(2023, 1, 1)]);

        let ready = agg.add(make_result(2023, 1, 2));
        assert_eq!(keys_of(&ready), vec![key(2023, 1, 2)]);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg =
            ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2), key(2023, 2, 1)]);

        // part 2 before part 1
        assert!(agg.add(make_result(2023, 1, 2)).is_empty());
        assert!(agg.add(make_result(2023, 2, 1)).is_empty());

        let ready = agg.add(make_result(2023, 1, 1));
        assert_eq!(
            keys_of(&ready),
            vec![key(2023, 1, 1), key(2023, 1, 2), key(2023, 2, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        agg.add(make_result(2023, 1, 2));

        let remaining = agg.drain();
        assert_eq!(keys_of(&remaining), vec![key(2023, 1, 2)]);
        assert!(!agg.is_complete());
    }

    #[test]
    fn test_expected_keys_from_work_items() {
        let items = vec![
            WorkItem { year: 2023, day: 5, parts: 1..=2 },
            WorkItem { year: 2023, day: 6, parts: 2..=2 },
        ];
        assert_eq!(
            ResultKey::expected(&items),
            vec![key(2023, 5, 1), key(2023, 5, 2), key(2023, 6, 2)]
        );
    }

    proptest! {
        /// Any arrival order releases every result exactly once, sorted
        #[test]
        fn prop_any_arrival_order_is_released_sorted(
            order in Just((1u8..=6).flat_map(|day| [(day, 1u8), (day, 2u8)]).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(order.iter().map(|&(day, part)| key(2023, day, part)));
            let mut released = Vec::new();
            for &(day, part) in &order {
                released.extend(keys_of(&agg.add(make_result(2023, day, part))));
            }

            let mut sorted = released.clone();
            sorted.sort();
            prop_assert_eq!(released.len(), 12);
            prop_assert_eq!(released, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
