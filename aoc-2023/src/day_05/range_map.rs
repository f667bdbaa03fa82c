//! Piecewise offset mapping over closed integer intervals
//!
//! A [`RangeTable`] shifts values that fall inside one of its intervals and
//! passes every other value through unchanged. A [`Pipeline`] chains tables.
//! Between interval boundaries each table is `x + c`, so the composed
//! mapping is `x + c` between the boundaries of every stage pulled back to
//! the input domain; minimizing over huge input ranges only needs those
//! boundary points.

use crate::utils::parse::numbers;
use anyhow::{anyhow, bail, ensure};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Closed interval `[start, end]` whose values get `offset` added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: i64,
    end: i64,
    offset: i64,
}

impl Interval {
    /// `None` when `start > end`
    pub fn new(start: i64, end: i64, offset: i64) -> Option<Self> {
        (start <= end).then_some(Self { start, end, offset })
    }

    /// Interval covering `length` values from `source_start`, sending them
    /// to `destination_start` onwards
    pub fn from_mapping(
        destination_start: i64,
        source_start: i64,
        length: i64,
    ) -> anyhow::Result<Self> {
        ensure!(length > 0, "range length must be positive, got {length}");

        let end = source_start
            .checked_add(length - 1)
            .ok_or_else(|| anyhow!("source range {source_start} + {length} overflows"))?;
        let offset = destination_start
            .checked_sub(source_start)
            .ok_or_else(|| anyhow!("offset {destination_start} - {source_start} overflows"))?;
        // the image must be addressable too, or `inverse` would overflow
        destination_start
            .checked_add(length - 1)
            .ok_or_else(|| anyhow!("destination range {destination_start} + {length} overflows"))?;

        Ok(Self {
            start: source_start,
            end,
            offset,
        })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    pub fn apply(&self, value: i64) -> i64 {
        value + self.offset
    }

    /// The interval's image, mapping back by the negated offset
    pub fn inverse(&self) -> Self {
        Self {
            start: self.start + self.offset,
            end: self.end + self.offset,
            offset: -self.offset,
        }
    }
}

/// Parses `destination_start source_start length`
impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = numbers::<i64>(s)?;
        let &[destination_start, source_start, length] = values.as_slice() else {
            bail!(
                "expected 3 numbers (destination start, source start, length), found {}",
                values.len()
            );
        };
        Self::from_mapping(destination_start, source_start, length)
    }
}

/// One stage of a pipeline
///
/// Lookup is first match in table order; values outside every interval map
/// to themselves. Overlapping intervals are not rejected, the earlier one
/// simply wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    intervals: Vec<Interval>,
}

impl RangeTable {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn map(&self, value: i64) -> i64 {
        self.intervals
            .iter()
            .find(|interval| interval.contains(value))
            .map_or(value, |interval| interval.apply(value))
    }

    /// Table mapping destination values back to their source values
    pub fn inverse(&self) -> Self {
        self.intervals.iter().map(Interval::inverse).collect()
    }

    /// Points where the mapping can change: every `start` and `end`, and the
    /// first value after each `end` where the identity fallback resumes
    pub fn critical_points(&self) -> impl Iterator<Item = i64> + '_ {
        self.intervals.iter().flat_map(|interval| {
            [Some(interval.start), Some(interval.end), interval.end.checked_add(1)]
                .into_iter()
                .flatten()
        })
    }

    /// Every `x` with `self.map(x) == value`
    ///
    /// A value can be reached through several intervals and through the
    /// identity fallback at once, so every inverted interval containing it
    /// is tried, plus `value` itself; only exact sources survive. May yield
    /// duplicates.
    pub fn preimages(&self, value: i64) -> impl Iterator<Item = i64> + '_ {
        self.intervals
            .iter()
            .map(Interval::inverse)
            .filter(move |inverse| inverse.contains(value))
            .map(move |inverse| inverse.apply(value))
            .chain(std::iter::once(value))
            .filter(move |&source| self.map(source) == value)
    }
}

impl FromIterator<Interval> for RangeTable {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Range tables applied left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    tables: Vec<RangeTable>,
}

impl Pipeline {
    pub fn new(tables: Vec<RangeTable>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[RangeTable] {
        &self.tables
    }

    pub fn map(&self, value: i64) -> i64 {
        self.tables.iter().fold(value, |value, table| table.map(value))
    }

    /// Inverted tables in reverse order
    pub fn inverse(&self) -> Self {
        self.tables.iter().rev().map(RangeTable::inverse).collect()
    }

    /// Every input `x` for which the tables before `stage` produce `value`
    pub fn pull_back(&self, stage: usize, value: i64) -> BTreeSet<i64> {
        self.tables[..stage]
            .iter()
            .rev()
            .fold(BTreeSet::from([value]), |values, table| {
                values
                    .iter()
                    .flat_map(|&value| table.preimages(value))
                    .collect()
            })
    }

    /// Inputs at which some stage sits on one of its critical points
    pub fn critical_inputs(&self) -> BTreeSet<i64> {
        self.tables
            .iter()
            .enumerate()
            .flat_map(|(stage, table)| {
                table
                    .critical_points()
                    .flat_map(move |point| self.pull_back(stage, point))
            })
            .collect()
    }

    /// Smallest mapped value over the union of `ranges`, or `None` if every
    /// range is empty
    ///
    /// Only each range's start and the critical inputs inside it are
    /// evaluated; the mapping is increasing between consecutive candidates.
    pub fn min_over(&self, ranges: &[RangeInclusive<i64>]) -> Option<i64> {
        let critical = self.critical_inputs();

        ranges
            .iter()
            .filter(|range| !range.is_empty())
            .flat_map(|range| {
                std::iter::once(*range.start()).chain(critical.range(range.clone()).copied())
            })
            .map(|input| self.map(input))
            .min()
    }
}

impl FromIterator<RangeTable> for Pipeline {
    fn from_iter<I: IntoIterator<Item = RangeTable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
