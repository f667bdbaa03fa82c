//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, InputError};
use crate::inputs::InputStore;
use aoc_solver::{Answer, DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use tracing::{debug, info_span, warn};

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<Answer, ArcExecutorError>,
    /// Set on the first part solved from each parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Consecutive parts of one work item that read the same input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputGroup {
    pub path: Option<PathBuf>,
    pub parts: Vec<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone(), config.example),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_work_item(work, &tx, cfg).err())
                .reduce(ArcExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                let tx = &tx;
                self.thread_pool.install(|| {
                    by_year
                        .par_iter()
                        .flat_map_iter(move |items| {
                            items
                                .iter()
                                .filter_map(move |work| run_work_item(work, tx, cfg).err())
                        })
                        .reduce_with(ArcExecutorError::combine)
                        .map_or(Ok(()), Err)
                })
            }
            // Part additionally fans out inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .filter_map(|work| run_work_item(work, &tx, cfg).err())
                    .reduce_with(ArcExecutorError::combine)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Parts of a solver selected by the part filter
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0, // Empty range - intentional
        None => 1..=max_parts,
    }
}

/// Split a work item's parts into runs that share an input file
pub fn input_groups(work: &WorkItem, inputs: &InputStore) -> Vec<InputGroup> {
    work.parts
        .clone()
        .map(|part| (inputs.resolve(work.year, work.day, part), part))
        .chunk_by(|(path, _)| path.clone())
        .into_iter()
        .map(|(path, parts)| InputGroup {
            path,
            parts: parts.map(|(_, part)| part).collect(),
        })
        .collect()
}

fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let span = info_span!("solver", year = work.year, day = work.day);
    let _entered = span.enter();

    let groups = input_groups(work, &cfg.inputs);
    match cfg.parallelize_by {
        ParallelizeBy::Part => groups
            .par_iter()
            .filter_map(|group| {
                let _entered = span.enter();
                run_group(work, group, tx, cfg).err()
            })
            .reduce_with(ArcExecutorError::combine)
            .map_or(Ok(()), Err),
        _ => groups
            .iter()
            .filter_map(|group| run_group(work, group, tx, cfg).err())
            .reduce(ArcExecutorError::combine)
            .map_or(Ok(()), Err),
    }
}

/// Parse one input and solve every part of the group from it
///
/// Input and parse failures are reported as failed results for each part
/// rather than as an error; only a closed channel aborts the run.
fn run_group(
    work: &WorkItem,
    group: &InputGroup,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let send = |result: SolverResult| {
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
    };
    let fail_all = |error: ArcExecutorError| {
        group
            .parts
            .iter()
            .try_for_each(|&part| send(failed_result(year, day, part, error.clone())))
    };

    let input = match load_input(work, group, &cfg.inputs) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "input unavailable");
            return fail_all(ExecutorError::from(e).into());
        }
    };

    let solver = match cfg.registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => return fail_all(ExecutorError::from(e).into()),
    };
    let parse_duration = solver.parse_duration();
    debug!(
        parse_us = parse_duration.num_microseconds(),
        parts = ?group.parts,
        "input parsed"
    );

    let with_parse = |idx: usize| (idx == 0).then_some(parse_duration);
    match cfg.parallelize_by {
        ParallelizeBy::Part => group
            .parts
            .par_iter()
            .enumerate()
            .try_for_each(|(idx, &part)| send(solve_part(&*solver, part, with_parse(idx)))),
        _ => group
            .parts
            .iter()
            .enumerate()
            .try_for_each(|(idx, &part)| send(solve_part(&*solver, part, with_parse(idx)))),
    }
}

fn load_input(
    work: &WorkItem,
    group: &InputGroup,
    inputs: &InputStore,
) -> Result<String, InputError> {
    let path = match &group.path {
        Some(path) => path.clone(),
        // first part of the group is as good as any for reporting what was tried
        None => inputs.locate(work.year, work.day, group.parts[0])?,
    };
    debug!(path = %path.display(), "reading input");
    inputs.read(path)
}

fn solve_part(
    solver: &dyn DynSolver,
    part: u8,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => (Ok(result.answer), result.duration()),
        Err(e) => (
            Err(ExecutorError::from(SolverError::from(e)).into()),
            TimeDelta::zero(),
        ),
    };
    debug!(part, solve_us = solve_duration.num_microseconds(), "part solved");

    SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

fn failed_result(year: u16, day: u8, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}
