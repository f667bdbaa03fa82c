//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(_), _) => println!("{}", self.format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", self.format_result(result)),
        }
    }

    /// `2023/05 Part 1: 35 (parse: 12µs, solve: 3µs)`, or just `35` when quiet
    pub fn format_result(&self, result: &SolverResult) -> String {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match &result.answer {
            Ok(answer) if self.quiet => answer.to_string(),
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            Err(e) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::new(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.successes, summary.failures
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if let Some(speedup) = summary.speedup(elapsed_time) {
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Totals over a finished run; timings only count successful parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub successes: usize,
    pub failures: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn new(results: &[SolverResult]) -> Self {
        let solved = || results.iter().filter(|r| r.answer.is_ok());
        let successes = solved().count();

        Self {
            successes,
            failures: results.len() - successes,
            parse_time: solved().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved().map(|r| r.solve_duration).sum(),
        }
    }

    /// Total compute time over wall-clock time
    pub fn speedup(&self, elapsed: Duration) -> Option<f64> {
        if elapsed.is_zero() {
            return None;
        }
        let compute = self.parse_time + self.solve_time;
        let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        Some(compute_secs / elapsed.as_secs_f64())
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Wall-clock time comes from `Instant`, hence `std::time::Duration`
fn format_std_duration(d: Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}
