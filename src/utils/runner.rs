//! Bench runner: time one parser over a token set.

use std::fmt;
use std::hint::black_box;

use crate::error::BenchError;
use crate::token::{Classification, PaddedToken, TokenSet};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::timer::Clock;

/// Outcome of one timed run of one variant.
#[derive(Clone, Debug, PartialEq)]
pub struct RunStats {
    pub name: &'static str,
    /// Wall time of the whole loop in seconds
    pub elapsed: f64,
    /// Number of parser calls
    pub runs: usize,
    pub true_count: usize,
    pub error_count: usize,
}

impl RunStats {
    /// False results are not counted directly, they are the remainder.
    pub fn false_count(&self) -> usize {
        self.runs - self.true_count - self.error_count
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.6}, True: {}, Error: {}",
            self.name, self.elapsed, self.true_count, self.error_count
        )
    }
}

/// Call `parser` `runs` times, cycling through `tokens`, and time the loop.
///
/// Token and result pass through `black_box` so the loop is neither hoisted
/// nor removed. The thread is pinned to its current core for the duration.
pub fn run_strategy<C, F>(
    name: &'static str,
    parser: F,
    tokens: &TokenSet,
    runs: usize,
    clock: &C,
) -> Result<RunStats, BenchError>
where
    C: Clock + ?Sized,
    F: Fn(Option<&PaddedToken>) -> Classification,
{
    if tokens.is_empty() {
        return Err(BenchError::EmptyTokenSet);
    }

    let _pin = CpuPinGuard::new();

    let mut true_count = 0usize;
    let mut error_count = 0usize;

    let time_before = clock.now();
    for i in 0..runs {
        let token = black_box(tokens.get_wrapped(i));
        let result = black_box(parser(token));
        true_count += (result == Classification::MatchTrue) as usize;
        error_count += (result == Classification::Unrecognized) as usize;
    }
    let time_after = clock.now();

    let stats = RunStats {
        name,
        elapsed: time_after - time_before,
        runs,
        true_count,
        error_count,
    };
    log::debug!("{} finished {} runs in {:.6}s", name, runs, stats.elapsed);
    Ok(stats)
}
