//! Boolean parser benchmark.
//!
//! Usage:
//!   bool-bench    # enter tokens one per line, blank line to start timing
//!
//! Set `RUST_LOG=info` (or `debug`) for diagnostics on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use micro_optimize_bool::error::BenchError;
use micro_optimize_bool::input::collect_tokens;
use micro_optimize_bool::parsing::parse_bool::{self, bench, test, BOOL_RUNS, HARDWARE_BZHI};
use micro_optimize_bool::utils::{logging, tui, SystemClock};

fn run() -> Result<(), BenchError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    tui::print_header(&mut out, BOOL_RUNS)?;

    let tokens = collect_tokens(stdin.lock(), &mut out)?;
    writeln!(out)?;

    if tokens.is_empty() {
        return Err(BenchError::EmptyTokenSet);
    }

    let variants = parse_bool::get_variants();
    log::info!(
        "BZHI masking backend: {}",
        if HARDWARE_BZHI { "hardware (bmi2)" } else { "emulated" }
    );
    test::verify_variants(&variants)?;

    tui::print_variants(&mut out, &variants)?;

    let mut write_error = None;
    let results = bench::run_variants(&variants, &tokens, BOOL_RUNS, &SystemClock, |stats| {
        if let Err(e) = writeln!(out, "{}", stats).and_then(|()| out.flush()) {
            write_error.get_or_insert(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    writeln!(out)?;
    tui::print_comparison_table(&mut out, &results)?;
    writeln!(out, "Done!")?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    if std::env::args().len() > 1 {
        log::warn!("bool-bench takes no arguments, ignoring them");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
