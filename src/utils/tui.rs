//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::io::{self, Write};

use terminal_size::{terminal_size, Width};

use crate::utils::runner::RunStats;
use crate::utils::VariantInfo;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Name shown in tables; C variants carry the compiler that built them.
fn display_name(name: &str) -> String {
    if name.starts_with("c-") {
        match crate::utils::C_COMPILER_NAME {
            Some(c) => format!("{} ({})", name, c),
            None => name.to_string(),
        }
    } else {
        name.to_string()
    }
}

/// Print the application header
pub fn print_header(out: &mut impl Write, runs: usize) -> io::Result<()> {
    let term_width = get_term_width().min(80);
    let title = format!(" Parsing Bool Test {} Runs ", runs);
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    writeln!(out, "╔{}╗", border)?;
    writeln!(
        out,
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    )?;
    writeln!(out, "╚{}╝", border)?;
    writeln!(out)
}

/// Print the variants that will be timed, in order
pub fn print_variants<F>(out: &mut impl Write, variants: &[VariantInfo<F>]) -> io::Result<()> {
    let max_desc = get_term_width().saturating_sub(24).max(20);
    writeln!(out, "Variants:")?;
    for variant in variants {
        writeln!(
            out,
            "  {:<20} {}",
            display_name(variant.name),
            truncate(variant.description, max_desc)
        )?;
    }
    writeln!(out)
}

/// Print the comparison table. Speedup is relative to the first row.
pub fn print_comparison_table(out: &mut impl Write, results: &[RunStats]) -> io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    let term_width = get_term_width();
    // 12 + 9 + 3 * 11 columns plus separators
    let fixed_width = 62;
    let variant_col_width = term_width.saturating_sub(fixed_width).clamp(15, 32);
    let table_width = variant_col_width + fixed_width - 2;

    let baseline = results[0].elapsed;

    writeln!(out, "  {}", "─".repeat(table_width))?;
    writeln!(
        out,
        "  {:<v_width$} {:>12} {:>9} {:>11} {:>11} {:>11}",
        "Variant",
        "Seconds",
        "Speedup",
        "True",
        "False",
        "Error",
        v_width = variant_col_width
    )?;
    writeln!(out, "  {}", "─".repeat(table_width))?;

    for result in results {
        let speedup = if result.elapsed > 0.0 {
            baseline / result.elapsed
        } else {
            f64::INFINITY
        };

        writeln!(
            out,
            "  {:<v_width$} {:>12.6} {:>8.2}x {:>11} {:>11} {:>11}",
            truncate(&display_name(result.name), variant_col_width),
            result.elapsed,
            speedup,
            result.true_count,
            result.false_count(),
            result.error_count,
            v_width = variant_col_width
        )?;
    }
    writeln!(out, "  {}", "─".repeat(table_width))?;
    writeln!(out)
}
