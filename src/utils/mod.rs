//! Utility modules for benchmarking and execution.

pub mod cpu_affinity;
pub mod logging;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run_strategy, RunStats};
pub use timer::{now_seconds, Clock, SystemClock};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "char-loop", "word-mask-bzhi")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
