//! # Boolean Keyword Parsing
//!
//! Parses a short token into true, false or unrecognized. The 16 keywords are
//! `true yes on enable` and `false no off disable`, each in lower case and
//! capitalized. Matching is exact and case-sensitive.
//!
//! ## Optimization Strategies
//!
//! - **Character looping**: scan every keyword byte by byte, most likely first
//! - **Labeled continue**: same scan without the match flag
//! - **Equality chain**: short-circuiting whole-token comparisons
//! - **First-character hash**: one candidate per class, one comparison each
//! - **Packed slots**: keywords zero padded into 8-byte slots, hash gives the offset
//! - **Word compare**: compare 8 bytes at once, clear the tail with a length mask
//!   (shift-built or BZHI)
//!
//! The word-compare variants read 8 bytes from every token regardless of its
//! length. [`PaddedToken`](crate::token::PaddedToken) storage makes that read
//! always in bounds and always zero past the end.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

/// Parser calls per variant in a benchmark run.
pub const BOOL_RUNS: usize = 10_000_000;

pub fn name() -> &'static str {
    "parse_bool"
}

pub fn description() -> &'static str {
    "Parses a boolean keyword token into true, false or unrecognized"
}
