//! # Micro-Optimize-Bool
//!
//! One boolean keyword parser written several ways, from a naive character
//! loop to hashed, width-packed, word-at-a-time comparison, plus the harness
//! that times them identically.

pub mod error;
pub mod input;
pub mod parsing;
pub mod token;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::BenchError;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::BenchError;
    pub use crate::parsing::parse_bool;
    pub use crate::token::{Classification, PaddedToken, TokenSet};
    pub use crate::utils::{RunStats, SystemClock};
}
