//! Error type shared by the token source, the runner and verification.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Benchmarks index the token set modulo its length.
    #[error("token set is empty: enter at least one token before running benchmarks")]
    EmptyTokenSet,

    #[error("token {token:?} is {len} bytes long, the limit is {max}")]
    TokenTooLong {
        token: String,
        len: usize,
        max: usize,
    },

    #[error("token {0:?} contains an interior NUL byte")]
    InteriorNul(String),

    #[error("token set is full ({0} tokens)")]
    TokenSetFull(usize),

    #[error("variant '{variant}' classified {input:?} as {actual}, expected {expected}")]
    VariantMismatch {
        variant: &'static str,
        input: String,
        expected: crate::token::Classification,
        actual: crate::token::Classification,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
