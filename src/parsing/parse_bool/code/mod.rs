//! Boolean parser implementations.
//!
//! Every variant has the same contract: an absent token or anything that is
//! not exactly one of the 16 keywords gives `Unrecognized`.

pub mod c_impl;
pub mod char_loop;
pub mod equality_chain;
pub mod first_char_hash;
pub mod hash;
pub mod keywords;
pub mod packed_hash;
pub mod word_mask;

pub use c_impl::{parse_bool_c_strcmp_table, C_IMPL_AVAILABLE};
pub use char_loop::{parse_bool_char_loop, parse_bool_char_loop_labeled};
pub use equality_chain::parse_bool_eq_chain;
pub use first_char_hash::parse_bool_first_char_hash;
pub use packed_hash::parse_bool_packed_hash;
pub use word_mask::{parse_bool_word_bzhi, parse_bool_word_shift, HARDWARE_BZHI};

use crate::token::{Classification, PaddedToken};
use crate::utils::VariantInfo;

/// Function signature shared by all parsers. `None` is the absent token.
pub type ParseBoolFn = fn(Option<&PaddedToken>) -> Classification;

/// All variants in benchmark order. The first one is the speedup baseline.
pub fn get_variants() -> Vec<VariantInfo<ParseBoolFn>> {
    let mut variants: Vec<VariantInfo<ParseBoolFn>> = vec![
        VariantInfo {
            name: "char-loop",
            description: "Character looping over the keyword table (flag and break)",
            function: parse_bool_char_loop,
        },
        VariantInfo {
            name: "char-loop-labeled",
            description: "Character looping, mismatch jumps to the next keyword",
            function: parse_bool_char_loop_labeled,
        },
        VariantInfo {
            name: "eq-chain",
            description: "Short-circuiting whole-token equality chain",
            function: parse_bool_eq_chain,
        },
        VariantInfo {
            name: "first-char-hash",
            description: "First-character hash into two 8-entry keyword tables",
            function: parse_bool_first_char_hash,
        },
        VariantInfo {
            name: "packed-hash",
            description: "First-character hash into zero-padded 8-byte slots",
            function: parse_bool_packed_hash,
        },
        VariantInfo {
            name: "word-mask-shift",
            description: "64-bit word compare, length mask built from shifts",
            function: parse_bool_word_shift,
        },
        VariantInfo {
            name: "word-mask-bzhi",
            description: if HARDWARE_BZHI {
                "64-bit word compare, length mask via BMI2 BZHI"
            } else {
                "64-bit word compare, length mask via emulated BZHI (build without bmi2)"
            },
            function: parse_bool_word_bzhi,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-strcmp-table",
            description: "C keyword table scan with strcmp",
            function: parse_bool_c_strcmp_table,
        });
    }

    variants
}
