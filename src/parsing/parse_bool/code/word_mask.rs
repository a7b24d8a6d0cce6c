//! Word-at-a-time comparison against the packed slots.
//!
//! Same hashing and slots as `packed_hash`, but the first 8 bytes of the token
//! are read as one `u64` and compared against the slot as one `u64`. Bytes
//! past the keyword are cleared with a length mask first. The mask keeps the
//! keyword AND its terminator, so a token that merely starts with a keyword
//! still differs in the kept bytes. Seven-letter keywords keep the full word,
//! which also covers tokens longer than 8 bytes.
//!
//! Two masking backends with identical results:
//! - shift: the mask is `u64::MAX` shifted right, composed per call.
//! - BZHI: the BMI2 "zero high bits" instruction, when the build enables
//!   `bmi2`; otherwise an emulation of it.
//!
//! # Memory layout
//! ```text
//! token storage: 'y' 'e' 's' 00 00 00 00 00 | 00 ... (32 bytes)
//! word (LE):     0x00000000_00736579
//! keep bits:     32  -> "yes" + terminator
//! ```

use super::hash::{false_offset, true_offset, SLOT_WIDTH};
use super::packed_hash::{Slot, FALSE_SLOTS, TRUE_SLOTS};
use crate::token::{Classification, PaddedToken};

/// Whether [`mask_bzhi`] compiles to the hardware instruction.
pub const HARDWARE_BZHI: bool = cfg!(all(target_arch = "x86_64", target_feature = "bmi2"));

const fn slot_words<const N: usize>(slots: &[Slot; N]) -> [u64; N] {
    let mut out = [0u64; N];
    let mut i = 0;
    while i < N {
        out[i] = u64::from_le_bytes(slots[i]);
        i += 1;
    }
    out
}

pub const TRUE_WORDS: [u64; 8] = slot_words(&TRUE_SLOTS);
pub const FALSE_WORDS: [u64; 16] = slot_words(&FALSE_SLOTS);

/// Bits to keep per true slot: 8 * (keyword length + 1).
pub const TRUE_KEEP_BITS: [u32; 8] = [56, 24, 40, 32, 56, 24, 40, 32];

/// Bits to keep per false slot. Filler slots keep nothing, and a zero word
/// never equals filler.
pub const FALSE_KEEP_BITS: [u32; 16] = [64, 48, 24, 32, 0, 0, 0, 64, 48, 24, 32, 0, 0, 0, 0, 0];

/// Keep the low `bits` bits of `word` (`bits` <= 64) using shifts.
#[inline(always)]
pub fn mask_shift(word: u64, bits: u32) -> u64 {
    word & u64::MAX.checked_shr(64 - bits).unwrap_or(0)
}

/// Keep the low `bits` bits of `word` (`bits` <= 64) using BZHI.
#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
#[inline(always)]
pub fn mask_bzhi(word: u64, bits: u32) -> u64 {
    // SAFETY: bmi2 is enabled for the whole build.
    unsafe { core::arch::x86_64::_bzhi_u64(word, bits) }
}

/// Software BZHI for builds without bmi2.
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
#[inline(always)]
pub fn mask_bzhi(word: u64, bits: u32) -> u64 {
    if bits >= 64 {
        word
    } else {
        word & ((1u64 << bits) - 1)
    }
}

#[inline(always)]
fn classify_words(token: &PaddedToken, mask: fn(u64, u32) -> u64) -> Classification {
    let first = token.first_byte();
    let word = token.first_word();

    let slot = true_offset(first) / SLOT_WIDTH;
    if mask(word, TRUE_KEEP_BITS[slot]) == TRUE_WORDS[slot] {
        return Classification::MatchTrue;
    }

    let slot = false_offset(first) / SLOT_WIDTH;
    if mask(word, FALSE_KEEP_BITS[slot]) == FALSE_WORDS[slot] {
        return Classification::MatchFalse;
    }

    Classification::Unrecognized
}

#[inline(never)]
pub fn parse_bool_word_shift(token: Option<&PaddedToken>) -> Classification {
    match token {
        Some(token) => classify_words(token, mask_shift),
        None => Classification::Unrecognized,
    }
}

#[inline(never)]
pub fn parse_bool_word_bzhi(token: Option<&PaddedToken>) -> Classification {
    match token {
        Some(token) => classify_words(token, mask_bzhi),
        None => Classification::Unrecognized,
    }
}
