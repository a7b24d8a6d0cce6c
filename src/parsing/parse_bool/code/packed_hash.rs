//! Hash dispatch into fixed-width packed keyword blobs.
//!
//! Keywords are baked back to back into 8-byte slots, zero padded, so the hash
//! can produce a byte offset directly. The false blob has 16 slots: the cheap
//! false hash is not dense, and the slots it can reach without a keyword hold
//! `0xCC` filler that never matches a UTF-8 token.

use super::hash::{false_offset, true_offset, SLOT_WIDTH};
use crate::token::{Classification, PaddedToken};

pub type Slot = [u8; SLOT_WIDTH];

/// Filler for unused slots. Eight `0xCC` bytes are not valid UTF-8.
pub const FILLER: Slot = [0xCC; SLOT_WIDTH];

/// Zero-pad `keyword` to one slot, keeping room for the terminator.
pub const fn slot(keyword: &[u8]) -> Slot {
    assert!(keyword.len() < SLOT_WIDTH, "keyword does not fit a slot");
    let mut out = [0u8; SLOT_WIDTH];
    let mut i = 0;
    while i < keyword.len() {
        out[i] = keyword[i];
        i += 1;
    }
    out
}

/// Addressed by [`true_offset`].
pub const TRUE_SLOTS: [Slot; 8] = [
    slot(b"Enable"),
    slot(b"On"),
    slot(b"True"),
    slot(b"Yes"),
    slot(b"enable"),
    slot(b"on"),
    slot(b"true"),
    slot(b"yes"),
];

/// Addressed by [`false_offset`].
pub const FALSE_SLOTS: [Slot; 16] = [
    slot(b"Disable"),
    slot(b"False"),
    slot(b"No"),
    slot(b"Off"),
    FILLER,
    FILLER,
    FILLER,
    slot(b"disable"),
    slot(b"false"),
    slot(b"no"),
    slot(b"off"),
    FILLER,
    FILLER,
    FILLER,
    FILLER,
    FILLER,
];

/// The slot's keyword: everything before the first zero byte, or the whole
/// slot for filler.
#[inline(always)]
pub fn slot_keyword(slot: &Slot) -> &[u8] {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(SLOT_WIDTH);
    &slot[..end]
}

#[inline(never)]
pub fn parse_bool_packed_hash(token: Option<&PaddedToken>) -> Classification {
    let Some(token) = token else {
        return Classification::Unrecognized;
    };
    let s = token.as_bytes();
    let first = token.first_byte();

    if s == slot_keyword(&TRUE_SLOTS[true_offset(first) / SLOT_WIDTH]) {
        return Classification::MatchTrue;
    }
    if s == slot_keyword(&FALSE_SLOTS[false_offset(first) / SLOT_WIDTH]) {
        return Classification::MatchFalse;
    }

    Classification::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_bool::code::keywords::classify_reference;

    #[test]
    fn test_slots_hold_their_keywords() {
        for slot in &TRUE_SLOTS {
            let keyword = slot_keyword(slot);
            assert_eq!(classify_reference(keyword), Classification::MatchTrue);
            assert_eq!(&TRUE_SLOTS[true_offset(keyword[0]) / SLOT_WIDTH], slot);
        }
        for slot in FALSE_SLOTS.iter().filter(|s| **s != FILLER) {
            let keyword = slot_keyword(slot);
            assert_eq!(classify_reference(keyword), Classification::MatchFalse);
            assert_eq!(&FALSE_SLOTS[false_offset(keyword[0]) / SLOT_WIDTH], slot);
        }
    }

    #[test]
    fn test_filler_count() {
        assert_eq!(FALSE_SLOTS.iter().filter(|s| **s == FILLER).count(), 8);
        assert!(std::str::from_utf8(&FILLER).is_err());
    }

    #[test]
    fn test_blob_is_contiguous() {
        assert_eq!(std::mem::size_of_val(&TRUE_SLOTS), 8 * SLOT_WIDTH);
        assert_eq!(std::mem::size_of_val(&FALSE_SLOTS), 16 * SLOT_WIDTH);
    }
}
