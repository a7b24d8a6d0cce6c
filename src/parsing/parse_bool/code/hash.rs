//! First-character hashes.
//!
//! Each hash maps the first byte of a keyword to a slot that no other keyword
//! of the same class uses. For anything else the slot is arbitrary but always
//! in range, and the comparison that follows rejects it.
//!
//! ```text
//! true slots  (8):  Enable On True Yes enable on true yes
//! false slots (8):  Disable False No Off disable false no off
//! false slots (16): Disable False No Off ## ## ## disable false no off ## ## ## ## ##
//! ```

/// Width of one packed keyword slot in bytes.
pub const SLOT_WIDTH: usize = 8;

/// Slot in the 8-entry true table: `((c - 'A') >> 3) & 7`.
///
/// Upper and lower case are 32 apart, so they fall four slots apart.
#[inline(always)]
pub fn true_slot(first: u8) -> usize {
    let c = i32::from(first);
    (((c - 'A' as i32) >> 3) & 7) as usize
}

/// Slot in the 8-entry false table.
///
/// `caps` is 0 for upper case and 1 for lower case. The expression spreads
/// D, F, N, O over slots 0..4 and folds lower case onto 4..8.
#[inline(always)]
pub fn false_slot(first: u8) -> usize {
    let c = i32::from(first);
    let caps = (c - 65) >> 5;
    (((((c - 57 - (caps << 4)) << 3) - c + (caps << 5)) >> 5) & 7) as usize
}

/// Byte offset into the packed 8-slot true blob: `(c - 'A') & 0b0011_1000`.
#[inline(always)]
pub fn true_offset(first: u8) -> usize {
    let c = i32::from(first);
    ((c - 'A' as i32) & 56) as usize
}

/// Byte offset into the packed 16-slot false blob.
///
/// Cheaper than [`false_slot`] because it does not fold lower case down;
/// the unused slots it can land on hold filler instead.
#[inline(always)]
pub fn false_offset(first: u8) -> usize {
    let c = i32::from(first);
    (((((c - 57) << 3) - c) >> 2) & 120) as usize
}
