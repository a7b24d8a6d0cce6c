//! Canonical keyword spellings.
//!
//! Every parser's internal table is a reordering or re-encoding of these two
//! lists. The tests check each table against them.

use crate::token::Classification;

pub const TRUE_KEYWORDS: [&str; 8] = ["true", "yes", "on", "enable", "True", "Yes", "On", "Enable"];

pub const FALSE_KEYWORDS: [&str; 8] = [
    "false", "no", "off", "disable", "False", "No", "Off", "Disable",
];

/// Straightforward definition of the parse, used as the verification oracle.
pub fn classify_reference(token: &[u8]) -> Classification {
    if TRUE_KEYWORDS.iter().any(|k| k.as_bytes() == token) {
        Classification::MatchTrue
    } else if FALSE_KEYWORDS.iter().any(|k| k.as_bytes() == token) {
        Classification::MatchFalse
    } else {
        Classification::Unrecognized
    }
}

/// All 16 keywords with their expected result.
pub fn all_keywords() -> impl Iterator<Item = (&'static str, Classification)> {
    TRUE_KEYWORDS
        .iter()
        .map(|&k| (k, Classification::MatchTrue))
        .chain(FALSE_KEYWORDS.iter().map(|&k| (k, Classification::MatchFalse)))
}
