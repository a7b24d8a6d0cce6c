//! Hash dispatch on the first character into two 8-entry tables.
//!
//! One hash picks the only true keyword the token could be, another picks the
//! only false keyword, and each gets a single equality check. The hashes cost
//! more than they save against the early keywords of the equality chain.

use super::hash::{false_slot, true_slot};
use crate::token::{Classification, PaddedToken};

/// Indexed by [`true_slot`].
pub(crate) const TRUE_TABLE: [&[u8]; 8] =
    [b"Enable", b"On", b"True", b"Yes", b"enable", b"on", b"true", b"yes"];

/// Indexed by [`false_slot`].
pub(crate) const FALSE_TABLE: [&[u8]; 8] =
    [b"Disable", b"False", b"No", b"Off", b"disable", b"false", b"no", b"off"];

#[inline(never)]
pub fn parse_bool_first_char_hash(token: Option<&PaddedToken>) -> Classification {
    let Some(token) = token else {
        return Classification::Unrecognized;
    };
    let s = token.as_bytes();
    let first = token.first_byte();

    if s == TRUE_TABLE[true_slot(first)] {
        return Classification::MatchTrue;
    }
    if s == FALSE_TABLE[false_slot(first)] {
        return Classification::MatchFalse;
    }

    Classification::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_sits_in_its_slot() {
        for keyword in TRUE_TABLE {
            assert_eq!(TRUE_TABLE[true_slot(keyword[0])], keyword);
        }
        for keyword in FALSE_TABLE {
            assert_eq!(FALSE_TABLE[false_slot(keyword[0])], keyword);
        }
    }
}
