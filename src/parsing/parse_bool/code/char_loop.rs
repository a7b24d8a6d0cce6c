//! Character-by-character scan over the keyword table.
//!
//! Both parsers walk the 16 keywords in order of expected frequency and
//! compare byte by byte. Each keyword is stored with its terminator, and the
//! comparison includes it, so `"truee"` does not match `"true"`. The byte past
//! the end of the token is always a zero from the padded storage.

use crate::token::{Classification, PaddedToken};

/// Keywords in order of predicted usage, terminator included.
#[rustfmt::skip]
const MATCH: [&[u8]; 16] = [
    b"true\0", b"yes\0", b"no\0", b"false\0", b"on\0", b"off\0", b"True\0", b"False\0",
    b"Yes\0", b"No\0", b"enable\0", b"disable\0", b"On\0", b"Off\0", b"Enable\0", b"Disable\0",
];

const VALUE: [Classification; 16] = {
    use crate::token::Classification::{MatchFalse as F, MatchTrue as T};
    [T, T, F, F, T, F, T, F, T, F, T, F, T, F, T, F]
};

/// Flag-and-break scan: a mismatch clears `matched` and leaves the inner loop.
#[inline(never)]
pub fn parse_bool_char_loop(token: Option<&PaddedToken>) -> Classification {
    let Some(token) = token else {
        return Classification::Unrecognized;
    };
    let check = token.padded();

    for (keyword, &value) in MATCH.iter().zip(VALUE.iter()) {
        let mut matched = true;
        for (i, &expected) in keyword.iter().enumerate() {
            if check[i] != expected {
                matched = false;
                break;
            }
        }
        if matched {
            return value;
        }
    }

    Classification::Unrecognized
}

/// Same scan, but a mismatch jumps straight to the next keyword with a
/// labeled `continue`, so there is no flag to test after the inner loop.
#[inline(never)]
pub fn parse_bool_char_loop_labeled(token: Option<&PaddedToken>) -> Classification {
    let Some(token) = token else {
        return Classification::Unrecognized;
    };
    let check = token.padded();

    'keywords: for (keyword, &value) in MATCH.iter().zip(VALUE.iter()) {
        for (i, &expected) in keyword.iter().enumerate() {
            if check[i] != expected {
                continue 'keywords;
            }
        }
        return value;
    }

    Classification::Unrecognized
}
