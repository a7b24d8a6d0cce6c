//! Whole-token equality against each keyword.
//!
//! The `||` chains short-circuit, so `"true"` costs one comparison and
//! `"Disable"` costs sixteen. Most of the time this is good enough.

use crate::token::{Classification, PaddedToken};

#[inline(never)]
pub fn parse_bool_eq_chain(token: Option<&PaddedToken>) -> Classification {
    let Some(token) = token else {
        return Classification::Unrecognized;
    };
    let s = token.as_bytes();

    if s == b"true"
        || s == b"yes"
        || s == b"on"
        || s == b"enable"
        || s == b"True"
        || s == b"Yes"
        || s == b"On"
        || s == b"Enable"
    {
        Classification::MatchTrue
    } else if s == b"false"
        || s == b"no"
        || s == b"off"
        || s == b"disable"
        || s == b"False"
        || s == b"No"
        || s == b"Off"
        || s == b"Disable"
    {
        Classification::MatchFalse
    } else {
        Classification::Unrecognized
    }
}
