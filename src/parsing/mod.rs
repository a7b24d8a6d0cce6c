//! Parsing algorithms.

pub mod parse_bool;
