//! Token storage and the tri-state parse result.
//!
//! Tokens live in a fixed, zero-filled buffer that is much larger than the
//! longest accepted token. The hashed parsers rely on that: they read a whole
//! 8-byte word from the start of the token, or one byte past its end, without
//! checking the length first.

use std::fmt;

use crate::error::BenchError;

/// Longest accepted token, in bytes.
pub const MAX_TOKEN_LEN: usize = 19;

/// Bytes of storage behind every token.
pub const TOKEN_STORAGE: usize = 32;

/// Width of the word read by the word-compare parsers.
pub const WORD_BYTES: usize = 8;

/// Maximum number of tokens collected for a benchmark run.
pub const MAX_TOKENS: usize = 32;

const _: () = assert!(TOKEN_STORAGE >= MAX_TOKEN_LEN + 1);
const _: () = assert!(TOKEN_STORAGE >= MAX_TOKEN_LEN + WORD_BYTES);
const _: () = assert!(MAX_TOKEN_LEN <= u8::MAX as usize);

/// Result of parsing one token.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    MatchFalse = 0,
    MatchTrue = 1,
    Unrecognized = -1,
}

impl Classification {
    /// Map a C-style return value: 1 is true, 0 is false, anything else is unrecognized.
    pub const fn from_raw(value: i32) -> Self {
        match value {
            1 => Classification::MatchTrue,
            0 => Classification::MatchFalse,
            _ => Classification::Unrecognized,
        }
    }

    pub const fn as_raw(self) -> i32 {
        self as i8 as i32
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::MatchTrue => write!(f, "true (1)"),
            Classification::MatchFalse => write!(f, "false (0)"),
            Classification::Unrecognized => write!(f, "unrecognized (-1)"),
        }
    }
}

/// A token copied into zero-padded fixed storage.
///
/// Every byte past `len` is zero, so the token is always NUL-terminated and
/// reading [`WORD_BYTES`] from offset 0 never leaves the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddedToken {
    bytes: [u8; TOKEN_STORAGE],
    len: u8,
}

impl PaddedToken {
    pub fn new(text: &str) -> Result<Self, BenchError> {
        let raw = text.as_bytes();
        if raw.len() > MAX_TOKEN_LEN {
            return Err(BenchError::TokenTooLong {
                token: text.to_string(),
                len: raw.len(),
                max: MAX_TOKEN_LEN,
            });
        }
        if raw.contains(&0) {
            return Err(BenchError::InteriorNul(text.to_string()));
        }

        let mut bytes = [0u8; TOKEN_STORAGE];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Cut `text` down to at most [`MAX_TOKEN_LEN`] bytes on a char boundary.
    pub fn truncate_to_fit(text: &str) -> &str {
        if text.len() <= MAX_TOKEN_LEN {
            return text;
        }
        let mut end = MAX_TOKEN_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The token's own bytes, without padding.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The whole backing buffer, padding included.
    #[inline(always)]
    pub fn padded(&self) -> &[u8; TOKEN_STORAGE] {
        &self.bytes
    }

    /// First byte, or the terminator for an empty token.
    #[inline(always)]
    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// The first [`WORD_BYTES`] bytes as a little-endian word, so the first
    /// character always lands in the low byte.
    #[inline(always)]
    pub fn first_word(&self) -> u64 {
        let b = &self.bytes;
        u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Pointer to a NUL-terminated copy of the token, valid while `self` lives.
    pub fn as_c_ptr(&self) -> *const std::ffi::c_char {
        self.bytes.as_ptr().cast()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl fmt::Debug for PaddedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaddedToken({:?})", self.to_string_lossy())
    }
}

impl fmt::Display for PaddedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Ordered, bounded list of tokens fed to the benchmarks.
#[derive(Clone, Debug, Default)]
pub struct TokenSet {
    tokens: Vec<PaddedToken>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(MAX_TOKENS),
        }
    }

    /// Build a set from string slices, failing on the first invalid token.
    pub fn from_strs(texts: &[&str]) -> Result<Self, BenchError> {
        let mut set = Self::new();
        for text in texts {
            set.push(PaddedToken::new(text)?)?;
        }
        Ok(set)
    }

    pub fn push(&mut self, token: PaddedToken) -> Result<(), BenchError> {
        if self.is_full() {
            return Err(BenchError::TokenSetFull(MAX_TOKENS));
        }
        self.tokens.push(token);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tokens.len() >= MAX_TOKENS
    }

    /// Token at `index mod len`, or `None` for an empty set.
    #[inline(always)]
    pub fn get_wrapped(&self, index: usize) -> Option<&PaddedToken> {
        if self.tokens.is_empty() {
            None
        } else {
            self.tokens.get(index % self.tokens.len())
        }
    }

    pub fn as_slice(&self) -> &[PaddedToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaddedToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a PaddedToken;
    type IntoIter = std::slice::Iter<'a, PaddedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
