//! Token source: interactive collection of tokens to parse.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::error::BenchError;
use crate::token::{PaddedToken, TokenSet, MAX_TOKENS, MAX_TOKEN_LEN};

const PROMPT: &str = "Enter bool: ";

/// Read one token per line until a blank line, end of input, or
/// [`MAX_TOKENS`] accepted tokens.
///
/// Each accepted token is echoed with its index. Lines longer than
/// [`MAX_TOKEN_LEN`] bytes are truncated; lines with a NUL byte are skipped.
/// Invalid UTF-8 is replaced with U+FFFD, so such a line still becomes a
/// token (which no parser recognizes).
pub fn collect_tokens<R, W>(mut input: R, out: &mut W) -> Result<TokenSet, BenchError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = TokenSet::new();
    let mut buf = Vec::new();

    write!(out, "{}", PROMPT)?;
    out.flush()?;

    while !tokens.is_full() {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            log::warn!("input line is not valid UTF-8, replacing invalid bytes");
        }
        let line: &str = &decoded;

        let text = line.strip_suffix('\n').unwrap_or(line);
        let text = text.strip_suffix('\r').unwrap_or(text);
        if text.is_empty() {
            break;
        }

        let fitted = PaddedToken::truncate_to_fit(text);
        if fitted.len() < text.len() {
            log::warn!(
                "input {:?} is longer than {} bytes, using {:?}",
                text,
                MAX_TOKEN_LEN,
                fitted
            );
        }

        match PaddedToken::new(fitted) {
            Ok(token) => {
                writeln!(out, "String {}: {}", tokens.len(), token)?;
                tokens.push(token)?;
            }
            Err(e) => log::warn!("skipping input: {}", e),
        }

        if !tokens.is_full() {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
    }

    if tokens.is_full() {
        log::info!("token limit of {} reached, stopping input", MAX_TOKENS);
    }

    writeln!(out, "Got {} inputs!", tokens.len())?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_bool::code::keywords::classify_reference;
    use crate::token::Classification;
    use std::io::Cursor;

    fn collect(input: &str) -> (TokenSet, String) {
        let mut out = Vec::new();
        let tokens = collect_tokens(Cursor::new(input), &mut out).unwrap();
        (tokens, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_stops_on_blank_line() {
        let (tokens, out) = collect("yes\nno\n\nbanana\n");
        assert_eq!(tokens.len(), 2);
        assert!(out.contains("String 0: yes"));
        assert!(out.contains("String 1: no"));
        assert!(out.contains("Got 2 inputs!"));
        assert!(!out.contains("banana"));
    }

    #[test]
    fn test_stops_on_eof_without_newline() {
        let (tokens, out) = collect("true\r\nOff");
        let texts: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(texts, ["true", "Off"]);
        assert!(out.ends_with("Got 2 inputs!\n"));
    }

    #[test]
    fn test_empty_input() {
        let (tokens, out) = collect("");
        assert!(tokens.is_empty());
        assert!(out.contains("Got 0 inputs!"));
    }

    #[test]
    fn test_caps_token_count() {
        let input = "on\n".repeat(MAX_TOKENS + 5);
        let (tokens, out) = collect(&input);
        assert_eq!(tokens.len(), MAX_TOKENS);
        assert!(out.contains(&format!("Got {} inputs!", MAX_TOKENS)));
    }

    #[test]
    fn test_truncates_long_lines() {
        let (tokens, _) = collect("abcdefghijklmnopqrstuvwxyz\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].len(), MAX_TOKEN_LEN);
    }

    #[test]
    fn test_skips_nul_lines() {
        let (tokens, _) = collect("tr\0ue\nyes\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].as_bytes(), b"yes");
    }

    #[test]
    fn test_invalid_utf8_line_becomes_unrecognized_token() {
        let mut out = Vec::new();
        let tokens = collect_tokens(Cursor::new(b"yes\n\xffno\nno\n".to_vec()), &mut out).unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(texts, ["yes", "\u{fffd}no", "no"]);
        assert!(String::from_utf8(out).unwrap().contains("Got 3 inputs!"));

        let results: Vec<_> = tokens
            .iter()
            .map(|t| classify_reference(t.as_bytes()))
            .collect();
        assert_eq!(
            results,
            [
                Classification::MatchTrue,
                Classification::Unrecognized,
                Classification::MatchFalse
            ]
        );
    }
}
