//! Cross-variant verification for the boolean parsers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::code::keywords::{all_keywords, classify_reference};
use super::code::{get_variants, ParseBoolFn};
use crate::error::BenchError;
use crate::token::{Classification, PaddedToken, MAX_TOKEN_LEN};
use crate::utils::VariantInfo;

/// Seed for the random probes, fixed so failures reproduce.
pub const PROBE_SEED: u64 = 0x0B00_1EA5;

/// Number of random probes added to the fixed ones.
pub const RANDOM_PROBES: usize = 2_000;

/// Inputs that look close to a keyword but are not one.
#[rustfmt::skip]
const NEAR_MISSES: &[&str] = &[
    "", "TRUE", "tru", "truee", " true", "true ", "FALSE", "fals", "falsey", "Y", "y", "n", "N",
    "0", "1", "ON", "OFF", "oN", "oFf", "Enabled", "disabled", "yes!", "noo", "maybe", "banana",
    "E", "D", "\t", "enable\t", "Disable ", "DisableX", "disable_", "Off\u{e9}", "\u{e9}",
];

/// Flip the case of the character at `idx` (ASCII only).
fn flip_case(keyword: &str, idx: usize) -> String {
    keyword
        .char_indices()
        .map(|(i, c)| {
            if i != idx {
                c
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Fixed probes: keywords, near misses and systematic keyword mutations.
fn fixed_probes() -> Vec<String> {
    let mut probes: Vec<String> = all_keywords().map(|(k, _)| k.to_string()).collect();
    probes.extend(NEAR_MISSES.iter().map(|s| s.to_string()));

    for (keyword, _) in all_keywords() {
        for idx in 0..keyword.len() {
            probes.push(flip_case(keyword, idx));
        }
        for end in 0..keyword.len() {
            probes.push(keyword[..end].to_string());
        }
        for suffix in ["e", "s", " ", "1", "XXXXXXXXX"] {
            probes.push(format!("{}{}", keyword, suffix));
        }
        probes.push(format!(" {}", keyword));
    }

    probes
}

/// Random printable ASCII strings, biased towards keyword first letters.
fn random_probes(count: usize, seed: u64) -> Vec<String> {
    const FIRST: &[u8] = b"tTyYoOeEfFnNdD";
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=MAX_TOKEN_LEN);
            (0..len)
                .map(|i| {
                    if i == 0 && rng.random_bool(0.75) {
                        FIRST[rng.random_range(0..FIRST.len())] as char
                    } else {
                        rng.random_range(b' '..=b'~') as char
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// All probe inputs used by [`verify_all`].
pub fn probe_inputs() -> Vec<String> {
    let mut probes = fixed_probes();
    probes.extend(random_probes(RANDOM_PROBES, PROBE_SEED));
    probes.retain(|p| p.len() <= MAX_TOKEN_LEN && !p.contains('\0'));
    probes
}

/// Check every variant in `variants` against the reference classification.
pub fn verify_variants(variants: &[VariantInfo<ParseBoolFn>]) -> Result<(), BenchError> {
    let probes = probe_inputs();
    log::debug!(
        "verifying {} variants against {} probes",
        variants.len(),
        probes.len()
    );

    for variant in variants {
        let absent = (variant.function)(None);
        if absent != Classification::Unrecognized {
            return Err(BenchError::VariantMismatch {
                variant: variant.name,
                input: "<absent>".to_string(),
                expected: Classification::Unrecognized,
                actual: absent,
            });
        }

        for probe in &probes {
            let token = PaddedToken::new(probe)?;
            let expected = classify_reference(token.as_bytes());
            let actual = (variant.function)(Some(&token));

            if actual != expected {
                return Err(BenchError::VariantMismatch {
                    variant: variant.name,
                    input: probe.clone(),
                    expected,
                    actual,
                });
            }
        }
    }

    Ok(())
}

/// Verify all variants produce the same results as the reference
pub fn verify_all() -> Result<(), BenchError> {
    verify_variants(&get_variants())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(text: &str) -> Vec<(&'static str, Classification)> {
        let token = PaddedToken::new(text).unwrap();
        get_variants()
            .iter()
            .map(|v| (v.name, (v.function)(Some(&token))))
            .collect()
    }

    fn assert_all(text: &str, expected: Classification) {
        for (name, actual) in parse_all(text) {
            assert_eq!(actual, expected, "{}: {:?}", name, text);
        }
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_true_keywords() {
        for keyword in crate::parsing::parse_bool::code::keywords::TRUE_KEYWORDS {
            assert_all(keyword, Classification::MatchTrue);
        }
    }

    #[test]
    fn test_false_keywords() {
        for keyword in crate::parsing::parse_bool::code::keywords::FALSE_KEYWORDS {
            assert_all(keyword, Classification::MatchFalse);
        }
    }

    #[test]
    fn test_unrecognized_inputs() {
        for text in ["", "TRUE", "tru", "truee", " true", "true ", "maybe"] {
            assert_all(text, Classification::Unrecognized);
        }
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_all("true", Classification::MatchTrue);
        assert_all("Disable", Classification::MatchFalse);
        assert_all("maybe", Classification::Unrecognized);
        assert_all("", Classification::Unrecognized);
    }

    #[test]
    fn test_absent_token() {
        for variant in get_variants() {
            assert_eq!(
                (variant.function)(None),
                Classification::Unrecognized,
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        for text in ["yes", "Off", "banana", ""] {
            let first = parse_all(text);
            for _ in 0..3 {
                assert_eq!(parse_all(text), first);
            }
        }
    }

    #[test]
    fn test_random_probes_are_reproducible() {
        assert_eq!(random_probes(50, 7), random_probes(50, 7));
        assert!(random_probes(50, 7).iter().all(|p| p.len() <= MAX_TOKEN_LEN));
    }

    #[test]
    fn test_detects_a_broken_variant() {
        fn always_true(_token: Option<&PaddedToken>) -> Classification {
            Classification::MatchTrue
        }
        let broken = [VariantInfo {
            name: "broken",
            description: "Always true",
            function: always_true as ParseBoolFn,
        }];
        assert!(matches!(
            verify_variants(&broken),
            Err(BenchError::VariantMismatch { variant: "broken", .. })
        ));
    }
}
