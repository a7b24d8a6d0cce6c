//! Benchmarks for the boolean parsers.

use super::code::{get_variants, ParseBoolFn};
use crate::error::BenchError;
use crate::token::TokenSet;
use crate::utils::runner::{run_strategy, RunStats};
use crate::utils::timer::Clock;
use crate::utils::VariantInfo;

/// Time every variant in order over the same tokens.
pub fn run_benchmarks<C: Clock + ?Sized>(
    tokens: &TokenSet,
    runs: usize,
    clock: &C,
) -> Result<Vec<RunStats>, BenchError> {
    run_variants(&get_variants(), tokens, runs, clock, |_| {})
}

/// Time `variants` in order, handing each result to `on_result` as soon as
/// it is measured.
pub fn run_variants<C, R>(
    variants: &[VariantInfo<ParseBoolFn>],
    tokens: &TokenSet,
    runs: usize,
    clock: &C,
    mut on_result: R,
) -> Result<Vec<RunStats>, BenchError>
where
    C: Clock + ?Sized,
    R: FnMut(&RunStats),
{
    if tokens.is_empty() {
        return Err(BenchError::EmptyTokenSet);
    }

    variants
        .iter()
        .map(|variant| {
            let stats = run_strategy(variant.name, variant.function, tokens, runs, clock)?;
            on_result(&stats);
            Ok(stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::SystemClock;

    #[test]
    fn test_all_variants_agree_on_counts() {
        let tokens = TokenSet::from_strs(&["yes", "no", "banana"]).unwrap();
        let results = run_benchmarks(&tokens, 9, &SystemClock).unwrap();

        assert_eq!(results.len(), get_variants().len());
        for stats in &results {
            assert_eq!(stats.true_count, 3, "{}", stats.name);
            assert_eq!(stats.error_count, 3, "{}", stats.name);
            assert_eq!(stats.false_count(), 3, "{}", stats.name);
            assert!(stats.elapsed >= 0.0);
        }
    }

    #[test]
    fn test_results_follow_variant_order() {
        let tokens = TokenSet::from_strs(&["Enable"]).unwrap();
        let mut seen = Vec::new();
        let results = run_variants(&get_variants(), &tokens, 4, &SystemClock, |s| {
            seen.push(s.name)
        })
        .unwrap();

        let names: Vec<_> = get_variants().iter().map(|v| v.name).collect();
        assert_eq!(seen, names);
        assert_eq!(results.iter().map(|r| r.name).collect::<Vec<_>>(), names);
        assert_eq!(results[0].name, "char-loop");
    }

    #[test]
    fn test_empty_token_set() {
        let result = run_benchmarks(&TokenSet::new(), 9, &SystemClock);
        assert!(matches!(result, Err(BenchError::EmptyTokenSet)));
    }
}
