use crate::{filter::TokenFilter, tokenize::simple_tokenize, tokenize::Tokens};

/// Trait that filters implement to opt into the universal test suite.
pub trait FilterTestConfig: TokenFilter + Sized {
    /// General samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &[
            "a big dog",
            "to go",
            "the",
            "Italian supercat",
            "this is a test",
            "über alles",
            "",
        ]
    }

    /// Input/output pairs, both given as space-separated tokens.
    ///
    /// Return an empty slice if the filter has no predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a filter satisfies every universal token-filter contract.
///
/// ### Contracts
/// 1. `empty_in_empty_out` → no tokens in, no tokens out
/// 2. `output_is_ordered_subsequence` → filters drop tokens, never invent or reorder them
/// 3. `never_empties_non_empty` → a non-empty phrase always keeps at least one token
/// 4. `filter_is_deterministic` → same input, same output
/// 5. `skipped_when_not_needed` → `needs_apply() == false` implies `apply()` is a no-op
/// 6. `transforms_match_expectations` → `should_transform()` pairs hold
/// 7. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_filter_contract {
    ($filter:expr) => {
        $crate::testing::filter_contract::empty_in_empty_out(&$filter);
        $crate::testing::filter_contract::output_is_ordered_subsequence(&$filter);
        $crate::testing::filter_contract::never_empties_non_empty(&$filter);
        $crate::testing::filter_contract::filter_is_deterministic(&$filter);
        $crate::testing::filter_contract::skipped_when_not_needed(&$filter);
        $crate::testing::filter_contract::transforms_match_expectations(&$filter);
        $crate::testing::filter_contract::no_panic_on_mixed_scripts(&$filter);
    };
}

fn run<F: TokenFilter>(filter: &F, input: &str) -> (Tokens, Tokens) {
    let tokens = simple_tokenize(input);
    let output = filter.apply(tokens.clone());
    (tokens, output)
}

pub fn empty_in_empty_out<F: FilterTestConfig>(filter: &F) {
    assert!(filter.apply(Tokens::new()).is_empty(), "`{}`", filter.name());
}

pub fn output_is_ordered_subsequence<F: FilterTestConfig>(filter: &F) {
    for &input in F::samples() {
        let (tokens, output) = run(filter, input);
        let mut remaining = tokens.iter();
        for token in &output {
            assert!(
                remaining.any(|t| t == token),
                "`{}` produced {output:?} from {tokens:?}",
                filter.name()
            );
        }
    }
}

pub fn never_empties_non_empty<F: FilterTestConfig>(filter: &F) {
    for &input in F::samples() {
        let (tokens, output) = run(filter, input);
        assert_eq!(
            tokens.is_empty(),
            output.is_empty(),
            "`{}` emptied `{input}`",
            filter.name()
        );
    }
}

pub fn filter_is_deterministic<F: FilterTestConfig>(filter: &F) {
    for &input in F::samples() {
        let (_, once) = run(filter, input);
        let (_, again) = run(filter, input);
        assert_eq!(once, again, "`{}` on `{input}`", filter.name());
    }
}

pub fn skipped_when_not_needed<F: FilterTestConfig>(filter: &F) {
    for &input in F::samples() {
        let (tokens, output) = run(filter, input);
        if !filter.needs_apply(&tokens) {
            assert_eq!(tokens, output, "`{}` changed `{input}`", filter.name());
        }
    }
}

pub fn transforms_match_expectations<F: FilterTestConfig>(filter: &F) {
    for &(input, expected) in F::should_transform() {
        let (_, output) = run(filter, input);
        assert_eq!(output.join(" "), expected, "`{}` on `{input}`", filter.name());
    }
}

pub fn no_panic_on_mixed_scripts<F: FilterTestConfig>(filter: &F) {
    let _ = run(filter, "Hello 世界 русский Türkçe العربية 简体中文 the a an to");
}
