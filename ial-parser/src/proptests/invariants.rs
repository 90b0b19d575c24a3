//! Scanner invariant tests using property-based testing

use proptest::prelude::*;

use crate::{Options, ParseContext, parse_ial};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    /// The scanner should never panic on any input.
    #[test]
    fn scanner_never_panics(data in any_candidate()) {
        let _ = parse_ial(&data, &Options::default());
        let _ = parse_ial(&data, &Options::builder().with_strict().build());
    }

    /// Consumed bytes never exceed the buffer, and the last consumed byte is
    /// a closing brace.
    #[test]
    fn consumed_ends_on_close(data in structured_candidate()) {
        if let Ok((_, consumed)) = parse_ial(&data, &Options::default()) {
            prop_assert!(consumed >= 2);
            prop_assert!(consumed <= data.len());
            prop_assert_eq!(data.get(consumed - 1), Some(&b'}'));
        }
    }

    /// Without a closing brace there is nothing to consume.
    #[test]
    fn unclosed_is_never_an_ial(data in unclosed_candidate()) {
        let mut context = ParseContext::new();
        prop_assert_eq!(context.scan(&data), 0);
        prop_assert!(context.is_empty());
    }

    /// A record is appended exactly when bytes are consumed.
    #[test]
    fn record_appended_only_on_success(data in structured_candidate()) {
        let mut context = ParseContext::new();
        let consumed = context.scan(&data);
        prop_assert_eq!(context.len(), usize::from(consumed > 0));
    }

    /// Strict mode accepts a subset of what lenient mode accepts, and agrees
    /// on the consumed length.
    #[test]
    fn strict_is_a_subset(data in structured_candidate()) {
        let strict = Options::builder().with_strict().build();
        if let Ok((strict_ial, strict_consumed)) = parse_ial(&data, &strict) {
            let lenient = parse_ial(&data, &Options::default());
            prop_assert_eq!(lenient, Ok((strict_ial, strict_consumed)));
        }
    }
}
