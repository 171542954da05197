//! Property-based tests for the string-joining helpers
//!
//! The joining contract: no leading or trailing separator, empty input
//! yields an empty string, and for separator-free elements the join is
//! invertible by splitting on the separator.

use annot::annot::joining::{mk_string, mk_string_spaced};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(vec![], "")]
#[case(vec!["one"], "one")]
#[case(vec!["a", "b"], "a b")]
#[case(vec!["John", "Smith", "went", "to", "China", "."], "John Smith went to China .")]
fn spaced_join_cases(#[case] items: Vec<&str>, #[case] expected: &str) {
    assert_eq!(mk_string_spaced(&items), expected);
}

#[rstest]
#[case("-", vec!["a", "b", "c"], "a-b-c")]
#[case(", ", vec!["x"], "x")]
#[case("||", vec![], "")]
fn custom_separator_cases(#[case] sep: &str, #[case] items: Vec<&str>, #[case] expected: &str) {
    assert_eq!(mk_string(&items, sep), expected);
}

#[test]
fn integers_join_like_strings() {
    assert_eq!(mk_string_spaced(&[0, 5, 11, 16, 19, 24]), "0 5 11 16 19 24");
    assert_eq!(mk_string(&[7], " "), "7");
}

proptest! {
    /// For elements containing no occurrence of the separator,
    /// split(join(S, sep), sep) == S.
    #[test]
    fn join_then_split_round_trips(items in prop::collection::vec("[a-z0-9]{1,8}", 1..10)) {
        let joined = mk_string(&items, " ");
        let split: Vec<String> = joined.split(' ').map(str::to_string).collect();
        prop_assert_eq!(split, items);
    }

    #[test]
    fn multichar_separator_round_trips(items in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let joined = mk_string(&items, "||");
        let split: Vec<String> = joined.split("||").map(str::to_string).collect();
        prop_assert_eq!(split, items);
    }

    /// A single element is passed through untouched, whatever the separator.
    #[test]
    fn singleton_join_is_identity(item in "[a-zA-Z0-9 .,]{0,20}", sep in "[-|;]{1,3}") {
        prop_assert_eq!(mk_string(&[item.clone()], &sep), item);
    }

    /// Joining n elements with a single-char separator emits exactly n - 1
    /// separators beyond the element text.
    #[test]
    fn separator_count_is_elements_minus_one(items in prop::collection::vec("[a-z]{1,5}", 1..10)) {
        let joined = mk_string(&items, "#");
        let separators = joined.matches('#').count();
        prop_assert_eq!(separators, items.len() - 1);
    }
}
