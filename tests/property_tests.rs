//! Property-based tests for the substitution and rendering contracts.

use percent_format::{format, to_string, Formatter, Render};
use proptest::prelude::*;

// Literal text that can never form or escape a placeholder
fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:!?\\[\\]{}]{0,12}"
}

fn as_args(values: &[i64]) -> Vec<&dyn Render> {
    values.iter().map(|v| v as &dyn Render).collect()
}

proptest! {
    #[test]
    fn prop_no_placeholders_is_identity(
        template in "[a-zA-Z0-9 ,.:?]{0,40}",
        values in prop::collection::vec(any::<i64>(), 0..5),
    ) {
        prop_assert_eq!(format(&template, &as_args(&values)), template);
    }

    #[test]
    fn prop_each_placeholder_takes_its_argument(
        segments in prop::collection::vec(literal(), 1..6),
        seed in prop::collection::vec(any::<i64>(), 5),
    ) {
        let values = &seed[..segments.len() - 1];
        let template = segments.join("%?");

        let mut expected = segments[0].clone();
        for (value, segment) in values.iter().zip(&segments[1..]) {
            expected.push_str(&value.to_string());
            expected.push_str(segment);
        }

        prop_assert_eq!(format(&template, &as_args(values)), expected);
    }

    #[test]
    fn prop_missing_arguments_become_markers(
        placeholders in 1usize..6,
        supplied in 0usize..6,
    ) {
        let supplied = supplied.min(placeholders);
        let values: Vec<i64> = (0..supplied as i64).collect();
        let template = vec!["%?"; placeholders].join(",");

        let expected: Vec<String> = (0..placeholders)
            .map(|i| if i < supplied { i.to_string() } else { "?".to_string() })
            .collect();

        prop_assert_eq!(format(&template, &as_args(&values)), expected.join(","));
    }

    #[test]
    fn prop_extra_arguments_are_dropped(
        values in prop::collection::vec(any::<i64>(), 1..8),
    ) {
        prop_assert_eq!(format("[%?]", &as_args(&values)), format!("[{}]", values[0]));
    }

    #[test]
    fn prop_escaped_placeholders_are_literal(
        segments in prop::collection::vec(literal(), 1..6),
    ) {
        let template = segments.join("%%?");
        prop_assert_eq!(format(&template, &[]), segments.join("%?"));
    }

    #[test]
    fn prop_sequences_are_bracketed(values in prop::collection::vec(any::<i32>(), 0..10)) {
        let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(to_string(&values), format!("[{}]", joined.join(", ")));
    }

    #[test]
    fn prop_rendering_is_deterministic(
        values in prop::collection::vec((any::<f64>(), any::<bool>()), 0..6),
        precision in 0usize..12,
    ) {
        let mut formatter = Formatter::new();
        formatter.set_precision(precision);
        let first = formatter.format("%? / %?", &[&values, &precision]);
        let second = formatter.format("%? / %?", &[&values, &precision]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_booleans_are_words(b in any::<bool>()) {
        prop_assert_eq!(to_string(&b), b.to_string());
    }
}
