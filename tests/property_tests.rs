//! Property-based tests for greeting invariants.
//!
//! Tests validate:
//! 1. Formatting shape and trimming
//! 2. Strict and tolerant batches agree on all-valid input
//! 3. Tolerant output never exceeds input and preserves order
//! 4. Greeter statistics stay consistent with history

use greeter::{
    GreetError, Greeter, format_greeting, greet, greet_multiple, greet_multiple_safe, title_case,
};
use proptest::prelude::*;

/// Non-blank words without surrounding whitespace.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z' -]{0,15}[A-Za-z]"
}

/// Names that may be blank or padded.
fn maybe_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => word().prop_map(Some),
        1 => Just(Some(String::new())),
        1 => "[ \t]{1,4}".prop_map(Some),
        1 => Just(None),
    ]
}

// ===== Property 1: Formatting =====

proptest! {
    #[test]
    fn format_has_expected_shape(name in word(), greeting in word()) {
        let result = format_greeting(&name, &greeting);
        prop_assert_eq!(result.as_str(), format!("{}, {}!", greeting, name));
    }

    #[test]
    fn format_ignores_surrounding_whitespace(
        name in word(),
        greeting in word(),
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t]{0,3}",
    ) {
        let padded = format!("{}{}{}", pad_left, name, pad_right);
        prop_assert_eq!(format_greeting(&padded, &greeting), format_greeting(&name, &greeting));
    }

    #[test]
    fn blank_names_are_always_rejected(name in "[ \t\n]{0,8}", greeting in word()) {
        prop_assert_eq!(greet(&name, &greeting), Err(GreetError::EmptyValue { field: "name" }));
    }

    #[test]
    fn title_case_is_idempotent(name in "[a-zA-Z ]{0,24}") {
        let once = title_case(&name);
        prop_assert_eq!(title_case(&once), once);
    }
}

// ===== Property 2/3: Batch Policies =====

proptest! {
    #[test]
    fn strict_and_tolerant_agree_on_valid_input(names in prop::collection::vec(word(), 0..12)) {
        let strict = greet_multiple(&names, "Hello").expect("all names valid");
        let tolerant = greet_multiple_safe(names.iter().map(Some), "Hello");
        prop_assert!(tolerant.skipped.is_empty());
        prop_assert_eq!(strict, tolerant.greetings);
    }

    #[test]
    fn tolerant_output_accounts_for_every_entry(
        names in prop::collection::vec(maybe_name(), 0..16)
    ) {
        let outcome = greet_multiple_safe(names.iter().map(|n| n.as_deref()), "Hi");
        prop_assert_eq!(outcome.greetings.len() + outcome.skipped.len(), names.len());

        // Survivors appear in input order.
        let expected: Vec<String> = names
            .iter()
            .flatten()
            .filter(|n| !n.trim().is_empty())
            .map(|n| format!("Hi, {}!", n.trim()))
            .collect();
        prop_assert_eq!(outcome.messages(), expected);
    }

    #[test]
    fn strict_fails_iff_any_entry_is_blank(
        names in prop::collection::vec(maybe_name().prop_map(|n| n.unwrap_or_default()), 0..12)
    ) {
        let any_blank = names.iter().any(|n| n.trim().is_empty());
        let result = greet_multiple(&names, "Hello");
        prop_assert_eq!(result.is_err(), any_blank);
    }
}

// ===== Property 4: Greeter Statistics =====

proptest! {
    #[test]
    fn statistics_match_history(
        calls in prop::collection::vec((word(), prop::option::of(word())), 0..20)
    ) {
        let mut greeter = Greeter::default();
        for (name, greeting) in &calls {
            greeter.greet(name, greeting.as_deref()).expect("valid input");
        }

        let stats = greeter.statistics();
        prop_assert_eq!(stats.total_greetings, calls.len());
        prop_assert_eq!(stats.total_greetings, greeter.history().len());
        prop_assert!(stats.unique_names <= stats.total_greetings);
        prop_assert_eq!(stats.most_common_greeting.is_none(), calls.is_empty());
    }

    #[test]
    fn clear_history_resets_statistics(names in prop::collection::vec(word(), 1..10)) {
        let mut greeter = Greeter::with_greeting("Hey", false).expect("valid");
        for name in &names {
            greeter.greet(name, None).expect("valid");
        }
        greeter.clear_history();
        prop_assert_eq!(greeter.statistics().total_greetings, 0);
        prop_assert_eq!(greeter.config().default_greeting(), "Hey");
    }
}
