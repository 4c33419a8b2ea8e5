//! Property-based tests for the calculator engine and history store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use reckoner::engine::{Calculator, CompletedCalculation, KeyAction, Operator};
use reckoner::history::{HistoryStore, MemoryStorage};

prop_compose! {
    fn arbitrary_operator()(variant in 0..5u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            3 => Operator::Divide,
            _ => Operator::Modulo,
        }
    }
}

fn arbitrary_action() -> impl Strategy<Value = KeyAction> {
    prop_oneof![
        (0..10u32).prop_map(|d| KeyAction::Digit(char::from_digit(d, 10).expect("digit"))),
        Just(KeyAction::Decimal),
        arbitrary_operator().prop_map(KeyAction::Operator),
        Just(KeyAction::Evaluate),
        Just(KeyAction::ClearAll),
        Just(KeyAction::Backspace),
    ]
}

prop_compose! {
    fn arbitrary_record()(
        expression in ".*",
        result in ".*",
        seconds in 0..4_000_000_000i64,
        nanos in 0..1_000_000_000u32,
    ) -> CompletedCalculation {
        CompletedCalculation {
            expression,
            result,
            timestamp: Utc.timestamp_opt(seconds, nanos).single().expect("valid timestamp"),
        }
    }
}

proptest! {
    #[test]
    fn decimal_point_is_idempotent(digits in "[0-9]{1,9}") {
        let mut once = Calculator::new();
        for d in digits.chars() {
            once.input_digit(d);
        }

        let mut twice = once.clone();

        once.input_decimal();
        twice.input_decimal();
        twice.input_decimal();

        prop_assert_eq!(once.entry(), twice.entry());
    }

    #[test]
    fn entry_is_never_empty_and_has_at_most_one_decimal_point(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut calculator = Calculator::new();

        for action in &actions {
            action.apply(&mut calculator);
            prop_assert!(!calculator.entry().is_empty());
            prop_assert!(calculator.entry().matches('.').count() <= 1);
        }
    }

    #[test]
    fn clear_all_always_resets_the_pending_chain(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut calculator = Calculator::new();
        for action in &actions {
            action.apply(&mut calculator);
        }

        calculator.clear_all();

        prop_assert_eq!(calculator.entry(), "0");
        prop_assert_eq!(calculator.expression(), "");
        // Nothing is pending, so equals produces no record
        prop_assert!(calculator.evaluate().is_none());
    }

    #[test]
    fn toggle_sign_twice_preserves_the_value(digits in "[1-9][0-9]{0,8}") {
        let mut calculator = Calculator::new();
        for d in digits.chars() {
            calculator.input_digit(d);
        }

        let before: f64 = calculator.entry().parse().expect("numeric entry");
        calculator.toggle_sign();
        calculator.toggle_sign();
        let after: f64 = calculator.entry().parse().expect("numeric entry");

        prop_assert_eq!(before, after);
    }

    #[test]
    fn backspace_never_leaves_an_empty_entry(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let mut calculator = Calculator::new();
        for action in &actions {
            action.apply(&mut calculator);
        }

        calculator.backspace();
        prop_assert!(!calculator.entry().is_empty());
    }

    #[test]
    fn history_is_ordered_newest_first(count in 1..20usize) {
        let mut store = HistoryStore::load(MemoryStorage::new());

        for i in 0..count {
            let record = CompletedCalculation {
                expression: format!("{i} + 0 ="),
                result: format!("{i}"),
                timestamp: Utc::now(),
            };
            store.append(record).expect("append");
        }

        prop_assert_eq!(store.len(), count);
        for (position, entry) in store.entries().iter().enumerate() {
            let appended = count - 1 - position;
            prop_assert_eq!(entry.result.clone(), format!("{appended}"));
        }
    }

    #[test]
    fn history_round_trips_through_storage(
        records in prop::collection::vec(arbitrary_record(), 0..10)
    ) {
        let mut storage = MemoryStorage::new();

        let mut store = HistoryStore::load(&mut storage);
        for record in &records {
            store.append(record.clone()).expect("append");
        }
        let before: Vec<_> = store.entries().to_vec();
        drop(store);

        let reloaded = HistoryStore::load(&mut storage);
        prop_assert_eq!(reloaded.entries(), before.as_slice());
    }

    #[test]
    fn arbitrary_key_sequences_resolve_to_a_defined_state(
        keys in prop::collection::vec("[0-9+*/%.,=cC-]|Enter|Escape|Backspace", 0..50)
    ) {
        let mut calculator = Calculator::new();
        let mut store = HistoryStore::load(MemoryStorage::new());

        for key in &keys {
            if let Some(action) = KeyAction::from_key(key) {
                if let Some(record) = action.apply(&mut calculator) {
                    store.append(record).expect("append");
                }
            }
        }

        prop_assert!(!calculator.entry().is_empty());
    }
}
