// Rust guideline compliant 2026-10-15

//! Property-based tests for the record store and session.
//!
//! These tests drive random sequences of add and delete actions and check the
//! identity and uniqueness invariants after every step.

use proptest::prelude::*;
use std::collections::HashSet;
use stockroom_core::{CategorySet, Session};

#[derive(Debug, Clone)]
enum Action {
    Add {
        name: String,
        category: String,
        price: String,
    },
    Delete(u64),
}

/// Generates names from a small pool, with random case and padding so that
/// duplicates are frequent.
fn arb_name() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("pen"), Just("mug"), Just("kettle"), Just("fork"), Just("")],
        any::<bool>(),
        prop_oneof![Just(""), Just(" "), Just("  ")],
    )
        .prop_map(|(base, upper, pad)| {
            let base = if upper { base.to_uppercase() } else { base.to_string() };
            format!("{pad}{base}{pad}")
        })
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Stationary".to_string()),
        Just("Kitchenware".to_string()),
        Just("Appliance".to_string()),
        Just(String::new()),
        Just("Toys".to_string()),
    ]
}

fn arb_price() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|cents| format!("{}.{:02}", cents / 100, cents % 100)),
        (1u32..100).prop_map(|n| format!("-{}", n)),
        Just("abc".to_string()),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (arb_name(), arb_category(), arb_price())
            .prop_map(|(name, category, price)| Action::Add { name, category, price }),
        1 => (0u64..12).prop_map(Action::Delete),
    ]
}

proptest! {
    /// Ids are strictly increasing in list order and never handed out twice.
    #[test]
    fn prop_ids_strictly_increase_and_never_repeat(
        actions in prop::collection::vec(arb_action(), 0..40)
    ) {
        let mut session = Session::new(CategorySet::default());
        let mut issued = HashSet::new();

        for action in actions {
            let next_before = session.store().next_id();
            match action {
                Action::Add { name, category, price } => {
                    if let Ok(record) = session.add(name, category, price) {
                        prop_assert_eq!(record.id, next_before);
                        prop_assert!(issued.insert(record.id), "id {} issued twice", record.id);
                    }
                }
                Action::Delete(id) => {
                    session.delete(id);
                }
            }

            prop_assert!(session.store().next_id() >= next_before);
            let ids: Vec<u64> = session.records().iter().map(|r| r.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids out of order: {:?}", ids);
        }
    }

    /// No two live records share a trimmed, lower-cased name.
    #[test]
    fn prop_live_names_are_unique(
        actions in prop::collection::vec(arb_action(), 0..40)
    ) {
        let mut session = Session::new(CategorySet::default());

        for action in actions {
            match action {
                Action::Add { name, category, price } => {
                    let _ = session.add(name, category, price);
                }
                Action::Delete(id) => {
                    session.delete(id);
                }
            }

            let keys: Vec<String> = session.records().iter().map(|r| r.name_key()).collect();
            let unique: HashSet<&String> = keys.iter().collect();
            prop_assert_eq!(unique.len(), keys.len());
        }
    }

    /// Every stored record satisfies the field invariants.
    #[test]
    fn prop_stored_records_are_valid(
        actions in prop::collection::vec(arb_action(), 0..40)
    ) {
        let mut session = Session::new(CategorySet::default());

        for action in actions {
            if let Action::Add { name, category, price } = action {
                let _ = session.add(name, category, price);
            }
        }

        for record in session.records() {
            prop_assert!(!record.name.trim().is_empty());
            prop_assert_eq!(record.name.trim(), record.name.as_str());
            prop_assert!(session.categories().contains(record.category));
            prop_assert!(record.price >= 0.0 && record.price.is_finite());
        }
    }

    /// A valid add grows the list by exactly one; a rejected one changes nothing.
    #[test]
    fn prop_add_changes_length_by_outcome(
        seed in prop::collection::vec((arb_name(), arb_category(), arb_price()), 0..10),
        (name, category, price) in (arb_name(), arb_category(), arb_price()),
    ) {
        let mut session = Session::new(CategorySet::default());
        for (n, c, p) in seed {
            let _ = session.add(n, c, p);
        }

        let before = session.records().to_vec();
        match session.add(name, category, price) {
            Ok(record) => {
                prop_assert_eq!(session.records().len(), before.len() + 1);
                prop_assert_eq!(session.records().last(), Some(&record));
            }
            Err(_) => {
                prop_assert_eq!(session.records(), before.as_slice());
            }
        }
    }

    /// Deleting removes exactly the matching record and keeps the order of the rest.
    #[test]
    fn prop_delete_removes_only_target(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..8),
        pick in any::<prop::sample::Index>(),
        absent_offset in 1u64..50,
    ) {
        let mut session = Session::new(CategorySet::default());
        for name in &names {
            session.add(name.as_str(), "Stationary", "1").unwrap();
        }

        let before = session.records().to_vec();
        let target = before[pick.index(before.len())].id;
        prop_assert!(session.delete(target));

        let expected: Vec<_> = before.iter().filter(|r| r.id != target).cloned().collect();
        prop_assert_eq!(session.records(), expected.as_slice());

        let after = session.records().to_vec();
        let absent = session.store().next_id() + absent_offset;
        prop_assert!(!session.delete(absent));
        prop_assert!(!session.delete(target));
        prop_assert_eq!(session.records(), after.as_slice());
    }
}
