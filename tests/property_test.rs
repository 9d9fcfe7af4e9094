//! Property-based tests using proptest

use std::collections::BTreeMap;

use morsetree::domain::{DomainError, MorseTree};
use proptest::prelude::*;

fn code_strategy() -> impl Strategy<Value = String> {
    "[.-]{1,8}"
}

fn bindings_strategy() -> impl Strategy<Value = Vec<(String, char)>> {
    prop::collection::btree_map(code_strategy(), any::<char>(), 1..40)
        .prop_map(|m: BTreeMap<String, char>| m.into_iter().collect())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn prop_insert_then_decode_returns_character(
        c in any::<char>(),
        code in code_strategy()
    ) {
        let mut tree = MorseTree::new();
        prop_assert!(tree.insert(c, &code).is_ok());
        prop_assert_eq!(tree.decode(&code), Ok(c));
    }

    #[test]
    fn prop_insertion_order_is_irrelevant(bindings in bindings_strategy()) {
        let mut tree = MorseTree::new();
        for (code, c) in &bindings {
            prop_assert!(tree.insert(*c, code).is_ok());
        }
        for (code, c) in &bindings {
            prop_assert_eq!(tree.decode(code), Ok(*c));
        }
        prop_assert_eq!(tree.len(), bindings.len());
    }

    #[test]
    fn prop_second_different_binding_is_rejected(
        first in any::<char>(),
        second in any::<char>(),
        code in code_strategy()
    ) {
        prop_assume!(first != second);
        let mut tree = MorseTree::new();
        tree.insert(first, &code).unwrap();
        let rejected = matches!(
            tree.insert(second, &code),
            Err(DomainError::DuplicateBinding { .. })
        );
        prop_assert!(rejected);
        prop_assert_eq!(tree.decode(&code), Ok(first));
    }

    #[test]
    fn prop_foreign_symbol_never_decodes(
        prefix in "[.-]{0,4}",
        bad in "[^.-]",
        suffix in "[.-]{0,4}"
    ) {
        let mut tree = MorseTree::new();
        tree.insert('x', &format!("{prefix}.{suffix}")).unwrap();
        let code = format!("{prefix}{bad}{suffix}");
        let invalid = matches!(tree.decode(&code), Err(DomainError::InvalidCode { .. }));
        prop_assert!(invalid);
    }

    #[test]
    fn prop_decode_never_panics(bindings in bindings_strategy(), probe in ".{0,12}") {
        let mut tree = MorseTree::new();
        for (code, c) in &bindings {
            let _ = tree.insert(*c, code);
        }
        let _ = tree.decode(&probe);
    }
}
