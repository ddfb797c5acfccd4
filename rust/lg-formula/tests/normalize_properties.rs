//! Property tests for expression normalization.

use lg_formula::{Atom, Direction, Exp, LinkKind, NodeKind, normalize};
use proptest::prelude::*;

fn arb_connector() -> impl Strategy<Value = Exp> {
    ("[A-Z][a-z]?", any::<bool>(), any::<bool>()).prop_map(|(name, right, multi)| {
        let direction = if right { Direction::Right } else { Direction::Left };
        if multi {
            Exp::multi(name, direction)
        } else {
            Exp::connector(name, direction)
        }
    })
}

fn arb_exp() -> impl Strategy<Value = Exp> {
    arb_connector().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 1..=3).prop_map(Exp::And),
            proptest::collection::vec(inner, 0..=3).prop_map(Exp::Or),
        ]
    })
}

/// Encode `leaves` as the legacy right-nested binary chain of one operator.
fn right_nested(leaves: &[Exp], operator: fn(Vec<Exp>) -> Exp) -> Exp {
    match leaves {
        [] => operator(Vec::new()),
        [only] => only.clone(),
        [first, rest @ ..] => operator(vec![first.clone(), right_nested(rest, operator)]),
    }
}

fn connector_leaves(atom: &Atom) -> usize {
    match atom {
        Atom::Node {
            kind: NodeKind::Connector,
            ..
        } if !atom.is_null_connector() => 1,
        Atom::Node { .. } => 0,
        Atom::Link { outgoing, .. } => outgoing.iter().map(connector_leaves).sum(),
    }
}

/// The last child of an operator never repeats that operator, unless it is
/// itself the normalization of an empty list.
fn continuation_is_flat(atom: &Atom) -> bool {
    match atom {
        Atom::Node { .. } => true,
        Atom::Link { kind, outgoing } => {
            let last_ok = match outgoing.last().and_then(Atom::link_kind) {
                Some(last) => last != *kind,
                None => true,
            };
            last_ok && outgoing.iter().all(continuation_is_flat)
        }
    }
}

proptest! {
    #[test]
    fn normalization_preserves_every_connector(exp in arb_exp()) {
        let atom = normalize(&exp);
        prop_assert_eq!(connector_leaves(&atom), exp.connector_count());
    }

    #[test]
    fn normalization_leaves_no_nested_continuation(exp in arb_exp()) {
        prop_assert!(continuation_is_flat(&normalize(&exp)));
    }

    #[test]
    fn right_nested_chains_become_one_operator(
        leaves in proptest::collection::vec(arb_connector(), 2..8),
        conjunction in any::<bool>(),
    ) {
        let operator: fn(Vec<Exp>) -> Exp = if conjunction { Exp::And } else { Exp::Or };
        let kind = if conjunction { LinkKind::And } else { LinkKind::Or };
        let atom = normalize(&right_nested(&leaves, operator));

        let expected: Vec<Atom> = leaves.iter().map(normalize).collect();
        prop_assert_eq!(atom.link_kind(), Some(kind));
        prop_assert_eq!(atom.outgoing(), expected.as_slice());
    }

    #[test]
    fn normalization_is_repeatable(exp in arb_exp()) {
        let before = exp.clone();
        let first = normalize(&exp);
        let second = normalize(&exp);
        prop_assert_eq!(first, second);
        prop_assert_eq!(exp, before);
    }
}
