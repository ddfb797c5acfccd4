//! Expression normalization.
//!
//! [`normalize`] turns a dictionary [`Exp`] into an [`Atom`] formula. Chains
//! of the same operator nested through the last child (the right-hand
//! continuation) are flattened into one n-ary atom, so
//! `A & (B & (C & D))` becomes a single AND with four children. Nesting
//! through any other position, or through a different operator, is kept as a
//! nested atom.

use tracing::trace;

use crate::{Atom, Dictionary, Exp, LEFT_WALL_WORD, LinkKind};

/// Normalize `exp` into a fresh formula atom.
///
/// An operator without children becomes the null connector `0` in place;
/// dropping those markers is left to the caller.
pub fn normalize(exp: &Exp) -> Atom {
    let (kind, children) = match exp {
        Exp::Connector(connector) => return Atom::connector(connector.to_string()),
        Exp::And(children) => (LinkKind::And, children),
        Exp::Or(children) => (LinkKind::Or, children),
    };

    let Some((continuation, leading)) = children.split_last() else {
        return Atom::null_connector();
    };

    let mut outgoing: Vec<Atom> = leading.iter().map(normalize).collect();
    let mut residual = continuation;
    loop {
        if let Exp::And(nested) | Exp::Or(nested) = residual {
            if exp.same_operator(residual) {
                if let Some((next, nested_leading)) = nested.split_last() {
                    outgoing.extend(nested_leading.iter().map(normalize));
                    residual = next;
                    continue;
                }
            }
        }
        outgoing.push(normalize(residual));
        break;
    }

    Atom::link(kind, outgoing)
}

/// The formula a word must satisfy, paired with the word itself.
///
/// Returns a `WordDisjunct` atom whose children are the word node and the
/// normalized expression, or `None` when the dictionary does not know `word`.
pub fn word_formula<D: Dictionary + ?Sized>(dictionary: &D, word: &str) -> Option<Atom> {
    let exp = dictionary.lookup(word)?;
    let formula = normalize(exp);
    trace!(word, expression = %exp, "normalized word formula");

    Some(Atom::link(
        LinkKind::WordDisjunct,
        vec![Atom::word(word), formula],
    ))
}

/// The search state a parse starts from: the left wall's formula, waiting to
/// be satisfied.
pub fn initial_state<D: Dictionary + ?Sized>(dictionary: &D) -> Option<Atom> {
    let wall = word_formula(dictionary, LEFT_WALL_WORD)?;
    Some(Atom::link(LinkKind::State, vec![wall]))
}
