//! Connector expressions as boolean formulas.
//!
//! A link-grammar dictionary describes each word by a connector expression:
//! a tree of connectors joined by `&` (all of these, in order) and `or`
//! (one of these). This crate converts such an [`Exp`] into an [`Atom`], the
//! prefix-notation formula used by the Viterbi-style search:
//!
//! ```text
//! (S- & (O+ or ()))        <AND>
//!                            <CONNECTOR : S->
//!                            <OR>
//!                              <CONNECTOR : O+>
//!                              <CONNECTOR : 0>
//! ```
//!
//! Basic usage:
//!
//! ```
//! use lg_formula::{Direction, Exp, LinkKind, MemoryDictionary, word_formula};
//!
//! let mut dict = MemoryDictionary::new();
//! dict.insert(
//!     "sing",
//!     Exp::and([
//!         Exp::connector("S", Direction::Left),
//!         Exp::optional(Exp::connector("O", Direction::Right)),
//!     ]),
//! );
//!
//! let formula = word_formula(&dict, "sing").unwrap();
//! assert_eq!(formula.link_kind(), Some(LinkKind::WordDisjunct));
//! assert_eq!(formula.outgoing()[0].name(), Some("sing"));
//! ```

mod atom;
mod dictionary;
mod expression;
mod normalize;

pub use atom::*;
pub use dictionary::*;
pub use expression::*;
pub use normalize::*;
