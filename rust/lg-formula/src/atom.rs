//! Boolean formula atoms.
//!
//! Atoms are the prefix-notation form of a connector expression consumed by
//! the alternate (Viterbi-style) search. A [`Atom::Node`] is a leaf carrying
//! text; a [`Atom::Link`] is an operator over an ordered outgoing set. Atoms
//! are built once by [`crate::normalize`] and never mutated afterwards.

use std::fmt;

/// The text of the null connector that marks an optional clause.
pub const NULL_CONNECTOR: &str = "0";

/// Kinds of leaf atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A connector string such as `@A+`, or the null connector `0`.
    Connector,
    /// The literal text of a word.
    Word,
}

/// Kinds of operator atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    And,
    Or,
    /// A word paired with the formula it must satisfy.
    WordDisjunct,
    /// A parser state: the formulas still waiting to be satisfied.
    State,
}

impl NodeKind {
    fn label(self) -> &'static str {
        match self {
            NodeKind::Connector => "CONNECTOR",
            NodeKind::Word => "WORD",
        }
    }
}

impl LinkKind {
    fn label(self) -> &'static str {
        match self {
            LinkKind::And => "AND",
            LinkKind::Or => "OR",
            LinkKind::WordDisjunct => "WORD_DISJ",
            LinkKind::State => "STATE",
        }
    }
}

/// A formula atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Node { kind: NodeKind, name: String },
    Link { kind: LinkKind, outgoing: Vec<Atom> },
}

impl Atom {
    /// A connector leaf.
    pub fn connector(name: impl Into<String>) -> Self {
        Atom::Node {
            kind: NodeKind::Connector,
            name: name.into(),
        }
    }

    /// The null connector, marking an optional clause.
    pub fn null_connector() -> Self {
        Atom::connector(NULL_CONNECTOR)
    }

    /// A word leaf.
    pub fn word(name: impl Into<String>) -> Self {
        Atom::Node {
            kind: NodeKind::Word,
            name: name.into(),
        }
    }

    /// An operator atom over `outgoing`.
    pub fn link(kind: LinkKind, outgoing: Vec<Atom>) -> Self {
        Atom::Link { kind, outgoing }
    }

    /// Text of a leaf atom, `None` for operators.
    pub fn name(&self) -> Option<&str> {
        match self {
            Atom::Node { name, .. } => Some(name),
            Atom::Link { .. } => None,
        }
    }

    /// Children of an operator atom; leaves have none.
    pub fn outgoing(&self) -> &[Atom] {
        match self {
            Atom::Node { .. } => &[],
            Atom::Link { outgoing, .. } => outgoing,
        }
    }

    /// Operator kind, `None` for leaves.
    pub fn link_kind(&self) -> Option<LinkKind> {
        match self {
            Atom::Link { kind, .. } => Some(*kind),
            Atom::Node { .. } => None,
        }
    }

    /// Leaf kind, `None` for operators.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            Atom::Node { kind, .. } => Some(*kind),
            Atom::Link { .. } => None,
        }
    }

    pub fn is_null_connector(&self) -> bool {
        matches!(
            self,
            Atom::Node { kind: NodeKind::Connector, name } if name == NULL_CONNECTOR
        )
    }

    /// Collapse AND/OR atoms that have exactly one child into that child,
    /// recursively.
    ///
    /// Normalization does not produce any particular normal form, so
    /// single-child operators survive it. Null connectors are left in place.
    pub fn simplify(self) -> Atom {
        match self {
            Atom::Node { .. } => self,
            Atom::Link { kind, outgoing } => {
                let mut outgoing: Vec<Atom> = outgoing.into_iter().map(Atom::simplify).collect();
                if matches!(kind, LinkKind::And | LinkKind::Or) && outgoing.len() == 1 {
                    outgoing.remove(0)
                } else {
                    Atom::Link { kind, outgoing }
                }
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        match self {
            Atom::Node { kind, name } => {
                writeln!(f, "{:indent$}<{} : {}>", "", kind.label(), name)
            }
            Atom::Link { kind, outgoing } => {
                writeln!(f, "{:indent$}<{}>", "", kind.label())?;
                for child in outgoing {
                    child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_renders_prefix_notation() {
        let atom = Atom::link(
            LinkKind::WordDisjunct,
            vec![
                Atom::word("sing"),
                Atom::link(
                    LinkKind::Or,
                    vec![Atom::connector("S-"), Atom::null_connector()],
                ),
            ],
        );
        assert_eq!(
            atom.to_string(),
            "<WORD_DISJ>\n  <WORD : sing>\n  <OR>\n    <CONNECTOR : S->\n    <CONNECTOR : 0>\n"
        );
    }

    #[test]
    fn it_collapses_single_child_operators() {
        let atom = Atom::link(
            LinkKind::And,
            vec![Atom::link(LinkKind::Or, vec![Atom::connector("A+")])],
        );
        assert_eq!(atom.simplify(), Atom::connector("A+"));
    }

    #[test]
    fn it_keeps_single_child_word_disjuncts() {
        let atom = Atom::link(LinkKind::State, vec![Atom::word("LEFT-WALL")]);
        assert_eq!(atom.clone().simplify(), atom);
    }

    #[test]
    fn it_recognizes_the_null_connector() {
        assert!(Atom::null_connector().is_null_connector());
        assert!(!Atom::word("0").is_null_connector());
        assert!(!Atom::connector("O+").is_null_connector());
    }
}
