//! Dictionary connector expressions.
//!
//! An [`Exp`] is the shape in which the dictionary hands out the linking
//! requirements of a word. The child lists of [`Exp::And`] and [`Exp::Or`]
//! are ordered: connectors are satisfied left to right. Dictionaries built
//! from the legacy representation encode an n-ary operator as a right-nested
//! chain of binary nodes, e.g. `A & (B & (C & D))`; both encodings are valid
//! input for [`crate::normalize`].

use std::fmt;

/// Which side of the word a connector points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Links to a word on the left (`-`).
    Left,
    /// Links to a word on the right (`+`).
    Right,
}

impl Direction {
    /// The single-character suffix used in connector strings.
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => '-',
            Direction::Right => '+',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '-' => Ok(Direction::Left),
            '+' => Ok(Direction::Right),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A typed, directional attachment point on a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connector {
    /// Connector type name, e.g. `Wd` or `Ss*s`.
    pub name: String,
    /// Which way the connector points.
    pub direction: Direction,
    /// A multi-connector (`@A+`) may be used by any number of links.
    pub multi: bool,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multi {
            write!(f, "@")?;
        }
        write!(f, "{}{}", self.name, self.direction)
    }
}

/// A connector expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    /// A single connector.
    Connector(Connector),
    /// All children must be satisfied, in order.
    And(Vec<Exp>),
    /// Exactly one child must be satisfied. An empty child makes the whole
    /// disjunction optional.
    Or(Vec<Exp>),
}

impl Exp {
    /// A plain connector leaf.
    pub fn connector(name: impl Into<String>, direction: Direction) -> Self {
        Exp::Connector(Connector {
            name: name.into(),
            direction,
            multi: false,
        })
    }

    /// A multi-connector leaf.
    pub fn multi(name: impl Into<String>, direction: Direction) -> Self {
        Exp::Connector(Connector {
            name: name.into(),
            direction,
            multi: true,
        })
    }

    /// An n-ary conjunction.
    pub fn and(children: impl IntoIterator<Item = Exp>) -> Self {
        Exp::And(children.into_iter().collect())
    }

    /// An n-ary disjunction.
    pub fn or(children: impl IntoIterator<Item = Exp>) -> Self {
        Exp::Or(children.into_iter().collect())
    }

    /// The empty expression, written `()` in dictionaries.
    pub fn empty() -> Self {
        Exp::And(Vec::new())
    }

    /// `(exp or ())`: the expression made optional.
    pub fn optional(exp: Exp) -> Self {
        Exp::Or(vec![exp, Exp::empty()])
    }

    /// Returns `true` for an operator node without children.
    pub fn is_empty(&self) -> bool {
        match self {
            Exp::Connector(_) => false,
            Exp::And(children) | Exp::Or(children) => children.is_empty(),
        }
    }

    /// Returns `true` if `other` is an operator node of the same kind.
    pub(crate) fn same_operator(&self, other: &Exp) -> bool {
        matches!(
            (self, other),
            (Exp::And(_), Exp::And(_)) | (Exp::Or(_), Exp::Or(_))
        )
    }

    /// Number of connector leaves in the tree.
    pub fn connector_count(&self) -> usize {
        match self {
            Exp::Connector(_) => 1,
            Exp::And(children) | Exp::Or(children) => {
                children.iter().map(Exp::connector_count).sum()
            }
        }
    }
}

impl From<Connector> for Exp {
    fn from(value: Connector) -> Self {
        Exp::Connector(value)
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (children, separator) = match self {
            Exp::Connector(connector) => return write!(f, "{connector}"),
            Exp::And(children) => (children, " & "),
            Exp::Or(children) => (children, " or "),
        };
        write!(f, "(")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, "{separator}")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
