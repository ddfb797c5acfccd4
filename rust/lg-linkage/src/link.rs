//! Links between word positions.

use std::fmt;

use serde::Deserialize;

/// A labeled connection between two word positions of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Link {
    /// Index of the left word.
    pub left_word: usize,
    /// Index of the right word. Always greater than `left_word`.
    pub right_word: usize,
    /// The link type, e.g. `Wd`.
    pub name: String,
    /// The connector string used on the left word.
    pub left_label: String,
    /// The connector string used on the right word.
    pub right_label: String,
}

impl Link {
    /// A link whose connector labels both equal its name.
    pub fn new(left_word: usize, right_word: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            left_word,
            right_word,
            left_label: name.clone(),
            right_label: name.clone(),
            name,
        }
    }

    /// Replace the connector labels.
    pub fn with_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_label = left.into();
        self.right_label = right.into();
        self
    }

    /// The identity under which links are merged in a union.
    pub fn key(&self) -> LinkKey<'_> {
        LinkKey {
            left_word: self.left_word,
            right_word: self.right_word,
            name: &self.name,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} ({} / {})",
            self.left_word, self.right_word, self.name, self.left_label, self.right_label
        )
    }
}

/// Link identity: both endpoints and the link name. Labels do not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkKey<'a> {
    pub left_word: usize,
    pub right_word: usize,
    pub name: &'a str,
}
