//! The dictionary collaborator.
//!
//! Reading dictionary files is not this crate's concern; anything that can
//! map a word to its connector expression implements [`Dictionary`].
//! Expressions handed out by a dictionary are shared and read-only: formula
//! atoms built from them must not be kept across a dictionary reload.

use std::collections::HashMap;

use crate::Exp;

/// The word that anchors the left end of every sentence.
pub const LEFT_WALL_WORD: &str = "LEFT-WALL";

/// The word that anchors the right end of a sentence, if the language has one.
pub const RIGHT_WALL_WORD: &str = "RIGHT-WALL";

/// Read access to the connector expressions of a dictionary.
pub trait Dictionary {
    /// The expression for `word`, or `None` if the word is unknown.
    fn lookup(&self, word: &str) -> Option<&Exp>;

    /// Whether the dictionary defines `word` at all.
    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, word: &str) -> Option<&Exp> {
        (**self).lookup(word)
    }

    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A dictionary held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    entries: HashMap<String, Exp>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `word`, returning the expression it replaced, if any.
    pub fn insert(&mut self, word: impl Into<String>, exp: Exp) -> Option<Exp> {
        self.entries.insert(word.into(), exp)
    }

    /// Number of defined words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn left_wall_defined(&self) -> bool {
        self.contains(LEFT_WALL_WORD)
    }

    pub fn right_wall_defined(&self) -> bool {
        self.contains(RIGHT_WALL_WORD)
    }
}

impl Dictionary for MemoryDictionary {
    fn lookup(&self, word: &str) -> Option<&Exp> {
        self.entries.get(word)
    }
}

impl<W: Into<String>> FromIterator<(W, Exp)> for MemoryDictionary {
    fn from_iter<T: IntoIterator<Item = (W, Exp)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(word, exp)| (word.into(), exp))
                .collect(),
        }
    }
}
