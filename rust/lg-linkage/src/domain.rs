//! Domain annotations attached to links by post-processing.

use std::fmt;

/// The domains a link belongs to, as single-character tags in the order the
/// consistency checker reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainInfo {
    names: Vec<char>,
}

impl DomainInfo {
    pub fn new(names: Vec<char>) -> Self {
        Self { names }
    }

    /// The domain tags.
    pub fn names(&self) -> &[char] {
        &self.names
    }

    /// Number of domains the link belongs to.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<char>> for DomainInfo {
    fn from(names: Vec<char>) -> Self {
        Self::new(names)
    }
}

impl fmt::Display for DomainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.names {
            write!(f, "({name})")?;
        }
        Ok(())
    }
}

/// Checker-side bookkeeping kept with a post-processed sublinkage.
///
/// The driver stores it without interpreting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcessData {
    /// Number of domains the checker found.
    pub num_domains: usize,
    /// For each domain, the index of the link that starts it.
    pub domain_starts: Vec<usize>,
}
