//! One concrete set of links together with its post-processing results.

use crate::{DomainInfo, Link, PostProcessData};

/// A set of links plus, per link, the domains it belongs to, and the
/// violation the sublinkage was found guilty of, if any.
///
/// The domain table always has one entry per link; before post-processing
/// every entry is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sublinkage {
    links: Vec<Link>,
    pp_info: Vec<DomainInfo>,
    violation: Option<String>,
    pp_data: Option<PostProcessData>,
    improper: bool,
}

impl Sublinkage {
    /// A sublinkage over `links` with no annotation.
    pub fn new(links: Vec<Link>) -> Self {
        let pp_info = vec![DomainInfo::default(); links.len()];
        Self {
            links,
            pp_info,
            violation: None,
            pp_data: None,
            improper: false,
        }
    }

    pub(crate) fn improper(mut self, improper: bool) -> Self {
        self.improper = improper;
        self
    }

    pub(crate) fn from_parts(
        links: Vec<Link>,
        pp_info: Vec<DomainInfo>,
        violation: Option<String>,
        improper: bool,
    ) -> Self {
        debug_assert_eq!(links.len(), pp_info.len());
        Self {
            links,
            pp_info,
            violation,
            pp_data: None,
            improper,
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }

    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Domain annotation of link `index`.
    pub fn domains(&self, index: usize) -> Option<&DomainInfo> {
        self.pp_info.get(index)
    }

    pub fn domain_table(&self) -> &[DomainInfo] {
        &self.pp_info
    }

    /// The consistency rule this sublinkage violates, if any.
    pub fn violation(&self) -> Option<&str> {
        self.violation.as_deref()
    }

    pub fn pp_data(&self) -> Option<&PostProcessData> {
        self.pp_data.as_ref()
    }

    /// Whether this sublinkage is a malformed by-product of conjunction
    /// decomposition.
    pub fn is_improper(&self) -> bool {
        self.improper
    }

    /// Drop the previous annotation, leaving one empty entry per link.
    pub(crate) fn clear_annotation(&mut self) {
        self.pp_info.clear();
        self.pp_info.resize(self.links.len(), DomainInfo::default());
        self.violation = None;
        self.pp_data = None;
    }

    /// Record a checker's result. Missing entries stay empty, surplus
    /// entries are dropped.
    pub(crate) fn annotate(
        &mut self,
        domains: Vec<Vec<char>>,
        violation: Option<String>,
        pp_data: PostProcessData,
    ) {
        for (slot, names) in self.pp_info.iter_mut().zip(domains) {
            *slot = DomainInfo::new(names);
        }
        self.violation = violation;
        self.pp_data = Some(pp_data);
    }

    /// For each word position `0..=num_words`, whether any link touches it.
    pub(crate) fn word_has_link(&self, num_words: usize) -> Vec<bool> {
        let mut has_link = vec![false; num_words + 1];
        for link in &self.links {
            has_link[link.left_word] = true;
            has_link[link.right_word] = true;
        }
        has_link
    }

    /// Length of link `index`, not counting interior words that no link
    /// touches.
    pub(crate) fn visible_length(&self, index: usize, num_words: usize) -> Option<usize> {
        let link = self.links.get(index)?;
        let has_link = self.word_has_link(num_words);
        let skipped = (link.left_word + 1..link.right_word)
            .filter(|&word| !has_link[word])
            .count();
        Some(link.right_word - link.left_word - skipped)
    }
}
