//! Linkages: the typed, queryable result of one ranked parse.

use nonempty::NonEmpty;
use tracing::{debug, trace};

use crate::{
    ChosenDisjunct, DomainInfo, Extractor, Link, LinkageError, LinkageInfo, ParseOptions,
    Sublinkage,
};

/// Corpus score reported for a word that took no part in the parse.
pub const UNUSED_WORD_CORPUS_SCORE: f64 = 99.999;

/// One ranked parse of a sentence.
///
/// A linkage owns copies of the sentence's words, the chosen disjunct of
/// every word, and one or more [`Sublinkage`]s. Link accessors read from the
/// *current* sublinkage, selected with
/// [`Linkage::set_current_sublinkage`]. Every accessor checks its index and
/// returns `None` (or an empty value) rather than panicking.
#[derive(Debug, Clone)]
pub struct Linkage {
    rank: usize,
    words: Vec<String>,
    pub(crate) sublinkages: NonEmpty<Sublinkage>,
    pub(crate) current: usize,
    pub(crate) unionized: bool,
    info: Option<LinkageInfo>,
    disjuncts: Vec<Option<ChosenDisjunct>>,
}

impl Linkage {
    /// Build the linkage for parse `rank` from `extractor`.
    ///
    /// A parse is split into parallel sublinkages only when
    /// [`ParseOptions::use_fat_linkages`] is set and the extractor reports
    /// that the parse decomposes.
    pub fn create<E>(
        rank: usize,
        extractor: &mut E,
        options: &ParseOptions,
    ) -> Result<Self, LinkageError>
    where
        E: Extractor + ?Sized,
    {
        let available = extractor.num_linkages();
        if rank >= available {
            return Err(LinkageError::RankOutOfRange { rank, available });
        }

        let fat = options.use_fat_linkages && extractor.has_fat_down(rank);
        let link_sets = if fat {
            extractor.extract_fat(rank)
        } else {
            NonEmpty::new(extractor.extract_thin(rank))
        };

        let words = extractor.words().to_vec();
        let num_words = words.len();
        for link in link_sets.iter().flatten() {
            if link.left_word >= link.right_word || link.right_word >= num_words {
                return Err(LinkageError::LinkOutOfBounds {
                    left: link.left_word,
                    right: link.right_word,
                    num_words,
                });
            }
        }

        let disjuncts = match extractor.chosen_disjuncts() {
            [] => vec![None; num_words],
            chosen if chosen.len() == num_words => chosen.to_vec(),
            chosen => {
                return Err(LinkageError::DisjunctCount {
                    expected: num_words,
                    found: chosen.len(),
                });
            }
        };

        let info = extractor.link_info(rank).cloned();
        let improper = fat && info.as_ref().is_some_and(|info| info.improper_fat_linkage);
        let sublinkages = link_sets.map(|links| Sublinkage::new(links).improper(improper));

        debug!(
            rank,
            num_words,
            num_sublinkages = sublinkages.len(),
            fat,
            "created linkage"
        );
        if options.detailed() {
            for (index, sublinkage) in sublinkages.iter().enumerate() {
                debug!(rank, index, links = ?sublinkage.links(), "extracted sublinkage");
            }
        }

        Ok(Self {
            rank,
            words,
            sublinkages,
            current: 0,
            unionized: false,
            info,
            disjuncts,
        })
    }

    /// The rank this linkage was created for.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn num_sublinkages(&self) -> usize {
        self.sublinkages.len()
    }

    pub fn sublinkage(&self, index: usize) -> Option<&Sublinkage> {
        self.sublinkages.get(index)
    }

    pub fn sublinkages(&self) -> impl Iterator<Item = &Sublinkage> {
        self.sublinkages.iter()
    }

    /// Index of the sublinkage the link accessors read from.
    pub fn current_sublinkage(&self) -> usize {
        self.current
    }

    /// Select the sublinkage the link accessors read from. Returns `false`,
    /// leaving the selection unchanged, if `index` is out of range.
    pub fn set_current_sublinkage(&mut self, index: usize) -> bool {
        if index >= self.sublinkages.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Whether [`Linkage::compute_union`] has run.
    pub fn is_unionized(&self) -> bool {
        self.unionized
    }

    fn current(&self) -> &Sublinkage {
        // `current` is only ever set to a checked index.
        self.sublinkages
            .get(self.current)
            .unwrap_or(self.sublinkages.first())
    }

    /// Number of links in the current sublinkage.
    pub fn num_links(&self) -> usize {
        self.current().num_links()
    }

    pub fn link(&self, index: usize) -> Option<&Link> {
        self.current().link(index)
    }

    pub fn link_lword(&self, index: usize) -> Option<usize> {
        self.link(index).map(|link| link.left_word)
    }

    pub fn link_rword(&self, index: usize) -> Option<usize> {
        self.link(index).map(|link| link.right_word)
    }

    pub fn link_label(&self, index: usize) -> Option<&str> {
        self.link(index).map(|link| link.name.as_str())
    }

    pub fn link_llabel(&self, index: usize) -> Option<&str> {
        self.link(index).map(|link| link.left_label.as_str())
    }

    pub fn link_rlabel(&self, index: usize) -> Option<&str> {
        self.link(index).map(|link| link.right_label.as_str())
    }

    /// Distance between the link's endpoints, not counting interior words
    /// that no link of the current sublinkage touches.
    pub fn link_length(&self, index: usize) -> Option<usize> {
        self.current().visible_length(index, self.num_words())
    }

    pub fn link_domains(&self, index: usize) -> Option<&DomainInfo> {
        self.current().domains(index)
    }

    pub fn link_num_domains(&self, index: usize) -> Option<usize> {
        self.link_domains(index).map(DomainInfo::len)
    }

    pub fn link_domain_names(&self, index: usize) -> Option<&[char]> {
        self.link_domains(index).map(DomainInfo::names)
    }

    /// The violation recorded for the current sublinkage.
    pub fn violation_name(&self) -> Option<&str> {
        self.current().violation()
    }

    fn chosen(&self, word: usize) -> Option<&ChosenDisjunct> {
        self.disjuncts.get(word)?.as_ref()
    }

    /// Display form of the disjunct word `word` used; empty for words that
    /// took no part in the parse.
    pub fn disjunct_str(&self, word: usize) -> &str {
        self.chosen(word).map_or("", |disjunct| disjunct.text.as_str())
    }

    /// Cost of the disjunct word `word` used; `0.0` for unused words.
    pub fn disjunct_cost(&self, word: usize) -> f64 {
        self.chosen(word).map_or(0.0, |disjunct| disjunct.cost)
    }

    pub fn disjunct_corpus_score(&self, word: usize) -> f64 {
        self.chosen(word)
            .map_or(UNUSED_WORD_CORPUS_SCORE, |disjunct| disjunct.corpus_score)
    }

    /// Parse metadata supplied by extraction.
    pub fn info(&self) -> Option<&LinkageInfo> {
        self.info.as_ref()
    }

    pub fn unused_word_cost(&self) -> usize {
        self.info.as_ref().map_or(0, |info| info.unused_word_cost)
    }

    /// Sum of the costs of all chosen disjuncts.
    pub fn total_disjunct_cost(&self) -> f64 {
        self.info.as_ref().map_or(0.0, |info| info.disjunct_cost)
    }

    pub fn link_cost(&self) -> usize {
        self.info.as_ref().map_or(0, |info| info.link_cost)
    }

    pub fn and_cost(&self) -> usize {
        self.info.as_ref().map_or(0, |info| info.and_cost)
    }

    pub fn corpus_cost(&self) -> f64 {
        self.info.as_ref().map_or(0.0, |info| info.corpus_cost)
    }

    pub fn is_fat(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.fat)
    }

    pub fn is_canonical(&self) -> bool {
        self.info.as_ref().is_none_or(|info| info.canonical)
    }

    pub fn is_improper(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.improper_fat_linkage)
    }

    pub fn has_inconsistent_domains(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.inconsistent_domains)
    }
}

/// Release a linkage and everything it owns. `None` is accepted and ignored.
pub fn delete(linkage: Option<Linkage>) {
    if let Some(linkage) = linkage {
        trace!(
            rank = linkage.rank,
            num_sublinkages = linkage.num_sublinkages(),
            "deleting linkage"
        );
        drop(linkage);
    }
}
