//! The extraction collaborator.
//!
//! Extraction walks the parse forest left behind by the combinatorial search
//! and produces the links of one ranked parse. How it does so is not this
//! crate's concern; [`Extractor`] only fixes what it must hand over. Buffers
//! an extractor returns by reference may be reused for the next rank, so
//! [`crate::Linkage::create`] copies everything it keeps.

use nonempty::NonEmpty;
use serde::Deserialize;

use crate::{Link, LinkageError};

/// Cost and shape metadata of one ranked parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkageInfo {
    pub unused_word_cost: usize,
    pub disjunct_cost: f64,
    pub link_cost: usize,
    pub and_cost: usize,
    pub corpus_cost: f64,
    /// The parse decomposes into parallel conjuncts.
    pub fat: bool,
    pub canonical: bool,
    /// The decomposition produced malformed sublinkages that must not be
    /// post-processed.
    pub improper_fat_linkage: bool,
    pub inconsistent_domains: bool,
}

impl Default for LinkageInfo {
    fn default() -> Self {
        Self {
            unused_word_cost: 0,
            disjunct_cost: 0.0,
            link_cost: 0,
            and_cost: 0,
            corpus_cost: 0.0,
            fat: false,
            canonical: true,
            improper_fat_linkage: false,
            inconsistent_domains: false,
        }
    }
}

/// The disjunct a word used in a parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChosenDisjunct {
    /// Display form of the disjunct's connectors.
    pub text: String,
    pub cost: f64,
    #[serde(default)]
    pub corpus_score: f64,
}

impl ChosenDisjunct {
    pub fn new(text: impl Into<String>, cost: f64) -> Self {
        Self {
            text: text.into(),
            cost,
            corpus_score: 0.0,
        }
    }

    pub fn with_corpus_score(mut self, corpus_score: f64) -> Self {
        self.corpus_score = corpus_score;
        self
    }
}

/// Source of the links of ranked parses for one sentence.
pub trait Extractor {
    /// Number of ranked parses available.
    fn num_linkages(&self) -> usize;

    /// The sentence's words.
    fn words(&self) -> &[String];

    /// Metadata of parse `rank`, if the search recorded any.
    fn link_info(&self, rank: usize) -> Option<&LinkageInfo>;

    /// Whether parse `rank` decomposes into parallel sublinkages.
    fn has_fat_down(&self, _rank: usize) -> bool {
        false
    }

    /// Links of parse `rank` as a single set.
    fn extract_thin(&mut self, rank: usize) -> Vec<Link>;

    /// Links of parse `rank`, one set per parallel conjunct.
    fn extract_fat(&mut self, rank: usize) -> NonEmpty<Vec<Link>> {
        NonEmpty::new(self.extract_thin(rank))
    }

    /// Per word, the disjunct chosen by the most recent extraction; `None`
    /// for words that took no part in the parse. An empty slice means no
    /// disjuncts were recorded.
    fn chosen_disjuncts(&self) -> &[Option<ChosenDisjunct>];
}

/// One ranked parse held by [`PrecomputedParses`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedParse {
    sublinkages: NonEmpty<Vec<Link>>,
    info: Option<LinkageInfo>,
    disjuncts: Vec<Option<ChosenDisjunct>>,
}

impl RankedParse {
    /// A parse with a single set of links.
    pub fn thin(links: Vec<Link>) -> Self {
        Self::fat(NonEmpty::new(links))
    }

    /// A parse decomposed into parallel link sets.
    pub fn fat(sublinkages: NonEmpty<Vec<Link>>) -> Self {
        Self {
            sublinkages,
            info: None,
            disjuncts: Vec::new(),
        }
    }

    pub fn with_info(mut self, info: LinkageInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_disjuncts(mut self, disjuncts: Vec<Option<ChosenDisjunct>>) -> Self {
        self.disjuncts = disjuncts;
        self
    }
}

/// An [`Extractor`] over parses that were computed ahead of time.
///
/// Thin extraction of a decomposed parse yields its first link set.
///
/// Parses can also be loaded from JSON, best parse first:
///
/// ```
/// use lg_linkage::{Extractor, PrecomputedParses};
///
/// let parses = PrecomputedParses::from_json(r#"{
///     "words": ["LEFT-WALL", "sing"],
///     "parses": [{
///         "sublinkages": [[
///             {"left_word": 0, "right_word": 1, "name": "Wd",
///              "left_label": "Wd", "right_label": "Wd"}
///         ]],
///         "info": {"link_cost": 1}
///     }]
/// }"#).unwrap();
/// assert_eq!(parses.num_linkages(), 1);
/// assert_eq!(parses.link_info(0).map(|info| info.link_cost), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrecomputedParses {
    words: Vec<String>,
    parses: Vec<RankedParse>,
    chosen: Vec<Option<ChosenDisjunct>>,
}

impl PrecomputedParses {
    pub fn new<W: Into<String>>(words: impl IntoIterator<Item = W>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            parses: Vec::new(),
            chosen: Vec::new(),
        }
    }

    /// Append the next-ranked parse.
    pub fn with_parse(mut self, parse: RankedParse) -> Self {
        self.parses.push(parse);
        self
    }

    /// Read a sentence and its ranked parses from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, LinkageError> {
        let document: ParsesDocument =
            serde_json::from_str(json).map_err(|error| LinkageError::Parses(error.to_string()))?;

        let mut parses = Self::new(document.words);
        for (rank, parse) in document.parses.into_iter().enumerate() {
            let sublinkages = NonEmpty::from_vec(parse.sublinkages).ok_or_else(|| {
                LinkageError::Parses(format!("parse {rank} has no link sets"))
            })?;
            parses.parses.push(RankedParse {
                sublinkages,
                info: parse.info,
                disjuncts: parse.disjuncts,
            });
        }
        Ok(parses)
    }

    fn select(&mut self, rank: usize) -> Option<&RankedParse> {
        let parse = self.parses.get(rank)?;
        self.chosen.clone_from(&parse.disjuncts);
        Some(parse)
    }
}

#[derive(Deserialize)]
struct ParsesDocument {
    words: Vec<String>,
    #[serde(default)]
    parses: Vec<ParseDocument>,
}

#[derive(Deserialize)]
struct ParseDocument {
    sublinkages: Vec<Vec<Link>>,
    #[serde(default)]
    info: Option<LinkageInfo>,
    #[serde(default)]
    disjuncts: Vec<Option<ChosenDisjunct>>,
}

impl Extractor for PrecomputedParses {
    fn num_linkages(&self) -> usize {
        self.parses.len()
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    fn link_info(&self, rank: usize) -> Option<&LinkageInfo> {
        self.parses.get(rank)?.info.as_ref()
    }

    fn has_fat_down(&self, rank: usize) -> bool {
        self.parses
            .get(rank)
            .is_some_and(|parse| parse.sublinkages.len() > 1)
    }

    fn extract_thin(&mut self, rank: usize) -> Vec<Link> {
        self.select(rank)
            .map(|parse| parse.sublinkages.head.clone())
            .unwrap_or_default()
    }

    fn extract_fat(&mut self, rank: usize) -> NonEmpty<Vec<Link>> {
        self.select(rank)
            .map(|parse| parse.sublinkages.clone())
            .unwrap_or_else(|| NonEmpty::new(Vec::new()))
    }

    fn chosen_disjuncts(&self) -> &[Option<ChosenDisjunct>] {
        &self.chosen
    }
}
