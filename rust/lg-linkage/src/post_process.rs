//! Domain post-processing: annotating links with domains and recording
//! consistency violations.
//!
//! The rules themselves live with the [`ConsistencyChecker`]; this module
//! only drives it over every sublinkage of a linkage and stores what it
//! reports.

use tracing::{debug, warn};

use crate::{Link, Linkage, ParseOptions, PostProcessData};

/// What a checker found in one sublinkage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verdict {
    /// Per link, in link order, the domain tags of that link.
    pub domains: Vec<Vec<char>>,
    /// The rule the sublinkage violates, if any.
    pub violation: Option<String>,
    /// Checker bookkeeping to keep with the sublinkage.
    pub data: PostProcessData,
}

impl Verdict {
    pub fn new(domains: Vec<Vec<char>>) -> Self {
        Self {
            domains,
            ..Self::default()
        }
    }

    pub fn with_violation(mut self, violation: impl Into<String>) -> Self {
        self.violation = Some(violation.into());
        self
    }

    pub fn with_data(mut self, data: PostProcessData) -> Self {
        self.data = data;
        self
    }
}

/// A structural consistency checker.
pub trait ConsistencyChecker {
    /// Sentence-level state the checker needs alongside the links.
    type Context: ?Sized;

    /// Check one set of links. `None` means the checker declined; that is a
    /// valid outcome and leaves the sublinkage without domains or violation.
    fn check(
        &mut self,
        links: &[Link],
        context: &Self::Context,
        options: &ParseOptions,
    ) -> Option<Verdict>;

    /// Called once after every sublinkage of a sentence has been checked.
    fn close_sentence(&mut self);
}

impl Linkage {
    /// Annotate every sublinkage, the union included, with the checker's
    /// domains and violation, replacing any earlier annotation.
    ///
    /// Improper sublinkages are never shown to the checker and come out
    /// unannotated. The checker is told the sentence is finished exactly
    /// once, whatever the outcome.
    pub fn post_process<C>(&mut self, checker: &mut C, context: &C::Context, options: &ParseOptions)
    where
        C: ConsistencyChecker + ?Sized,
    {
        let rank = self.rank();
        for (index, sublinkage) in self.sublinkages.iter_mut().enumerate() {
            sublinkage.clear_annotation();

            if sublinkage.is_improper() {
                debug!(rank, index, "skipping improper sublinkage");
                continue;
            }

            let Some(verdict) = checker.check(sublinkage.links(), context, options) else {
                debug!(rank, index, "checker declined sublinkage");
                continue;
            };

            if verdict.domains.len() != sublinkage.num_links() {
                warn!(
                    rank,
                    index,
                    expected = sublinkage.num_links(),
                    found = verdict.domains.len(),
                    "checker reported domains for the wrong number of links"
                );
            }
            if options.detailed() {
                debug!(rank, index, verdict = ?verdict, "post-processed sublinkage");
            } else {
                debug!(rank, index, violation = ?verdict.violation, "post-processed sublinkage");
            }
            sublinkage.annotate(verdict.domains, verdict.violation, verdict.data);
        }
        checker.close_sentence();
    }
}
