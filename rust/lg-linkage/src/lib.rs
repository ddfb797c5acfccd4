//! # lg-linkage
//!
//! The result-assembly layer of a link-grammar parser. Once the search has
//! found and ranked the parses of a sentence, this crate turns one ranked
//! parse into a [`Linkage`]: an owned, queryable set of [`Link`]s between
//! word positions, annotated with the domains a [`ConsistencyChecker`]
//! assigns and the violation it reports.
//!
//! ```text
//! Extractor ──► Linkage::create ──► Linkage ──► Linkage::post_process ──► callers
//!                                     │
//!                                     └─► Linkage::compute_union (fat mode)
//! ```
//!
//! In the deprecated "fat linkage" mode ([`ParseOptions::use_fat_linkages`])
//! a conjunctive parse is extracted as several parallel [`Sublinkage`]s,
//! which [`Linkage::compute_union`] can merge into one.
//!
//! ## Example
//!
//! ```
//! use lg_linkage::{Link, Linkage, ParseOptions, PrecomputedParses, RankedParse};
//!
//! let mut parses = PrecomputedParses::new(["LEFT-WALL", "sing"])
//!     .with_parse(RankedParse::thin(vec![Link::new(0, 1, "Wd")]));
//!
//! let linkage = Linkage::create(0, &mut parses, &ParseOptions::default()).unwrap();
//! assert_eq!(linkage.num_links(), 1);
//! assert_eq!(linkage.link_lword(0), Some(0));
//! assert_eq!(linkage.link_rword(0), Some(1));
//! assert_eq!(linkage.link_label(0), Some("Wd"));
//! ```

mod domain;
mod error;
mod extract;
mod link;
mod linkage;
mod options;
mod post_process;
mod sublinkage;
mod union;

pub use domain::*;
pub use error::*;
pub use extract::*;
pub use link::*;
pub use linkage::*;
pub use options::*;
pub use post_process::*;
pub use sublinkage::*;
