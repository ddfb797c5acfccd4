//! Parse options that affect linkage assembly and post-processing.

use serde::{Deserialize, Serialize};

use crate::LinkageError;

/// Options consulted when a linkage is created and post-processed.
///
/// Options deserialize with every field optional, so a partial document
/// such as `{"use_fat_linkages": true}` is valid:
///
/// ```
/// use lg_linkage::ParseOptions;
///
/// let options = ParseOptions::from_json(r#"{"use_fat_linkages": true}"#).unwrap();
/// assert!(options.use_fat_linkages);
/// assert_eq!(options.verbosity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Extract conjunctive parses as several parallel sublinkages (the
    /// deprecated "fat linkage" mode).
    pub use_fat_linkages: bool,
    /// Detail of diagnostic output. At 2 and above, debug events carry
    /// rendered links and verdicts.
    pub verbosity: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            use_fat_linkages: false,
            verbosity: 1,
        }
    }
}

impl ParseOptions {
    /// Read options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, LinkageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn detailed(&self) -> bool {
        self.verbosity >= 2
    }
}
