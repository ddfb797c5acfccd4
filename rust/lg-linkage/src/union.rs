//! Merging the parallel sublinkages of a decomposed parse.

use std::collections::HashSet;

use tracing::debug;

use crate::{Linkage, LinkKey, Sublinkage};

impl Linkage {
    /// Append the union of all sublinkages as a new, final sublinkage and
    /// make it current.
    ///
    /// A link joins the union unless a sublinkage with a lower index already
    /// contains a link with the same endpoints and name; the union keeps a
    /// copy of the first occurrence together with its domain annotation. The
    /// union's violation is the first one found in index order, whether or
    /// not its sublinkage contributed any link.
    ///
    /// Once computed, later calls only make the union current again. A
    /// linkage with a single sublinkage is its own union and is left as is.
    pub fn compute_union(&mut self) {
        if self.unionized {
            self.current = self.sublinkages.len() - 1;
            return;
        }
        self.unionized = true;
        if self.sublinkages.len() == 1 {
            return;
        }

        let union = unionize(self.sublinkages.iter());
        debug!(
            rank = self.rank(),
            num_sublinkages = self.sublinkages.len(),
            num_links = union.num_links(),
            "computed union"
        );

        self.sublinkages.push(union);
        self.current = self.sublinkages.len() - 1;
    }
}

fn unionize<'a>(sublinkages: impl Iterator<Item = &'a Sublinkage>) -> Sublinkage {
    let mut seen: HashSet<LinkKey<'a>> = HashSet::new();
    let mut links = Vec::new();
    let mut pp_info = Vec::new();
    let mut violation = None;
    let mut improper = false;

    for sublinkage in sublinkages {
        // Repeats inside one sublinkage are all kept; only earlier
        // sublinkages can shadow a link.
        let mut contributed = Vec::new();
        for (index, link) in sublinkage.links().iter().enumerate() {
            if seen.contains(&link.key()) {
                continue;
            }
            contributed.push(link.key());
            links.push(link.clone());
            pp_info.push(sublinkage.domains(index).cloned().unwrap_or_default());
        }
        seen.extend(contributed);

        if violation.is_none() {
            violation = sublinkage.violation().map(str::to_owned);
        }
        improper |= sublinkage.is_improper();
    }

    Sublinkage::from_parts(links, pp_info, violation, improper)
}
