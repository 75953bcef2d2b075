//! "Did you mean" suggestions for filter values.

use strsim::levenshtein;

use crate::{Catalog, Field};

/// Maximum Levenshtein distance to consider a value as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

impl Catalog {
    /// Suggests the known value of `field` closest to `query`.
    ///
    /// Comparison is case-insensitive. Returns `None` when `query` already
    /// matches a value exactly or nothing is within the distance threshold.
    pub fn suggest(&self, field: &Field, query: &str) -> Option<String> {
        find_similar(query, self.distinct_values(field))
    }
}

/// Finds the candidate nearest to `query` by edit distance.
fn find_similar(query: &str, candidates: Vec<String>) -> Option<String> {
    let query_lower = query.to_lowercase();

    if candidates.iter().any(|c| c == query) {
        return None;
    }

    let (best_match, best_distance) = candidates
        .into_iter()
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name, distance)
        })
        .min_by_key(|(_, d)| *d)?;

    (best_distance <= MAX_SUGGESTION_DISTANCE).then_some(best_match)
}
