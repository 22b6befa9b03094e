// Imports
use nutype::nutype;

use crate::data::ScoredSite;

/// Absolute difference between two combined scores, a smaller gap means more similar.
/// Finite by construction, so it can key `min_by_key`-style searches.
#[nutype(
    default = 0_f64,
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deref, TryFrom, Display, Default)
)]
pub struct Gap(f64);

/// Compute the similarity between two scored sites. The heavy lifting already happened in
/// `scoring::score_sites`; comparing two sites is just the gap between their combined scores.
pub fn similarity(
    a: &ScoredSite,
    b: &ScoredSite,
) -> Gap {
    (a.score - b.score).abs().try_into().unwrap_or_default()
}
