// Modules
pub mod hierarchical;
pub mod partition;

// Re-exports
pub use hierarchical::agglomerate;
pub use partition::partition;

// Imports
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use thiserror::Error;

use crate::data::{Float, ScoredSite};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Requested {k} clusters for a population of {population} sites, k must be in 1..=population")]
    InvalidClusterCount { k: usize, population: usize },
}

pub(crate) fn validate_cluster_count(
    k: usize,
    population: usize,
) -> Result<(), Error> {
    if k == 0 || k > population {
        return Err(Error::InvalidClusterCount { k, population });
    }
    Ok(())
}

/// Mean combined score of the given members. Callers guarantee `members` is non-empty.
pub fn compute_cluster_centroid(members: &[ScoredSite]) -> Float {
    members.iter().map(|site| site.score).sum::<Float>() / members.len() as Float
}

/// Centroid of every non-empty cluster, in clustering order.
/// A pure query: any plotting or rendering of the returned sequence belongs to the caller.
pub fn centroids(clustering: &[Vec<ScoredSite>]) -> Vec<Float> {
    clustering
        .par_iter()
        .filter(|cluster| !cluster.is_empty())
        .map(|cluster| compute_cluster_centroid(cluster))
        .collect()
}

/// Total within-cluster dispersion of a clustering: for each cluster, the summed absolute
/// deviations of member scores from the cluster centroid. Lower is tighter; an empty clustering
/// scores 0.
pub fn dispersion(clustering: &[Vec<ScoredSite>]) -> Float {
    clustering
        .iter()
        .filter(|cluster| !cluster.is_empty())
        .map(|cluster| {
            let centroid = compute_cluster_centroid(cluster);
            cluster.iter().map(|site| (site.score - centroid).abs()).sum::<Float>()
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_float_eq;

    #[test]
    fn dispersion_of_an_empty_clustering_is_zero() {
        assert_float_eq!(dispersion(&[]), 0.0);
    }

    #[test]
    fn dispersion_sums_absolute_deviations_per_cluster() {
        let clustering = vec![
            vec![ScoredSite::create("a", 1.0), ScoredSite::create("b", 3.0)],
            vec![ScoredSite::create("c", 10.0)],
        ];

        // First cluster: centroid 2, deviations 1 + 1; singleton contributes nothing
        assert_float_eq!(dispersion(&clustering), 2.0);
    }

    #[test]
    fn centroids_query_skips_empty_clusters() {
        let clustering = vec![
            vec![ScoredSite::create("a", 1.0), ScoredSite::create("b", 2.0)],
            Vec::new(),
            vec![ScoredSite::create("c", 3.0)],
        ];

        assert_eq!(centroids(&clustering), vec![1.5, 3.0]);
    }

    #[test]
    fn cluster_count_validation() {
        assert!(validate_cluster_count(1, 5).is_ok());
        assert!(validate_cluster_count(5, 5).is_ok());
        assert!(matches!(validate_cluster_count(0, 5), Err(Error::InvalidClusterCount { k: 0, .. })));
        assert!(matches!(validate_cluster_count(6, 5), Err(Error::InvalidClusterCount { k: 6, .. })));
    }
}
