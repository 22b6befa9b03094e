// Imports
use itertools::Itertools;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    clustering::{Error, validate_cluster_count},
    data::{Float, ScoredSite},
    similarity::Gap,
};

struct Cluster {
    centroid: Float,
    members: Vec<usize>,
}

/// Scalar k-means over combined site scores.
///
/// Centroids are seeded from the first `k` sites in input order, so results are reproducible for a
/// fixed input order. Each round assigns every site to the nearest centroid (ties keep the first
/// centroid in seed order), then recomputes every centroid as the mean score of its members; a
/// cluster that received no members keeps its previous centroid. The returned clustering is the
/// assignment against the final centroids, and clusters still empty at that point are dropped, so
/// the result can hold fewer than `k` clusters.
///
/// Populations of at most one site short-circuit into singleton clusters before any validation.
pub fn partition(
    sites: Vec<ScoredSite>,
    k: usize,
    iterations: usize,
) -> Result<Vec<Vec<ScoredSite>>, Error> {
    if sites.len() <= 1 {
        return Ok(sites.into_iter().map(|site| vec![site]).collect_vec());
    }
    validate_cluster_count(k, sites.len())?;

    let scores = sites.iter().map(|site| site.score).collect_vec();
    let mut clusters =
        scores.iter().take(k).map(|&centroid| Cluster { centroid, members: Vec::new() }).collect_vec();

    for _ in 0..iterations {
        for (idx, &score) in scores.iter().enumerate() {
            let nearest = nearest_cluster(&clusters, score);
            clusters[nearest].members.push(idx);
        }

        // Every centroid must be recomputed before the next assignment pass starts
        clusters.par_iter_mut().for_each(|cluster| {
            if !cluster.members.is_empty() {
                cluster.centroid = cluster.members.iter().map(|&idx| scores[idx]).sum::<Float>()
                    / cluster.members.len() as Float;
            }
            cluster.members.clear();
        });
    }

    let mut output: Vec<Vec<ScoredSite>> = clusters.iter().map(|_| Vec::new()).collect_vec();
    for site in sites {
        let nearest = nearest_cluster(&clusters, site.score);
        output[nearest].push(site);
    }
    output.retain(|cluster| !cluster.is_empty());
    Ok(output)
}

/// Index of the cluster whose centroid is nearest to `score`, first in seed order on ties
fn nearest_cluster(
    clusters: &[Cluster],
    score: Float,
) -> usize {
    clusters
        .iter()
        .position_min_by_key(|cluster| Gap::try_new((score - cluster.centroid).abs()).unwrap())
        .unwrap()
}
