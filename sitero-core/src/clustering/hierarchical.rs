// Imports
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    clustering::{Error, compute_cluster_centroid, validate_cluster_count},
    data::{Float, ScoredSite},
    similarity::Gap,
    utils,
};

/// The single best merge found during a round: `keeper` absorbs every cluster in `absorbed`
struct Merge {
    keeper: usize,
    absorbed: Vec<usize>,
    gap: Gap,
}

/// Reciprocal-nearest-neighbor agglomeration over cluster centroids.
///
/// Every site starts as a singleton cluster. Each round recomputes all centroids, then scans the
/// arena for the merge candidate with the smallest centroid gap among pairs that are each other's
/// nearest neighbors; nearest-neighbor ties are kept as a candidate group and merged together,
/// which can step the cluster count below `k` in a single round. Whenever a full round produces no
/// merge, the reciprocity requirement is relaxed for exactly the next round so progress resumes.
///
/// Populations of at most one site short-circuit into singleton clusters before any validation.
pub fn agglomerate(
    sites: Vec<ScoredSite>,
    k: usize,
) -> Result<Vec<Vec<ScoredSite>>, Error> {
    if sites.len() <= 1 {
        return Ok(sites.into_iter().map(|site| vec![site]).collect_vec());
    }
    validate_cluster_count(k, sites.len())?;

    let mut clusters: Vec<Vec<ScoredSite>> = sites.into_iter().map(|site| vec![site]).collect_vec();
    let progress = utils::simple_progressbar(clusters.len() - k, "merges", None);

    // One-round relaxation of the reciprocity requirement, armed whenever a round gets stuck
    let mut force_merge = false;

    while clusters.len() > k {
        let before = clusters.len();
        let centroids: Vec<Float> =
            clusters.par_iter().map(|cluster| compute_cluster_centroid(cluster)).collect();

        let mut best: Option<Merge> = None;
        for idx in 0..clusters.len() {
            let (candidates, gap) = nearest_set(&centroids, centroids[idx], &[idx]);
            let (reciprocal, _) = nearest_set(&centroids, centroids[candidates[0]], &candidates);

            if (reciprocal.contains(&idx) || force_merge)
                && best.as_ref().is_none_or(|merge| gap < merge.gap)
            {
                best = Some(Merge { keeper: idx, absorbed: candidates, gap });
            }
        }

        if let Some(merge) = best {
            clusters = apply_merge(clusters, merge);
            progress.inc((before - clusters.len()) as u64);
        }
        force_merge = clusters.len() == before;
    }

    progress.finish_using_style();
    Ok(clusters)
}

/// Every cluster whose centroid is nearest to `origin`, ties kept as a group, together with the
/// winning gap. Indices listed in `banned` are excluded from the search.
fn nearest_set(
    centroids: &[Float],
    origin: Float,
    banned: &[usize],
) -> (Vec<usize>, Gap) {
    let mut nearest: Vec<usize> = Vec::new();
    let mut best: Option<Gap> = None;

    for (idx, &centroid) in centroids.iter().enumerate() {
        if banned.contains(&idx) {
            continue;
        }
        let gap = Gap::try_new((origin - centroid).abs()).unwrap();
        match best {
            Some(current) if gap > current => {}
            Some(current) if gap == current => nearest.push(idx),
            _ => {
                best = Some(gap);
                nearest.clear();
                nearest.push(idx);
            }
        }
    }

    (nearest, best.unwrap_or_default())
}

/// Drain the keeper and every absorbed cluster into one cluster, appended at the end of the arena
fn apply_merge(
    clusters: Vec<Vec<ScoredSite>>,
    merge: Merge,
) -> Vec<Vec<ScoredSite>> {
    let mut merged: Vec<ScoredSite> = Vec::new();
    let mut remaining: Vec<Vec<ScoredSite>> = Vec::with_capacity(clusters.len());

    for (idx, mut cluster) in clusters.into_iter().enumerate() {
        if idx == merge.keeper || merge.absorbed.contains(&idx) {
            merged.append(&mut cluster);
        } else {
            remaining.push(cluster);
        }
    }
    remaining.push(merged);
    remaining
}
