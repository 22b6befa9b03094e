pub use crate::clustering::{
    Error as ClusteringError, agglomerate, centroids, compute_cluster_centroid, dispersion, partition,
};
pub use crate::data::{ActiveSite, Atom, Error as DataError, Float, Residue, ScoredSite};
pub use crate::scoring::{Error as ScoringError, score_sites};
pub use crate::similarity::{Gap, similarity};
