//! Nearest-neighbour search over sparse feature vectors. Only the dimensions present in both
//! vectors are compared; a pair sharing no dimension is infinitely far apart.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::features::{FeatureVector, Projection};


pub trait Metric: Sync {
    fn distance(&self, query: &FeatureVector, reference: &FeatureVector) -> f64;
}

/// Square root of the sum of squared differences over the shared dimensions. Not normalised by
/// the number of shared dimensions, so a pair sharing few quotes may appear closer than one
/// sharing many.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, query: &FeatureVector, reference: &FeatureVector) -> f64 {
        let (sum_sq, shared) = shared_sum_sq(query, reference);
        if shared == 0 {
            f64::INFINITY
        } else {
            sum_sq.sqrt()
        }
    }
}

/// Root mean squared difference over the shared dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalised;

impl Metric for Normalised {
    #[inline]
    fn distance(&self, query: &FeatureVector, reference: &FeatureVector) -> f64 {
        let (sum_sq, shared) = shared_sum_sq(query, reference);
        if shared == 0 {
            f64::INFINITY
        } else {
            (sum_sq / shared as f64).sqrt()
        }
    }
}

#[inline(always)]
fn shared_sum_sq(query: &FeatureVector, reference: &FeatureVector) -> (f64, usize) {
    debug_assert_eq!(
        query.len(),
        reference.len(),
        "query has {} dimensions, reference has {}",
        query.len(),
        reference.len()
    );
    let mut sum_sq = 0.0;
    let mut shared = 0;
    for col in 0..query.len() {
        if !query.missing[col] && !reference.missing[col] {
            let diff = query.values[col] - reference.values[col];
            sum_sq += diff * diff;
            shared += 1;
        }
    }
    // squares of extreme but finite quotes may overflow; a shared dimension keeps the pair comparable
    (sum_sq.min(f64::MAX), shared)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, clap::ValueEnum)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Euclidean,
    Normalised,
}
impl MetricKind {
    pub fn metric(&self) -> &'static dyn Metric {
        match self {
            MetricKind::Euclidean => &Euclidean,
            MetricKind::Normalised => &Normalised,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Row of the neighbour in the reference projection.
    pub index: usize,
    pub distance: f64,
}

/// Orders by ascending distance, then by ascending reference row, so that rows tied at the
/// boundary are admitted in reference order.
#[inline]
fn closer(a: &Neighbour, b: &Neighbour) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}

/// Selects up to `k` rows of `reference` nearest to `query`, sorted closest first. Rows at an
/// infinite distance are never selected. Returns an empty vector if no row is comparable.
pub fn nearest(
    query: &FeatureVector,
    reference: &Projection,
    k: usize,
    metric: &dyn Metric,
) -> Vec<Neighbour> {
    let mut candidates = (0..reference.rows())
        .map(|index| Neighbour {
            index,
            distance: metric.distance(query, &reference.row(index)),
        })
        .filter(|neighbour| neighbour.distance.is_finite())
        .collect::<Vec<_>>();

    let k = usize::min(k, candidates.len());
    if k == 0 {
        return vec![];
    }
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, closer);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(closer);
    candidates
}
