//! Removal of uninformative feature columns and of records with no match result quotes.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::data::Dataset;
use crate::error::CleanseError;

/// The match result quotes; a record quoting none of them is removed by [retain_quoted].
pub const RESULT_COLUMNS: [&str; 3] = [
    "Maç Sonucu :: MS 1",
    "Maç Sonucu :: MS 2",
    "Maç Sonucu :: MS X",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column: String,
    /// Share of records that do not quote the column; one for an empty dataset.
    pub null_ratio: f64,
    /// Number of distinct quoted values.
    pub distinct: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Columns missing from at least this share of records are dropped.
    pub null_ratio: f64,
    /// Columns with at most this many distinct values are dropped.
    pub distinct: usize,
}
impl Thresholds {
    pub fn is_low_information(&self, profile: &ColumnProfile) -> bool {
        profile.null_ratio >= self.null_ratio || profile.distinct <= self.distinct
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            null_ratio: 0.99,
            distinct: 1,
        }
    }
}

pub fn profile(dataset: &Dataset) -> Vec<ColumnProfile> {
    dataset
        .feature_columns
        .iter()
        .map(|column| {
            let mut distinct = FxHashSet::default();
            let mut present = 0;
            for price in dataset.records.iter().filter_map(|record| record.quote(column)) {
                present += 1;
                distinct.insert(price.to_bits());
            }
            let null_ratio = if dataset.is_empty() {
                1.0
            } else {
                1.0 - present as f64 / dataset.len() as f64
            };
            ColumnProfile {
                column: column.clone(),
                null_ratio,
                distinct: distinct.len(),
            }
        })
        .collect()
}

/// Removes the low-information feature columns from the dataset, returning their names.
pub fn drop_low_information(dataset: &mut Dataset, thresholds: &Thresholds) -> Vec<String> {
    let dropped = profile(dataset)
        .into_iter()
        .filter(|profile| thresholds.is_low_information(profile))
        .map(|profile| {
            debug!(
                "dropping '{}': null ratio {:.4}, {} distinct",
                profile.column, profile.null_ratio, profile.distinct
            );
            profile.column
        })
        .collect::<Vec<_>>();
    if dropped.is_empty() {
        return dropped;
    }

    let dropped_set = dropped.iter().map(String::as_str).collect::<FxHashSet<_>>();
    dataset
        .feature_columns
        .retain(|column| !dropped_set.contains(column.as_str()));
    for record in &mut dataset.records {
        record.odds.retain(|label, _| !dropped_set.contains(label.as_str()));
    }
    info!(
        "dropped {} low-information columns, {} remain",
        dropped.len(),
        dataset.feature_columns.len()
    );
    dropped
}

/// Removes the records that quote none of the match result outcomes, returning the number
/// removed. Fails if the dataset lacks any of the match result columns.
pub fn retain_quoted(dataset: &mut Dataset) -> Result<usize, CleanseError> {
    for column in RESULT_COLUMNS {
        if !dataset.feature_columns.iter().any(|feature| feature == column) {
            return Err(CleanseError::MissingResultColumn(column.into()));
        }
    }
    let before = dataset.len();
    dataset
        .records
        .retain(|record| RESULT_COLUMNS.iter().any(|column| record.quote(column).is_some()));
    let removed = before - dataset.len();
    info!("removed {removed} records without match result quotes, {} remain", dataset.len());
    Ok(removed)
}
