//! The batch transform from a dataset to a [Report]: every pending match is compared with the
//! resolved archive, its nearest neighbours vote on each catalog entry, and the resulting
//! probabilities are priced against the match's own quotes.

use std::borrow::Cow;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::data::{Dataset, MatchRecord, Resolved};
use crate::error::InvalidConfig;
use crate::estimate::tally;
use crate::features::{FeatureVector, Projection};
use crate::selection::{select, Report};
use crate::similarity::nearest;
use crate::value::{appraise, BetCandidate};


#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    catalog: Catalog,
}
impl Engine {
    pub fn new(config: Config, catalog: Catalog) -> Result<Self, InvalidConfig> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run(&self, dataset: &Dataset) -> Report {
        let start_time = Instant::now();
        let dataset = match self.config.shuffle_seed {
            None => Cow::Borrowed(dataset),
            Some(seed) => {
                let mut shuffled = dataset.clone();
                shuffled.shuffle(seed);
                Cow::Owned(shuffled)
            }
        };

        let partition = dataset.partition();
        let columns = &dataset.feature_columns;
        let reference = Projection::project(columns, partition.resolved.iter().map(|resolved| resolved.record));
        let queries = Projection::project(columns, partition.pending.iter().copied());
        debug!(
            "projected {} resolved and {} pending matches over {} features",
            reference.rows(),
            queries.rows(),
            columns.len()
        );

        let evaluate = |row: usize| self.evaluate(partition.pending[row], &queries.row(row), &reference, &partition.resolved);
        let per_match: Vec<Vec<BetCandidate>> = if self.config.parallel {
            (0..queries.rows()).into_par_iter().map(evaluate).collect()
        } else {
            (0..queries.rows()).map(evaluate).collect()
        };
        let raw = per_match.into_iter().flatten().collect::<Vec<_>>();

        let report = select(raw);
        info!(
            "scored {} pending matches against {} resolved: {} candidates, {} matches with picks, took {:.3}s",
            partition.pending.len(),
            partition.resolved.len(),
            report.raw.len(),
            report.by_probability.len(),
            start_time.elapsed().as_millis() as f64 / 1_000.
        );
        report
    }

    /// Prices every catalog entry for one pending match, returning the candidates that clear the
    /// EV threshold in catalog order. Returns nothing if no resolved match is comparable.
    pub fn evaluate(
        &self,
        record: &MatchRecord,
        query: &FeatureVector,
        reference: &Projection,
        resolved: &[Resolved],
    ) -> Vec<BetCandidate> {
        let neighbours = nearest(query, reference, self.config.neighbours, self.config.metric.metric());
        if neighbours.is_empty() {
            debug!("match {} has no comparable resolved match; skipped", record.match_id());
            return vec![];
        }
        trace!(
            "match {}: {} neighbours, farthest at {:.6}",
            record.match_id(),
            neighbours.len(),
            neighbours[neighbours.len() - 1].distance
        );

        let tally = tally(
            &self.catalog,
            neighbours.iter().map(|neighbour| &resolved[neighbour.index].scoreline),
        );
        self.catalog
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let (label, odds) = entry.quote(record);
                appraise(
                    &record.fixture,
                    index,
                    label,
                    tally.probability(index),
                    odds,
                    self.config.ev_threshold,
                )
            })
            .collect()
    }
}

impl TryFrom<Config> for Engine {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        Self::new(config, Catalog::standard())
    }
}
