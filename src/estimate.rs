//! Empirical probabilities from a neighbour set: each neighbour casts one vote for every catalog
//! entry whose predicate holds for its scoreline.

use crate::catalog::Catalog;
use crate::data::Scoreline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Votes per catalog entry, in catalog order.
    pub votes: Vec<usize>,
    pub neighbours: usize,
}
impl Tally {
    /// Percentage of neighbours for which the entry at `index` holds, in `[0, 100]`. Zero if
    /// there are no neighbours.
    #[inline]
    pub fn probability(&self, index: usize) -> f64 {
        if self.neighbours == 0 {
            0.0
        } else {
            self.votes[index] as f64 / self.neighbours as f64 * 100.0
        }
    }

    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.votes.len()).map(|index| self.probability(index))
    }
}

pub fn tally<'a>(catalog: &Catalog, scorelines: impl IntoIterator<Item = &'a Scoreline>) -> Tally {
    let mut votes = vec![0; catalog.len()];
    let mut neighbours = 0;
    for scoreline in scorelines {
        neighbours += 1;
        for (index, entry) in catalog.entries().iter().enumerate() {
            if entry.predicate.test(scoreline) {
                votes[index] += 1;
            }
        }
    }
    Tally { votes, neighbours }
}
