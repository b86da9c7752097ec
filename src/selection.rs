//! Reduction of the priced candidates to one pick per match, by probability and by expected
//! bankroll.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::value::BetCandidate;

/// The three result collections of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Every retained candidate, in pending-row order and then catalog order.
    pub raw: Vec<BetCandidate>,
    /// The most probable candidate of each match, by kickoff.
    pub by_probability: Vec<BetCandidate>,
    /// The candidate with the highest expected bankroll in each match, by kickoff.
    pub by_bankroll: Vec<BetCandidate>,
}

/// Orders candidates so that the preferred one is greatest: higher probability, then higher
/// expected bankroll, then earlier in the catalog.
pub fn by_probability(a: &BetCandidate, b: &BetCandidate) -> Ordering {
    a.probability
        .total_cmp(&b.probability)
        .then_with(|| a.stake.expected_bankroll.total_cmp(&b.stake.expected_bankroll))
        .then_with(|| b.entry.cmp(&a.entry))
}

/// Orders candidates so that the preferred one is greatest: higher expected bankroll, then
/// higher probability, then earlier in the catalog.
pub fn by_bankroll(a: &BetCandidate, b: &BetCandidate) -> Ordering {
    a.stake
        .expected_bankroll
        .total_cmp(&b.stake.expected_bankroll)
        .then_with(|| a.probability.total_cmp(&b.probability))
        .then_with(|| b.entry.cmp(&a.entry))
}

fn by_kickoff(a: &BetCandidate, b: &BetCandidate) -> Ordering {
    a.fixture.kickoff_key().cmp(&b.fixture.kickoff_key())
}

pub fn select(raw: Vec<BetCandidate>) -> Report {
    let mut best: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (index, candidate) in raw.iter().enumerate() {
        match best.entry(candidate.match_id()) {
            Entry::Vacant(vacant) => {
                vacant.insert((index, index));
            }
            Entry::Occupied(mut occupied) => {
                let (most_probable, most_lucrative) = occupied.get_mut();
                if by_probability(candidate, &raw[*most_probable]) == Ordering::Greater {
                    *most_probable = index;
                }
                if by_bankroll(candidate, &raw[*most_lucrative]) == Ordering::Greater {
                    *most_lucrative = index;
                }
            }
        }
    }

    let (mut by_probability, mut by_bankroll): (Vec<_>, Vec<_>) = best
        .into_values()
        .map(|(most_probable, most_lucrative)| (raw[most_probable].clone(), raw[most_lucrative].clone()))
        .unzip();
    by_probability.sort_by(by_kickoff);
    by_bankroll.sort_by(by_kickoff);

    Report {
        raw,
        by_probability,
        by_bankroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MatchRecord;
    use crate::value::Stake;

    fn candidate(match_id: &str, date: &str, time: &str, entry: usize, probability: f64, odds: f64) -> BetCandidate {
        BetCandidate {
            fixture: MatchRecord::new(match_id).with_kickoff(date, time).fixture,
            entry,
            label: format!("m :: {entry}"),
            probability,
            odds,
            ev: probability * odds / 100.0,
            stake: Stake::new(probability, odds),
        }
    }

    fn picks(candidates: &[BetCandidate]) -> Vec<(&str, usize)> {
        candidates
            .iter()
            .map(|candidate| (candidate.match_id(), candidate.entry))
            .collect()
    }

    #[test]
    fn one_pick_per_match_by_kickoff() {
        let raw = vec![
            candidate("late", "2024-03-02", "18:00", 0, 60.0, 2.0),
            candidate("late", "2024-03-02", "18:00", 1, 30.0, 5.0),
            candidate("early", "2024-03-01", "20:00", 4, 40.0, 3.0),
            candidate("same-day", "2024-03-01", "21:30", 2, 55.0, 2.5),
        ];
        let report = select(raw.clone());
        assert_eq!(raw, report.raw);
        assert_eq!(
            vec![("early", 4), ("same-day", 2), ("late", 0)],
            picks(&report.by_probability)
        );
        // 0.3 × (1 + 0.125 × 4) + 0.7 × 0.875 beats 0.6 × 1.2 + 0.4 × 0.8
        assert_eq!(
            vec![("early", 4), ("same-day", 2), ("late", 1)],
            picks(&report.by_bankroll)
        );
    }

    #[test]
    fn probability_tie_broken_by_bankroll_then_catalog() {
        let raw = vec![
            candidate("1", "2024-03-01", "20:00", 7, 50.0, 2.5),
            candidate("1", "2024-03-01", "20:00", 3, 50.0, 3.0),
            candidate("1", "2024-03-01", "20:00", 5, 50.0, 3.0),
        ];
        let report = select(raw);
        assert_eq!(vec![("1", 3)], picks(&report.by_probability));
        assert_eq!(vec![("1", 3)], picks(&report.by_bankroll));
    }

    #[test]
    fn bankroll_tie_broken_by_probability() {
        // neither stakes anything, so both leave the bankroll whole
        let raw = vec![
            candidate("1", "2024-03-01", "20:00", 0, 20.0, 1.0),
            candidate("1", "2024-03-01", "20:00", 1, 30.0, 1.0),
        ];
        let report = select(raw);
        assert_eq!(vec![("1", 1)], picks(&report.by_bankroll));
    }

    #[test]
    fn kickoff_tie_broken_by_match_id() {
        let raw = vec![
            candidate("b", "2024-03-01", "20:00", 0, 50.0, 3.0),
            candidate("a", "2024-03-01", "20:00", 0, 50.0, 3.0),
        ];
        let report = select(raw);
        assert_eq!(vec![("a", 0), ("b", 0)], picks(&report.by_probability));
    }

    #[test]
    fn select_nothing() {
        assert_eq!(Report::default(), select(vec![]));
    }
}
