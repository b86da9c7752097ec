//! Expected value and Kelly staking of a priced wager.

use crate::data::Fixture;

/// Return per unit staked, `probability × odds / 100`, with `probability` in `[0, 100]`.
#[inline]
pub fn expected_value(probability: f64, odds: f64) -> f64 {
    probability * odds / 100.0
}

/// Full Kelly fraction of the bankroll for a wager at decimal `odds` with a win `probability` in
/// `[0, 100]`. Never negative; zero where the odds pay nothing or the fraction is undefined.
#[inline]
pub fn kelly(probability: f64, odds: f64) -> f64 {
    let p = probability / 100.0;
    let q = 1.0 - p;
    let b = odds - 1.0;
    if b <= 0.0 {
        return 0.0;
    }
    let fraction = (b * p - q) / b;
    if fraction.is_finite() {
        f64::max(0.0, fraction)
    } else {
        0.0
    }
}

/// The bankroll outcomes of staking a Kelly fraction, starting from a unit bankroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stake {
    pub kelly: f64,
    pub bankroll_if_win: f64,
    pub bankroll_if_lose: f64,
    pub expected_bankroll: f64,
}
impl Stake {
    pub fn new(probability: f64, odds: f64) -> Self {
        let kelly = kelly(probability, odds);
        let p = probability / 100.0;
        let bankroll_if_win = 1.0 + kelly * (odds - 1.0);
        let bankroll_if_lose = 1.0 - kelly;
        Self {
            kelly,
            bankroll_if_win,
            bankroll_if_lose,
            expected_bankroll: p * bankroll_if_win + (1.0 - p) * bankroll_if_lose,
        }
    }

    /// The Kelly fraction as a percentage of the bankroll.
    pub fn percent(&self) -> f64 {
        self.kelly * 100.0
    }
}

/// A priced wager on a pending match.
#[derive(Debug, Clone, PartialEq)]
pub struct BetCandidate {
    pub fixture: Fixture,
    /// Position of the wager in the catalog.
    pub entry: usize,
    pub label: String,
    pub probability: f64,
    pub odds: f64,
    pub ev: f64,
    pub stake: Stake,
}
impl BetCandidate {
    pub fn match_id(&self) -> &str {
        &self.fixture.match_id
    }
}

/// Prices a wager, returning a candidate only if its expected value strictly exceeds
/// `ev_threshold`.
pub fn appraise(
    fixture: &Fixture,
    entry: usize,
    label: String,
    probability: f64,
    odds: f64,
    ev_threshold: f64,
) -> Option<BetCandidate> {
    let ev = expected_value(probability, odds);
    if ev > ev_threshold {
        Some(BetCandidate {
            fixture: fixture.clone(),
            entry,
            label,
            probability,
            odds,
            ev,
            stake: Stake::new(probability, odds),
        })
    } else {
        None
    }
}
