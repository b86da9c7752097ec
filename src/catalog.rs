//! The catalog of wagers that can be priced from a neighbour set. Each [Entry] pairs a quoted
//! label with a declarative [Predicate] over the final [Scoreline]; the catalog is a plain table
//! of such entries, so adding a market never requires new evaluation logic.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::data::{MatchRecord, Score, Scoreline};

mod standard;

#[cfg(test)]
mod tests;

/// Separates the market name from the outcome name in a quoted label.
pub const LABEL_SEPARATOR: &str = " :: ";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display)]
pub enum Period {
    FirstHalf,
    SecondHalf,
    FullTime,
}
impl Period {
    #[inline]
    pub fn score(&self, scoreline: &Scoreline) -> Score {
        match self {
            Period::FirstHalf => scoreline.first_half,
            Period::SecondHalf => scoreline.second_half(),
            Period::FullTime => scoreline.full_time,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display)]
pub enum Side {
    Home,
    Away,
}
impl Side {
    #[inline]
    pub fn goals(&self, score: &Score) -> u8 {
        match self {
            Side::Home => score.home,
            Side::Away => score.away,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// A count of goals in a period, scored by one side or by both.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Goals {
    pub period: Period,
    pub side: Option<Side>,
}
impl Goals {
    pub const fn total(period: Period) -> Self {
        Self { period, side: None }
    }

    pub const fn side(period: Period, side: Side) -> Self {
        Self {
            period,
            side: Some(side),
        }
    }

    #[inline]
    pub fn count(&self, scoreline: &Scoreline) -> u16 {
        let score = self.period.score(scoreline);
        match self.side {
            None => score.total(),
            Some(side) => side.goals(&score) as u16,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Win(Side),
    Draw,
}
impl Verdict {
    #[inline]
    pub fn of(score: &Score) -> Self {
        if score.home > score.away {
            Verdict::Win(Side::Home)
        } else if score.away > score.home {
            Verdict::Win(Side::Away)
        } else {
            Verdict::Draw
        }
    }
}

/// Which half of the match produced more goals.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Busier {
    FirstHalf,
    SecondHalf,
    Level,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Outcome of the given period.
    Result(Period, Verdict),
    /// Strictly more goals than the given count; `Over(goals, 2)` settles a 2.5 over line.
    Over(Goals, u16),
    /// Strictly fewer goals than the given count; `Under(goals, 3)` settles a 2.5 under line.
    Under(Goals, u16),
    /// Goal count within the inclusive range.
    Between(Goals, u16, u16),
    Odd(Goals),
    BothScore(Period),
    /// Exact full-time margin, home goals less away goals.
    Margin(i16),
    /// The side wins at full time by at least the given number of goals.
    MarginAtLeast(Side, u16),
    /// Compares the goals of both halves, counting one side or both.
    MoreGoals(Option<Side>, Busier),
    Score(Period, Score),
    /// Any score in the period other than the listed ones.
    OtherScore(Period, Vec<Score>),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}
impl Predicate {
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not(Box::new(predicate))
    }

    pub fn test(&self, scoreline: &Scoreline) -> bool {
        match self {
            Predicate::Result(period, verdict) => Verdict::of(&period.score(scoreline)) == *verdict,
            Predicate::Over(goals, count) => goals.count(scoreline) > *count,
            Predicate::Under(goals, count) => goals.count(scoreline) < *count,
            Predicate::Between(goals, min, max) => {
                let count = goals.count(scoreline);
                count >= *min && count <= *max
            }
            Predicate::Odd(goals) => goals.count(scoreline) % 2 == 1,
            Predicate::BothScore(period) => {
                let score = period.score(scoreline);
                score.home > 0 && score.away > 0
            }
            Predicate::Margin(margin) => scoreline.full_time.margin() == *margin,
            Predicate::MarginAtLeast(side, by) => {
                let margin = match side {
                    Side::Home => scoreline.full_time.margin(),
                    Side::Away => -scoreline.full_time.margin(),
                };
                margin >= *by as i16
            }
            Predicate::MoreGoals(side, busier) => {
                let first = Goals { period: Period::FirstHalf, side: *side }.count(scoreline);
                let second = Goals { period: Period::SecondHalf, side: *side }.count(scoreline);
                match busier {
                    Busier::FirstHalf => first > second,
                    Busier::SecondHalf => second > first,
                    Busier::Level => first == second,
                }
            }
            Predicate::Score(period, score) => period.score(scoreline) == *score,
            Predicate::OtherScore(period, scores) => {
                let score = period.score(scoreline);
                !scores.contains(&score)
            }
            Predicate::All(predicates) => predicates.iter().all(|predicate| predicate.test(scoreline)),
            Predicate::Any(predicates) => predicates.iter().any(|predicate| predicate.test(scoreline)),
            Predicate::Not(predicate) => !predicate.test(scoreline),
        }
    }
}

/// A single wager: a market, an outcome within it, and the predicate that settles it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub market: String,
    pub outcome: String,
    /// Alternative spellings of the outcome under which the same wager may be quoted.
    pub aliases: Vec<String>,
    pub predicate: Predicate,
}
impl Entry {
    pub fn new(market: impl Into<String>, outcome: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            market: market.into(),
            outcome: outcome.into(),
            aliases: vec![],
            predicate,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The primary quoted label, `market :: outcome`.
    pub fn label(&self) -> String {
        format!("{}{LABEL_SEPARATOR}{}", self.market, self.outcome)
    }

    /// All quoted labels of this wager, primary first.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.label()).chain(
            self.aliases
                .iter()
                .map(|alias| format!("{}{LABEL_SEPARATOR}{alias}", self.market)),
        )
    }

    /// Resolves the quote for this wager from a pending record, trying each spelling in turn.
    /// Returns the label under which the quote was found (the primary label if none was) along
    /// with the quoted odds, zero when no spelling is quoted.
    pub fn quote(&self, record: &MatchRecord) -> (String, f64) {
        self.labels()
            .find_map(|label| record.quote(&label).map(|price| (label, price)))
            .unwrap_or_else(|| (self.label(), 0.0))
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{LABEL_SEPARATOR}{}", self.market, self.outcome)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),

    #[error("empty catalog")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}
impl Catalog {
    /// The full table of supported markets.
    pub fn standard() -> Self {
        Self {
            entries: standard::entries(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<Entry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<Entry>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = FxHashSet::default();
        for entry in &entries {
            for label in entry.labels() {
                if !seen.insert(label.clone()) {
                    return Err(CatalogError::DuplicateLabel(label));
                }
            }
        }
        Ok(Self { entries })
    }
}
