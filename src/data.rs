//! Match records and the dataset they are drawn from.

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveTime};
use rustc_hash::{FxHashMap, FxHashSet};
use tinyrand::{Rand, Seeded, StdRand};
use tracing::{debug, warn};


#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub const fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }

    pub fn margin(&self) -> i16 {
        self.home as i16 - self.away as i16
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// The first-half and full-time scores of a resolved match.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Scoreline {
    pub first_half: Score,
    pub full_time: Score,
}
impl Scoreline {
    pub fn new(first_half: Score, full_time: Score) -> Self {
        Self {
            first_half,
            full_time,
        }
    }

    /// Goals scored after the interval. Saturates at nil if the full-time score trails the
    /// first-half score, which only happens with malformed data.
    pub fn second_half(&self) -> Score {
        Score {
            home: self.full_time.home.saturating_sub(self.first_half.home),
            away: self.full_time.away.saturating_sub(self.first_half.away),
        }
    }
}

/// The four outcome fields of a record, exactly as sourced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalCounts {
    pub first_half_home: Option<u8>,
    pub first_half_away: Option<u8>,
    pub full_time_home: Option<u8>,
    pub full_time_away: Option<u8>,
}
impl GoalCounts {
    pub fn resolved(scoreline: Scoreline) -> Self {
        Self {
            first_half_home: Some(scoreline.first_half.home),
            first_half_away: Some(scoreline.first_half.away),
            full_time_home: Some(scoreline.full_time.home),
            full_time_away: Some(scoreline.full_time.away),
        }
    }

    pub fn pending() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        match (
            self.first_half_home,
            self.first_half_away,
            self.full_time_home,
            self.full_time_away,
        ) {
            (Some(h1_home), Some(h1_away), Some(ft_home), Some(ft_away)) => {
                Status::Resolved(Scoreline::new(
                    Score::new(h1_home, h1_away),
                    Score::new(ft_home, ft_away),
                ))
            }
            (None, None, None, None) => Status::Pending,
            _ => Status::Inconsistent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Resolved(Scoreline),
    Pending,
    Inconsistent,
}

/// Descriptive attributes of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub match_id: String,
    pub date: String,
    pub time: String,
    pub tournament: String,
    pub home_team: String,
    pub away_team: String,
}
impl Fixture {
    const DATE_FORMATS: [&'static str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y%m%d"];
    const TIME_FORMATS: [&'static str; 2] = ["%H:%M", "%H:%M:%S"];

    /// Sort key ordering fixtures by kickoff. Dates and times that can be parsed are compared
    /// chronologically; the raw text and the match id break any remaining ties.
    pub fn kickoff_key(&self) -> (Option<NaiveDate>, Option<NaiveTime>, &str, &str, &str) {
        let date = Self::DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(self.date.trim(), format).ok());
        let time = Self::TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(self.time.trim(), format).ok());
        (date, time, &self.date, &self.time, &self.match_id)
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v {}", self.home_team, self.away_team)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRecord {
    pub fixture: Fixture,
    pub odds: FxHashMap<String, f64>,
    pub goals: GoalCounts,
    /// Cells of columns that neither settle nor quote the match, such as corner counts, keyed
    /// by column. Carried through unchanged.
    pub extras: FxHashMap<String, String>,
}
impl MatchRecord {
    pub fn new(match_id: impl Into<String>) -> Self {
        Self {
            fixture: Fixture {
                match_id: match_id.into(),
                ..Fixture::default()
            },
            ..Self::default()
        }
    }

    pub fn with_kickoff(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.fixture.date = date.into();
        self.fixture.time = time.into();
        self
    }

    pub fn with_teams(mut self, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        self.fixture.home_team = home_team.into();
        self.fixture.away_team = away_team.into();
        self
    }

    pub fn with_odds<L: Into<String>>(mut self, odds: impl IntoIterator<Item = (L, f64)>) -> Self {
        self.odds
            .extend(odds.into_iter().map(|(label, price)| (label.into(), price)));
        self
    }

    pub fn with_scoreline(mut self, scoreline: Scoreline) -> Self {
        self.goals = GoalCounts::resolved(scoreline);
        self
    }

    pub fn with_goals(mut self, goals: GoalCounts) -> Self {
        self.goals = goals;
        self
    }

    pub fn match_id(&self) -> &str {
        &self.fixture.match_id
    }

    /// The quoted odds for the given label, if present and finite.
    pub fn quote(&self, label: &str) -> Option<f64> {
        self.odds.get(label).copied().filter(|price| price.is_finite())
    }
}

/// Keys within a record are visited in lexicographic order so that the result does not depend
/// on hashing.
fn union_of_keys<'a, K>(per_record: impl Iterator<Item = K>) -> Vec<String>
where
    K: Iterator<Item = &'a String>,
{
    let mut seen = FxHashSet::default();
    let mut union = vec![];
    for keys in per_record {
        let mut keys = keys.collect::<Vec<_>>();
        keys.sort();
        for key in keys {
            if seen.insert(key.as_str()) {
                union.push(key.clone());
            }
        }
    }
    union
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub feature_columns: Vec<String>,
    /// Columns carried in [MatchRecord::extras], in the order they are written.
    pub extra_columns: Vec<String>,
    pub records: Vec<MatchRecord>,
}
impl Dataset {
    pub fn new(feature_columns: Vec<String>, records: Vec<MatchRecord>) -> Self {
        Self {
            feature_columns,
            extra_columns: vec![],
            records,
        }
    }

    /// Assembles a dataset whose feature and extra columns are the unions of the keys found
    /// across the given records, in order of first appearance.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let feature_columns = union_of_keys(records.iter().map(|record| record.odds.keys()));
        let extra_columns = union_of_keys(records.iter().map(|record| record.extras.keys()));
        Self {
            feature_columns,
            extra_columns,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Permutes the records using a seeded Fisher-Yates shuffle. The same seed always yields the
    /// same permutation of a given record order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rand = StdRand::seed(seed);
        for index in (1..self.records.len()).rev() {
            let other = rand.next_lim_usize(index + 1);
            self.records.swap(index, other);
        }
        debug!("shuffled {} records with seed {seed}", self.records.len());
    }

    /// Splits the records into those usable as neighbours and those awaiting scoring.
    /// Records with a partially populated outcome belong to neither.
    pub fn partition(&self) -> Partition {
        let mut partition = Partition::default();
        for record in &self.records {
            match record.goals.status() {
                Status::Resolved(scoreline) => partition.resolved.push(Resolved { record, scoreline }),
                Status::Pending => partition.pending.push(record),
                Status::Inconsistent => {
                    warn!(
                        "match {} has a partially populated outcome {:?}; excluded",
                        record.match_id(),
                        record.goals
                    );
                    partition.inconsistent += 1;
                }
            }
        }
        debug!(
            "partitioned {} records into {} resolved, {} pending, {} inconsistent",
            self.records.len(),
            partition.resolved.len(),
            partition.pending.len(),
            partition.inconsistent
        );
        partition
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub record: &'a MatchRecord,
    pub scoreline: Scoreline,
}

#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub resolved: Vec<Resolved<'a>>,
    pub pending: Vec<&'a MatchRecord>,
    pub inconsistent: usize,
}
