//! Reading and writing of datasets and reports as CSV.
//!
//! A dataset has one row per match. The key columns identify, describe and settle the match;
//! every other column whose non-empty cells are all numeric is a quoted odd, headed by its
//! `market :: outcome` label. Any remaining columns, such as corner counts, are carried through
//! to the written dataset untouched.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{Reader, StringRecord, Writer};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::data::{Dataset, Fixture, GoalCounts, MatchRecord};
use crate::error::DatasetError;
use crate::selection::Report;
use crate::value::BetCandidate;

pub const MATCH_ID: &str = "match_id";
pub const MATCH_DATE: &str = "match_date";
pub const MATCH_TIME: &str = "match_time";
pub const TOURNAMENT: &str = "tournament";
pub const HOME_TEAM: &str = "homeTeam";
pub const AWAY_TEAM: &str = "awayTeam";
pub const FIRST_HALF_HOME_GOAL: &str = "firstHalfHomeGoal";
pub const FIRST_HALF_AWAY_GOAL: &str = "firstHalfAwayGoal";
pub const TOTAL_HOME_GOAL: &str = "totalHomeGoal";
pub const TOTAL_AWAY_GOAL: &str = "totalAwayGoal";

/// Columns that every dataset must carry, in the order they are written.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    MATCH_DATE,
    MATCH_TIME,
    TOURNAMENT,
    MATCH_ID,
    HOME_TEAM,
    AWAY_TEAM,
    FIRST_HALF_HOME_GOAL,
    FIRST_HALF_AWAY_GOAL,
    TOTAL_HOME_GOAL,
    TOTAL_AWAY_GOAL,
];

/// Key columns that may be present but are never features.
pub const OPTIONAL_KEY_COLUMNS: [&str; 2] = ["homeCorner", "awayCorner"];

pub fn is_key_column(column: &str) -> bool {
    REQUIRED_COLUMNS.contains(&column) || OPTIONAL_KEY_COLUMNS.contains(&column)
}

pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let dataset = read_dataset_from(File::open(path)?)?;
    info!(
        "read {} records with {} feature columns from {}",
        dataset.len(),
        dataset.feature_columns.len(),
        path.display()
    );
    Ok(dataset)
}

pub fn read_dataset_from(reader: impl io::Read) -> Result<Dataset, DatasetError> {
    let mut reader = Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut positions = FxHashMap::default();
    for (position, column) in headers.iter().enumerate() {
        if positions.insert(column, position).is_some() {
            return Err(DatasetError::DuplicateColumn(column.into()));
        }
    }
    let position = |column: &str| {
        positions
            .get(column)
            .copied()
            .ok_or_else(|| DatasetError::MissingColumn(column.into()))
    };
    let keys = KeyPositions {
        match_id: position(MATCH_ID)?,
        date: position(MATCH_DATE)?,
        time: position(MATCH_TIME)?,
        tournament: position(TOURNAMENT)?,
        home_team: position(HOME_TEAM)?,
        away_team: position(AWAY_TEAM)?,
        first_half_home: position(FIRST_HALF_HOME_GOAL)?,
        first_half_away: position(FIRST_HALF_AWAY_GOAL)?,
        full_time_home: position(TOTAL_HOME_GOAL)?,
        full_time_away: position(TOTAL_AWAY_GOAL)?,
    };

    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
    let feature_columns = headers
        .iter()
        .enumerate()
        .filter(|(position, column)| !is_key_column(column) && is_numeric(&rows, *position))
        .map(|(position, column)| (position, column.to_string()))
        .collect::<Vec<_>>();
    let extra_columns = headers
        .iter()
        .enumerate()
        .filter(|(position, column)| {
            !REQUIRED_COLUMNS.contains(column) && !feature_columns.iter().any(|(feature, _)| feature == position)
        })
        .map(|(position, column)| (position, column.to_string()))
        .collect::<Vec<_>>();
    debug!(
        "{} of {} columns are features, {} are carried",
        feature_columns.len(),
        headers.len(),
        extra_columns.len()
    );

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let cell = |position: usize| row.get(position).unwrap_or_default().trim();
        let goal = |position: usize| parse_goal(cell(position), row_number, &headers[position]);
        let odds = feature_columns
            .iter()
            .filter_map(|(position, column)| {
                let cell = cell(*position);
                if is_missing(cell) {
                    None
                } else {
                    cell.parse::<f64>().ok().map(|price| (column.clone(), price))
                }
            })
            .collect();
        let extras = extra_columns
            .iter()
            .filter(|(position, _)| !cell(*position).is_empty())
            .map(|(position, column)| (column.clone(), cell(*position).to_string()))
            .collect();
        records.push(MatchRecord {
            fixture: Fixture {
                match_id: cell(keys.match_id).into(),
                date: cell(keys.date).into(),
                time: cell(keys.time).into(),
                tournament: cell(keys.tournament).into(),
                home_team: cell(keys.home_team).into(),
                away_team: cell(keys.away_team).into(),
            },
            odds,
            goals: GoalCounts {
                first_half_home: goal(keys.first_half_home)?,
                first_half_away: goal(keys.first_half_away)?,
                full_time_home: goal(keys.full_time_home)?,
                full_time_away: goal(keys.full_time_away)?,
            },
            extras,
        });
    }

    let names = |columns: Vec<(usize, String)>| -> Vec<String> {
        columns.into_iter().map(|(_, column)| column).collect()
    };
    Ok(Dataset {
        feature_columns: names(feature_columns),
        extra_columns: names(extra_columns),
        records,
    })
}

struct KeyPositions {
    match_id: usize,
    date: usize,
    time: usize,
    tournament: usize,
    home_team: usize,
    away_team: usize,
    first_half_home: usize,
    first_half_away: usize,
    full_time_home: usize,
    full_time_away: usize,
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("nan")
}

fn is_numeric(rows: &[StringRecord], position: usize) -> bool {
    rows.iter().all(|row| {
        let cell = row.get(position).unwrap_or_default().trim();
        is_missing(cell) || cell.parse::<f64>().is_ok()
    })
}

/// Parses a goal count written either as an integer or as an integral float (`2`, `2.0`).
fn parse_goal(cell: &str, row: usize, column: &str) -> Result<Option<u8>, DatasetError> {
    if is_missing(cell) {
        return Ok(None);
    }
    let malformed = || DatasetError::MalformedValue {
        row,
        column: column.into(),
        value: cell.into(),
    };
    if let Ok(goals) = cell.parse::<u8>() {
        return Ok(Some(goals));
    }
    let goals = cell.parse::<f64>().map_err(|_| malformed())?;
    if goals.fract() == 0.0 && (0.0..=u8::MAX as f64).contains(&goals) {
        Ok(Some(goals as u8))
    } else {
        Err(malformed())
    }
}

pub fn write_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<(), DatasetError> {
    let path = path.as_ref();
    write_dataset_to(File::create(path)?, dataset)?;
    info!(
        "wrote {} records with {} feature columns to {}",
        dataset.len(),
        dataset.feature_columns.len(),
        path.display()
    );
    Ok(())
}

pub fn write_dataset_to(writer: impl io::Write, dataset: &Dataset) -> Result<(), DatasetError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .chain(dataset.extra_columns.iter().map(String::as_str))
            .chain(dataset.feature_columns.iter().map(String::as_str)),
    )?;

    let goal = |goals: Option<u8>| goals.map(|goals| goals.to_string()).unwrap_or_default();
    for record in &dataset.records {
        let fixture = &record.fixture;
        let mut row = vec![
            fixture.date.clone(),
            fixture.time.clone(),
            fixture.tournament.clone(),
            fixture.match_id.clone(),
            fixture.home_team.clone(),
            fixture.away_team.clone(),
            goal(record.goals.first_half_home),
            goal(record.goals.first_half_away),
            goal(record.goals.full_time_home),
            goal(record.goals.full_time_away),
        ];
        row.extend(
            dataset
                .extra_columns
                .iter()
                .map(|column| record.extras.get(column).cloned().unwrap_or_default()),
        );
        row.extend(dataset.feature_columns.iter().map(|column| {
            record
                .odds
                .get(column)
                .map(|price| price.to_string())
                .unwrap_or_default()
        }));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One line of a result collection.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    match_date: &'a str,
    match_time: &'a str,
    match_id: &'a str,
    tournament: &'a str,
    #[serde(rename = "homeTeam")]
    home_team: &'a str,
    #[serde(rename = "awayTeam")]
    away_team: &'a str,
    bet_name: &'a str,
    probability: f64,
    odds: f64,
    ev: f64,
    kelly: f64,
    stake: f64,
    bankroll_if_win: f64,
    bankroll_if_lose: f64,
    expected_bankroll: f64,
}
impl<'a> From<&'a BetCandidate> for ReportRow<'a> {
    fn from(candidate: &'a BetCandidate) -> Self {
        let fixture = &candidate.fixture;
        Self {
            match_date: &fixture.date,
            match_time: &fixture.time,
            match_id: &fixture.match_id,
            tournament: &fixture.tournament,
            home_team: &fixture.home_team,
            away_team: &fixture.away_team,
            bet_name: &candidate.label,
            probability: candidate.probability,
            odds: candidate.odds,
            ev: candidate.ev,
            kelly: candidate.stake.kelly,
            stake: candidate.stake.percent(),
            bankroll_if_win: candidate.stake.bankroll_if_win,
            bankroll_if_lose: candidate.stake.bankroll_if_lose,
            expected_bankroll: candidate.stake.expected_bankroll,
        }
    }
}

pub fn write_candidates_to(writer: impl io::Write, candidates: &[BetCandidate]) -> Result<(), DatasetError> {
    let mut writer = Writer::from_writer(writer);
    if candidates.is_empty() {
        writer.write_record(REPORT_COLUMNS)?;
    }
    for candidate in candidates {
        writer.serialize(ReportRow::from(candidate))?;
    }
    writer.flush()?;
    Ok(())
}

const REPORT_COLUMNS: [&str; 15] = [
    "match_date",
    "match_time",
    "match_id",
    "tournament",
    "homeTeam",
    "awayTeam",
    "bet_name",
    "probability",
    "odds",
    "ev",
    "kelly",
    "stake",
    "bankroll_if_win",
    "bankroll_if_lose",
    "expected_bankroll",
];

/// Paths of the three result collections of a run labelled `label` under `dir`: the raw
/// candidates, the picks by probability and the picks by expected bankroll.
pub fn report_paths(dir: impl AsRef<Path>, label: &str) -> [PathBuf; 3] {
    let dir = dir.as_ref();
    [
        dir.join(format!("value_bets_{label}.csv")),
        dir.join(format!("value_bets_by_prob_{label}.csv")),
        dir.join(format!("value_bets_by_bankroll_{label}.csv")),
    ]
}

pub fn write_report(dir: impl AsRef<Path>, label: &str, report: &Report) -> Result<[PathBuf; 3], DatasetError> {
    let paths = report_paths(dir, label);
    let collections = [&report.raw, &report.by_probability, &report.by_bankroll];
    for (path, candidates) in paths.iter().zip(collections) {
        write_candidates_to(File::create(path)?, candidates)?;
        info!("wrote {} candidates to {}", candidates.len(), path.display());
    }
    Ok(paths)
}
