use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::cleanse::ColumnProfile;
use crate::value::BetCandidate;

/// Tabulates up to `limit` picks, in the order given.
pub fn tabulate_picks(picks: &[BetCandidate], limit: usize) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(Left)),
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(30)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Date".into(),
                "Time".into(),
                "Fixture".into(),
                "Bet".into(),
                "Probability".into(),
                "Odds".into(),
                "EV".into(),
                "Stake %".into(),
                "E[bankroll]".into(),
            ],
        ));
    for pick in picks.iter().take(limit) {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                pick.fixture.date.clone().into(),
                pick.fixture.time.clone().into(),
                pick.fixture.to_string().into(),
                pick.label.clone().into(),
                format!("{:.2}%", pick.probability).into(),
                format!("{:.2}", pick.odds).into(),
                format!("{:.3}", pick.ev).into(),
                format!("{:.2}", pick.stake.percent()).into(),
                format!("{:.4}", pick.stake.expected_bankroll).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_profiles(profiles: &[ColumnProfile]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(30)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Column".into(), "Null ratio".into(), "Distinct".into()],
        ));
    for profile in profiles {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                profile.column.clone().into(),
                format!("{:.4}", profile.null_ratio).into(),
                format!("{}", profile.distinct).into(),
            ],
        ));
    }
    table
}
