//! The standard market table. Market and outcome names are the exact labels under which the
//! odds feed quotes each wager; most markets are generated from the small tables below.

use super::*;

use super::Period::{FirstHalf, FullTime, SecondHalf};
use super::Side::{Away, Home};

/// Half-goal lines, by their whole part: `2` is the 2.5 line.
type Lines = &'static [u16];

struct TotalsMarket {
    market: &'static str,
    prefix: &'static str,
    goals: Goals,
    lines: Lines,
}

const TOTALS_MARKETS: [TotalsMarket; 7] = [
    TotalsMarket {
        market: "Toplam Gol Alt/Üst",
        prefix: "",
        goals: Goals::total(FullTime),
        lines: &[0, 1, 2, 3, 4, 5, 6],
    },
    TotalsMarket {
        market: "İlk Yarı Gol Alt/Üst",
        prefix: "İY ",
        goals: Goals::total(FirstHalf),
        lines: &[0, 1, 2, 4],
    },
    TotalsMarket {
        market: "İkinci Yarı Gol Alt/Üst",
        prefix: "2.Y ",
        goals: Goals::total(SecondHalf),
        lines: &[0, 1, 2],
    },
    TotalsMarket {
        market: "Ev Sahibi Gol Alt/Üst",
        prefix: "Ev ",
        goals: Goals::side(FullTime, Home),
        lines: &[0, 1, 2, 3, 4],
    },
    TotalsMarket {
        market: "Ev Sahibi İlk Yarı Gol Alt/Üst",
        prefix: "Ev İY ",
        goals: Goals::side(FirstHalf, Home),
        lines: &[0, 1, 2],
    },
    TotalsMarket {
        market: "Deplasman Gol Alt/Üst",
        prefix: "Dep ",
        goals: Goals::side(FullTime, Away),
        lines: &[0, 1, 2, 3, 4, 6],
    },
    TotalsMarket {
        market: "Deplasman İlk Yarı Gol Alt/Üst",
        prefix: "Dep İY ",
        goals: Goals::side(FirstHalf, Away),
        lines: &[0, 1, 2],
    },
];

/// Lines combined with the full-time result.
const RESULT_TOTALS_LINES: Lines = &[1, 2, 3, 4];

/// Line combined with both teams to score.
const BOTH_SCORE_TOTALS_LINE: u16 = 2;

const VERDICTS: [(&str, Verdict); 3] = [
    ("1", Verdict::Win(Home)),
    ("X", Verdict::Draw),
    ("2", Verdict::Win(Away)),
];

struct ResultMarket {
    market: &'static str,
    prefix: &'static str,
    period: Period,
}

const RESULT_MARKETS: [ResultMarket; 3] = [
    ResultMarket {
        market: "Maç Sonucu",
        prefix: "MS ",
        period: FullTime,
    },
    ResultMarket {
        market: "İlk Yarı Sonucu",
        prefix: "İY ",
        period: FirstHalf,
    },
    ResultMarket {
        market: "İkinci Yarı Sonucu",
        prefix: "2.Y ",
        period: SecondHalf,
    },
];

struct BothScoreMarket {
    market: &'static str,
    prefix: &'static str,
    period: Period,
}

const BOTH_SCORE_MARKETS: [BothScoreMarket; 3] = [
    BothScoreMarket {
        market: "Karşılıklı Gol",
        prefix: "",
        period: FullTime,
    },
    BothScoreMarket {
        market: "İlk Yarı Karşılıklı Gol",
        prefix: "İY ",
        period: FirstHalf,
    },
    BothScoreMarket {
        market: "İkinci Yarı Karşılıklı Gol",
        prefix: "2.Y ",
        period: SecondHalf,
    },
];

const BUSIER_HALF_MARKETS: [(&str, Option<Side>); 3] = [
    ("Hangi Yarıda Daha Fazla Gol Atılır?", None),
    ("Ev Sahibi Hangi Yarıda Daha Fazla Gol Atar?", Some(Home)),
    ("Deplasman Hangi Yarıda Daha Fazla Gol Atar?", Some(Away)),
];

const BUSIER_HALVES: [(&str, Busier); 3] = [
    ("1. Yarı", Busier::FirstHalf),
    ("2. Yarı", Busier::SecondHalf),
    ("Eşit", Busier::Level),
];

/// Per-side yes/no markets: (home market, away market, settlement).
const SIDE_PROPOSITIONS: [(&str, &str, fn(Side) -> Predicate); 3] = [
    (
        "Ev Sahibi Gol Yemeden Kazanır mı?",
        "Deplasman Gol Yemeden Kazanır mı?",
        win_to_nil,
    ),
    (
        "Ev Sahibi Her İki Yarıyı da Kazanır mı?",
        "Deplasman Her İki Yarıyı da Kazanır mı?",
        win_both_halves,
    ),
    (
        "Ev Sahibi Herhangi Bir Yarıyı Kazanır",
        "Deplasman Herhangi Bir Yarıyı Kazanır",
        win_either_half,
    ),
];

const MARGINS: [(&str, Margin); 7] = [
    ("Berabere", Margin::Exact(0)),
    ("Dep 1 Fark", Margin::Exact(-1)),
    ("Dep 2 Fark", Margin::Exact(-2)),
    ("Dep 3+ Fark", Margin::AtLeast(Away, 3)),
    ("Ev 1 Fark", Margin::Exact(1)),
    ("Ev 2 Fark", Margin::Exact(2)),
    ("Ev 3+ Fark", Margin::AtLeast(Home, 3)),
];

enum Margin {
    Exact(i16),
    AtLeast(Side, u16),
}

const TOTAL_GOAL_RANGES: [(&str, u16, Option<u16>); 4] = [
    ("0-1 Gol", 0, Some(1)),
    ("2-3 Gol", 2, Some(3)),
    ("4-5 Gol", 4, Some(5)),
    ("6+ Gol", 6, None),
];

const FIRST_HALF_SCORES: [(u8, u8); 9] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 1), (2, 2),
];

const FULL_TIME_SCORES: [(u8, u8); 40] = [
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6),
    (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4),
    (5, 0), (5, 1), (5, 2), (5, 3), (5, 4),
    (6, 0), (6, 1), (6, 2),
];

const OTHER_SCORE: &str = "diğer";
const YES: &str = "Evet";
const NO: &str = "Hayır";

pub(super) fn entries() -> Vec<Entry> {
    let mut entries = Vec::with_capacity(256);
    results(&mut entries);
    double_chance(&mut entries);
    half_time_full_time(&mut entries);
    totals(&mut entries);
    goal_ranges(&mut entries);
    odd_even(&mut entries);
    both_score(&mut entries);
    margins(&mut entries);
    busier_halves(&mut entries);
    side_propositions(&mut entries);
    halves_under_over(&mut entries);
    result_totals(&mut entries);
    result_both_score(&mut entries);
    both_score_totals(&mut entries);
    scores(&mut entries, "İlk Yarı Skoru", FirstHalf, &FIRST_HALF_SCORES, None);
    scores(&mut entries, "Maç Skoru", FullTime, &FULL_TIME_SCORES, Some(":"));
    entries
}

fn result(period: Period, verdict: Verdict) -> Predicate {
    Predicate::Result(period, verdict)
}

fn over(goals: Goals, line: u16) -> Predicate {
    Predicate::Over(goals, line)
}

fn under(goals: Goals, line: u16) -> Predicate {
    Predicate::Under(goals, line + 1)
}

fn win_to_nil(side: Side) -> Predicate {
    Predicate::All(vec![
        result(FullTime, Verdict::Win(side)),
        Predicate::Under(Goals::side(FullTime, side.opponent()), 1),
    ])
}

fn win_both_halves(side: Side) -> Predicate {
    Predicate::All(vec![
        result(FirstHalf, Verdict::Win(side)),
        result(SecondHalf, Verdict::Win(side)),
    ])
}

fn win_either_half(side: Side) -> Predicate {
    Predicate::Any(vec![
        result(FirstHalf, Verdict::Win(side)),
        result(SecondHalf, Verdict::Win(side)),
    ])
}

fn yes_no(entries: &mut Vec<Entry>, market: &str, yes: Predicate) {
    entries.push(Entry::new(market, YES, yes.clone()));
    entries.push(Entry::new(market, NO, Predicate::not(yes)));
}

fn results(entries: &mut Vec<Entry>) {
    for ResultMarket { market, prefix, period } in &RESULT_MARKETS {
        for (code, verdict) in VERDICTS {
            entries.push(Entry::new(*market, format!("{prefix}{code}"), result(*period, verdict)));
        }
    }
}

fn double_chance(entries: &mut Vec<Entry>) {
    const MARKET: &str = "Çifte Şans";
    for (outcome, excluded) in [("ÇŞ 1-X", Verdict::Win(Away)), ("ÇŞ 1-2", Verdict::Draw), ("ÇŞ X-2", Verdict::Win(Home))] {
        entries.push(Entry::new(MARKET, outcome, Predicate::not(result(FullTime, excluded))));
    }
}

fn half_time_full_time(entries: &mut Vec<Entry>) {
    const MARKET: &str = "İlk Yarı / Maç Sonucu";
    for (half_time_code, half_time) in VERDICTS {
        for (full_time_code, full_time) in VERDICTS {
            entries.push(Entry::new(
                MARKET,
                format!("{half_time_code}/{full_time_code}"),
                Predicate::All(vec![result(FirstHalf, half_time), result(FullTime, full_time)]),
            ));
        }
    }
}

fn totals(entries: &mut Vec<Entry>) {
    for TotalsMarket { market, prefix, goals, lines } in &TOTALS_MARKETS {
        for &line in *lines {
            entries.push(Entry::new(*market, format!("{prefix}{line},5 Alt"), under(*goals, line)));
            entries.push(Entry::new(*market, format!("{prefix}{line},5 Üst"), over(*goals, line)));
        }
    }
}

fn goal_ranges(entries: &mut Vec<Entry>) {
    const MARKET: &str = "Toplam Gol Aralığı";
    let goals = Goals::total(FullTime);
    for (outcome, min, max) in TOTAL_GOAL_RANGES {
        let predicate = match max {
            Some(max) => Predicate::Between(goals, min, max),
            None => Predicate::Over(goals, min - 1),
        };
        entries.push(Entry::new(MARKET, outcome, predicate));
    }
}

fn odd_even(entries: &mut Vec<Entry>) {
    for (market, prefix, period) in [("Toplam Gol Tek/Çift", "", FullTime), ("İlk Yarı Gol Tek/Çift", "İY ", FirstHalf)] {
        let odd = Predicate::Odd(Goals::total(period));
        entries.push(Entry::new(market, format!("{prefix}Tek"), odd.clone()));
        entries.push(Entry::new(market, format!("{prefix}Çift"), Predicate::not(odd)));
    }
}

fn both_score(entries: &mut Vec<Entry>) {
    for BothScoreMarket { market, prefix, period } in &BOTH_SCORE_MARKETS {
        let both = Predicate::BothScore(*period);
        entries.push(Entry::new(*market, format!("{prefix}KG Var"), both.clone()));
        entries.push(Entry::new(*market, format!("{prefix}KG Yok"), Predicate::not(both)));
    }
}

fn margins(entries: &mut Vec<Entry>) {
    const MARKET: &str = "Hangi Takım Kaç Farkla Kazanır";
    for (outcome, margin) in MARGINS {
        let predicate = match margin {
            Margin::Exact(margin) => Predicate::Margin(margin),
            Margin::AtLeast(side, by) => Predicate::MarginAtLeast(side, by),
        };
        entries.push(Entry::new(MARKET, outcome, predicate));
    }
}

fn busier_halves(entries: &mut Vec<Entry>) {
    for (market, side) in BUSIER_HALF_MARKETS {
        for (outcome, busier) in BUSIER_HALVES {
            entries.push(Entry::new(market, outcome, Predicate::MoreGoals(side, busier)));
        }
    }
}

fn side_propositions(entries: &mut Vec<Entry>) {
    for (home_market, away_market, settle) in SIDE_PROPOSITIONS {
        yes_no(entries, home_market, settle(Home));
        yes_no(entries, away_market, settle(Away));
    }
}

fn halves_under_over(entries: &mut Vec<Entry>) {
    let first = Goals::total(FirstHalf);
    let second = Goals::total(SecondHalf);
    yes_no(
        entries,
        "Her İki Yarıda da 1.5 Gol Alt Olur mu?",
        Predicate::All(vec![under(first, 1), under(second, 1)]),
    );
    yes_no(
        entries,
        "Her İki Yarıda da 1.5 Gol Üst Olur mu?",
        Predicate::All(vec![over(first, 1), over(second, 1)]),
    );
}

fn result_totals(entries: &mut Vec<Entry>) {
    let goals = Goals::total(FullTime);
    for &line in RESULT_TOTALS_LINES {
        let market = format!("Maç Sonucu ve {line},5 Gol Alt/Üst");
        for (code, verdict) in VERDICTS {
            for (side_of_line, totals) in [("Alt", under(goals, line)), ("Üst", over(goals, line))] {
                entries.push(Entry::new(
                    market.as_str(),
                    format!("MS {code} ve {line},5 {side_of_line}"),
                    Predicate::All(vec![result(FullTime, verdict), totals]),
                ));
            }
        }
    }
}

fn result_both_score(entries: &mut Vec<Entry>) {
    const MARKET: &str = "Maç Sonucu ve Karşılıklı Gol";
    for (code, verdict) in VERDICTS {
        let both = Predicate::BothScore(FullTime);
        entries.push(Entry::new(
            MARKET,
            format!("MS {code} ve Var"),
            Predicate::All(vec![result(FullTime, verdict), both.clone()]),
        ));
        entries.push(Entry::new(
            MARKET,
            format!("MS {code} ve Yok"),
            Predicate::All(vec![result(FullTime, verdict), Predicate::not(both)]),
        ));
    }
}

fn both_score_totals(entries: &mut Vec<Entry>) {
    let line = BOTH_SCORE_TOTALS_LINE;
    let market = format!("Karşılıklı Gol ve {line},5 Gol Alt/Üst");
    let goals = Goals::total(FullTime);
    for (side_of_line, totals) in [("Alt", under(goals, line)), ("Üst", over(goals, line))] {
        for (both_code, both) in [("Var", Predicate::BothScore(FullTime)), ("Yok", Predicate::not(Predicate::BothScore(FullTime)))] {
            entries.push(Entry::new(
                market.as_str(),
                format!("{line},5 {side_of_line} ve KG {both_code}"),
                Predicate::All(vec![totals.clone(), both]),
            ));
        }
    }
}

/// Enumerates the listed scores along with a bucket for every other score, so that each
/// resolved match settles exactly one outcome of the market.
fn scores(entries: &mut Vec<Entry>, market: &str, period: Period, scores: &[(u8, u8)], alias_separator: Option<&str>) {
    let scores = scores
        .iter()
        .map(|&(home, away)| Score::new(home, away))
        .collect::<Vec<_>>();
    for score in &scores {
        let mut entry = Entry::new(market, score.to_string(), Predicate::Score(period, *score));
        if let Some(separator) = alias_separator {
            entry = entry.with_alias(format!("{}{separator}{}", score.home, score.away));
        }
        entries.push(entry);
    }
    entries.push(Entry::new(market, OTHER_SCORE, Predicate::OtherScore(period, scores)));
}
