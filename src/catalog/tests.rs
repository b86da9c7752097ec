use rustc_hash::{FxHashMap, FxHashSet};

use super::*;

fn entries_of<'a>(catalog: &'a Catalog, market: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
    catalog.entries().iter().filter(move |entry| entry.market == market)
}

fn scoreline(first_half: (u8, u8), full_time: (u8, u8)) -> Scoreline {
    Scoreline::new(
        Score::new(first_half.0, first_half.1),
        Score::new(full_time.0, full_time.1),
    )
}

/// A spread of scorelines, including some beyond the enumerated exact scores.
fn scorelines() -> Vec<Scoreline> {
    let mut scorelines = vec![];
    for full_home in 0..=7 {
        for full_away in 0..=7 {
            for first_home in 0..=full_home {
                for first_away in 0..=full_away {
                    scorelines.push(scoreline((first_home, first_away), (full_home, full_away)));
                }
            }
        }
    }
    scorelines
}

fn entry<'a>(catalog: &'a Catalog, label: &str) -> &'a Entry {
    catalog
        .entries()
        .iter()
        .find(|entry| entry.label() == label)
        .unwrap_or_else(|| panic!("no entry labelled '{label}'"))
}

fn settles(label: &str, scoreline: Scoreline) -> bool {
    entry(&Catalog::standard(), label).predicate.test(&scoreline)
}

#[test]
fn standard_size() {
    assert_eq!(214, Catalog::standard().len());
}

#[test]
fn standard_labels_unique() {
    let catalog = Catalog::try_from(Catalog::standard().entries().to_vec()).unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn duplicate_label_rejected() {
    let entries = vec![
        Entry::new("Karşılıklı Gol", "KG Var", Predicate::BothScore(Period::FullTime)),
        Entry::new("Karşılıklı Gol", "KG Var", Predicate::BothScore(Period::FirstHalf)),
    ];
    assert_eq!(
        CatalogError::DuplicateLabel("Karşılıklı Gol :: KG Var".into()),
        Catalog::try_from(entries).unwrap_err()
    );
}

#[test]
fn duplicate_alias_rejected() {
    let entries = vec![
        Entry::new("Maç Skoru", "1-0", Predicate::Score(Period::FullTime, Score::new(1, 0))),
        Entry::new("Maç Skoru", "1:0", Predicate::Score(Period::FullTime, Score::new(1, 0)))
            .with_alias("1-0"),
    ];
    assert_eq!(
        CatalogError::DuplicateLabel("Maç Skoru :: 1-0".into()),
        Catalog::try_from(entries).unwrap_err()
    );
}

#[test]
fn empty_rejected() {
    assert_eq!(CatalogError::Empty, Catalog::try_from(Vec::<Entry>::new()).unwrap_err());
}

/// Markets whose outcomes partition every possible scoreline: exactly one outcome holds.
#[test]
fn exclusive_markets_settle_once() {
    let catalog = Catalog::standard();
    let exclusive = [
        "Maç Sonucu",
        "İlk Yarı Sonucu",
        "İkinci Yarı Sonucu",
        "İlk Yarı / Maç Sonucu",
        "İlk Yarı Skoru",
        "Maç Skoru",
        "Hangi Takım Kaç Farkla Kazanır",
        "Hangi Yarıda Daha Fazla Gol Atılır?",
        "Ev Sahibi Hangi Yarıda Daha Fazla Gol Atar?",
        "Deplasman Hangi Yarıda Daha Fazla Gol Atar?",
        "Toplam Gol Aralığı",
        "Toplam Gol Tek/Çift",
        "İlk Yarı Gol Tek/Çift",
        "Karşılıklı Gol",
        "İlk Yarı Karşılıklı Gol",
        "İkinci Yarı Karşılıklı Gol",
        "Karşılıklı Gol ve 2,5 Gol Alt/Üst",
        "Maç Sonucu ve Karşılıklı Gol",
        "Ev Sahibi Gol Yemeden Kazanır mı?",
        "Deplasman Her İki Yarıyı da Kazanır mı?",
    ];
    for market in exclusive {
        let entries = entries_of(&catalog, market).collect::<Vec<_>>();
        assert!(!entries.is_empty(), "no entries in {market}");
        for scoreline in scorelines() {
            let settled = entries
                .iter()
                .filter(|entry| entry.predicate.test(&scoreline))
                .count();
            assert_eq!(1, settled, "{market} for {scoreline:?}");
        }
    }
}

#[test]
fn exact_score_buckets_sum_to_neighbours() {
    let catalog = Catalog::standard();
    let scorelines = scorelines();
    for market in ["Maç Skoru", "İlk Yarı Skoru"] {
        let votes: usize = catalog
            .entries()
            .iter()
            .filter(|entry| entry.market == market)
            .map(|entry| {
                scorelines
                    .iter()
                    .filter(|scoreline| entry.predicate.test(scoreline))
                    .count()
            })
            .sum();
        assert_eq!(scorelines.len(), votes, "{market}");
    }
}

#[test]
fn over_under_lines_complement() {
    let catalog = Catalog::standard();
    let over_under = catalog
        .entries()
        .iter()
        .filter(|entry| entry.market.ends_with("Gol Alt/Üst") && !entry.market.starts_with("Maç Sonucu") && !entry.market.starts_with("Karşılıklı"))
        .collect::<Vec<_>>();
    assert_eq!(62, over_under.len());
    for under in over_under.iter().filter(|entry| entry.outcome.ends_with(" Alt")) {
        let over_outcome = under.outcome.replace(" Alt", " Üst");
        let over = over_under
            .iter()
            .find(|entry| entry.market == under.market && entry.outcome == over_outcome)
            .unwrap();
        for scoreline in scorelines() {
            assert_ne!(
                under.predicate.test(&scoreline),
                over.predicate.test(&scoreline),
                "{under} v {over} for {scoreline:?}"
            );
        }
    }
}

#[test]
fn totals() {
    let scoreline = scoreline((1, 0), (2, 1));
    assert!(settles("Toplam Gol Alt/Üst :: 2,5 Üst", scoreline));
    assert!(!settles("Toplam Gol Alt/Üst :: 2,5 Alt", scoreline));
    assert!(settles("Toplam Gol Alt/Üst :: 3,5 Alt", scoreline));
    assert!(settles("İlk Yarı Gol Alt/Üst :: İY 0,5 Üst", scoreline));
    assert!(settles("İlk Yarı Gol Alt/Üst :: İY 1,5 Alt", scoreline));
    assert!(settles("İkinci Yarı Gol Alt/Üst :: 2.Y 1,5 Üst", scoreline));
    assert!(settles("Ev Sahibi Gol Alt/Üst :: Ev 1,5 Üst", scoreline));
    assert!(settles("Deplasman Gol Alt/Üst :: Dep 0,5 Üst", scoreline));
    assert!(settles("Deplasman İlk Yarı Gol Alt/Üst :: Dep İY 0,5 Alt", scoreline));
    assert!(settles("Toplam Gol Aralığı :: 2-3 Gol", scoreline));
    assert!(settles("Toplam Gol Tek/Çift :: Tek", scoreline));
    assert!(settles("İlk Yarı Gol Tek/Çift :: İY Tek", scoreline));
    assert!(settles("Toplam Gol Aralığı :: 6+ Gol", self::scoreline((2, 2), (3, 3))));
}

#[test]
fn results() {
    let scoreline = scoreline((0, 1), (2, 1));
    assert!(settles("Maç Sonucu :: MS 1", scoreline));
    assert!(settles("İlk Yarı Sonucu :: İY 2", scoreline));
    assert!(settles("İkinci Yarı Sonucu :: 2.Y 1", scoreline));
    assert!(settles("İlk Yarı / Maç Sonucu :: 2/1", scoreline));
    assert!(settles("Çifte Şans :: ÇŞ 1-X", scoreline));
    assert!(settles("Çifte Şans :: ÇŞ 1-2", scoreline));
    assert!(!settles("Çifte Şans :: ÇŞ X-2", scoreline));
    assert!(settles("Hangi Takım Kaç Farkla Kazanır :: Ev 1 Fark", scoreline));
    assert!(settles("Hangi Takım Kaç Farkla Kazanır :: Dep 3+ Fark", self::scoreline((0, 0), (1, 5))));
    assert!(settles("Hangi Takım Kaç Farkla Kazanır :: Berabere", self::scoreline((0, 0), (2, 2))));
}

#[test]
fn both_teams_score() {
    let scoreline = scoreline((1, 0), (1, 2));
    assert!(settles("Karşılıklı Gol :: KG Var", scoreline));
    assert!(settles("İlk Yarı Karşılıklı Gol :: İY KG Yok", scoreline));
    assert!(settles("İkinci Yarı Karşılıklı Gol :: 2.Y KG Yok", scoreline));
    assert!(settles("Karşılıklı Gol ve 2,5 Gol Alt/Üst :: 2,5 Üst ve KG Var", scoreline));
    assert!(settles("Maç Sonucu ve Karşılıklı Gol :: MS 2 ve Var", scoreline));
    assert!(settles("Maç Sonucu ve 2,5 Gol Alt/Üst :: MS 2 ve 2,5 Üst", scoreline));
    assert!(settles("Maç Sonucu ve 3,5 Gol Alt/Üst :: MS 2 ve 3,5 Alt", scoreline));
}

#[test]
fn halves() {
    let scoreline = scoreline((1, 0), (3, 0));
    assert!(settles("Hangi Yarıda Daha Fazla Gol Atılır? :: 2. Yarı", scoreline));
    assert!(settles("Ev Sahibi Hangi Yarıda Daha Fazla Gol Atar? :: 2. Yarı", scoreline));
    assert!(settles("Deplasman Hangi Yarıda Daha Fazla Gol Atar? :: Eşit", scoreline));
    assert!(settles("Ev Sahibi Gol Yemeden Kazanır mı? :: Evet", scoreline));
    assert!(settles("Deplasman Gol Yemeden Kazanır mı? :: Hayır", scoreline));
    assert!(settles("Ev Sahibi Her İki Yarıyı da Kazanır mı? :: Evet", scoreline));
    assert!(settles("Ev Sahibi Herhangi Bir Yarıyı Kazanır :: Evet", scoreline));
    assert!(settles("Deplasman Herhangi Bir Yarıyı Kazanır :: Hayır", scoreline));
    assert!(settles("Her İki Yarıda da 1.5 Gol Alt Olur mu? :: Hayır", scoreline));
    assert!(settles("Her İki Yarıda da 1.5 Gol Üst Olur mu? :: Hayır", scoreline));
    assert!(settles("Her İki Yarıda da 1.5 Gol Üst Olur mu? :: Evet", self::scoreline((1, 1), (2, 2))));
    assert!(settles("Her İki Yarıda da 1.5 Gol Alt Olur mu? :: Evet", self::scoreline((1, 0), (1, 1))));
}

#[test]
fn exact_scores() {
    assert!(settles("Maç Skoru :: 2-1", scoreline((0, 0), (2, 1))));
    assert!(settles("Maç Skoru :: diğer", scoreline((0, 0), (3, 6))));
    assert!(!settles("Maç Skoru :: diğer", scoreline((0, 0), (6, 2))));
    assert!(settles("İlk Yarı Skoru :: diğer", scoreline((3, 0), (3, 0))));
    assert!(settles("İlk Yarı Skoru :: 1-1", scoreline((1, 1), (3, 3))));
}

#[test]
fn quote_by_alias() {
    let catalog = Catalog::standard();
    let entry = entry(&catalog, "Maç Skoru :: 1-0");
    assert_eq!(
        vec!["Maç Skoru :: 1-0".to_string(), "Maç Skoru :: 1:0".to_string()],
        entry.labels().collect::<Vec<_>>()
    );

    let record = MatchRecord::new("1").with_odds([("Maç Skoru :: 1:0", 7.5)]);
    assert_eq!(("Maç Skoru :: 1:0".to_string(), 7.5), entry.quote(&record));

    let record = record.with_odds([("Maç Skoru :: 1-0", 7.0)]);
    assert_eq!(("Maç Skoru :: 1-0".to_string(), 7.0), entry.quote(&record));
}

#[test]
fn quote_missing() {
    let catalog = Catalog::standard();
    let entry = entry(&catalog, "Maç Sonucu :: MS X");
    let record = MatchRecord::new("1").with_odds([("Maç Sonucu :: MS 1", 2.0), ("Maç Sonucu :: MS X", f64::NAN)]);
    assert_eq!(("Maç Sonucu :: MS X".to_string(), 0.0), entry.quote(&record));
}

#[test]
fn markets_in_order() {
    let catalog = Catalog::standard();
    let mut seen = FxHashSet::default();
    let markets = catalog
        .entries()
        .iter()
        .map(|entry| entry.market.as_str())
        .filter(|market| seen.insert(*market))
        .collect::<Vec<_>>();
    assert_eq!("Maç Sonucu", markets[0]);
    let mut counts = FxHashMap::default();
    for market in &markets {
        *counts.entry(*market).or_insert(0) += 1;
    }
    assert!(counts.values().all(|&count| count == 1));
    assert_eq!(3, entries_of(&catalog, "Maç Sonucu").count());
    assert_eq!(9, entries_of(&catalog, "İlk Yarı / Maç Sonucu").count());
    assert_eq!(41, entries_of(&catalog, "Maç Skoru").count());
}

#[test]
fn entry_display() {
    let entry = Entry::new("Karşılıklı Gol", "KG Var", Predicate::BothScore(Period::FullTime));
    assert_eq!("Karşılıklı Gol :: KG Var", entry.to_string());
}
