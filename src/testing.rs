//! Testing helpers.

use assert_float_eq::*;
use tinyrand::{Rand, Seeded, StdRand};

use crate::data::{Dataset, MatchRecord, Score, Scoreline};

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

pub const SYNTHETIC_LABELS: [&str; 8] = [
    "Maç Sonucu :: MS 1",
    "Maç Sonucu :: MS X",
    "Maç Sonucu :: MS 2",
    "Toplam Gol Alt/Üst :: 2,5 Alt",
    "Toplam Gol Alt/Üst :: 2,5 Üst",
    "Karşılıklı Gol :: KG Var",
    "Karşılıklı Gol :: KG Yok",
    "Çifte Şans :: ÇŞ 1-X",
];

/// A reproducible dataset of `resolved` settled matches followed by `pending` unsettled ones.
/// Each match quotes roughly four in five of [SYNTHETIC_LABELS], at odds between 1.10 and 6.00.
pub fn synthetic_dataset(seed: u64, resolved: usize, pending: usize) -> Dataset {
    let mut rand = StdRand::seed(seed);
    let mut records = Vec::with_capacity(resolved + pending);
    for index in 0..resolved + pending {
        let mut record = MatchRecord::new(format!("m{index:04}"))
            .with_kickoff(format!("2024-01-{:02}", 1 + index % 28), format!("{:02}:00", 12 + index % 10))
            .with_teams(format!("home{index}"), format!("away{index}"))
            .with_odds(quotes(&mut rand));
        if index < resolved {
            let first_half = Score::new(rand.next_lim_u32(3) as u8, rand.next_lim_u32(3) as u8);
            let full_time = Score::new(
                first_half.home + rand.next_lim_u32(3) as u8,
                first_half.away + rand.next_lim_u32(3) as u8,
            );
            record = record.with_scoreline(Scoreline::new(first_half, full_time));
        }
        records.push(record);
    }
    Dataset::from_records(records)
}

fn quotes(rand: &mut StdRand) -> Vec<(&'static str, f64)> {
    SYNTHETIC_LABELS
        .iter()
        .filter_map(|&label| {
            if rand.next_lim_u32(5) == 0 {
                None
            } else {
                Some((label, 1.1 + rand.next_lim_u32(491) as f64 / 100.0))
            }
        })
        .collect()
}
