use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{Rand, Seeded, StdRand};

use oddsmatch::data::MatchRecord;
use oddsmatch::features::Projection;
use oddsmatch::similarity::{nearest, Euclidean, Normalised};

const COLUMNS: usize = 200;

fn records(rand: &mut StdRand, count: usize) -> Vec<MatchRecord> {
    (0..count)
        .map(|index| {
            let mut odds = vec![];
            for col in 0..COLUMNS {
                if rand.next_lim_u32(3) != 0 {
                    odds.push((format!("m{col} :: o"), 1.0 + rand.next_lim_u32(1000) as f64 / 100.0));
                }
            }
            MatchRecord::new(index.to_string()).with_odds(odds)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rand = StdRand::seed(42);
    let columns = (0..COLUMNS).map(|col| format!("m{col} :: o")).collect::<Vec<_>>();
    let reference = records(&mut rand, 5_000);
    let reference = Projection::project(&columns, reference.iter());
    let query = records(&mut rand, 1);
    let query = Projection::project(&columns, query.iter());

    c.bench_function("cri_nearest_euclidean_5k_x_200", |b| {
        b.iter(|| nearest(&query.row(0), &reference, 100, &Euclidean));
    });
    c.bench_function("cri_nearest_normalised_5k_x_200", |b| {
        b.iter(|| nearest(&query.row(0), &reference, 100, &Normalised));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
