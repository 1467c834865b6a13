use crate::domain::laptop::Laptop;
use crate::error::RankingError;
use crate::scoring::types::{Criterion, Direction, Extrema, RankedLaptop, Weights};

/// Normalizes one raw criterion value against its set-wide bound. Benefit
/// criteria divide the raw value by the max, cost criteria divide the min
/// by the raw value. A zero divisor yields 0 for that cell instead of
/// failing the whole computation.
pub fn normalize(direction: Direction, raw: f64, bound: f64) -> f64 {
    match direction {
        Direction::Benefit => {
            if bound != 0.0 {
                raw / bound
            } else {
                0.0
            }
        }
        Direction::Cost => {
            if raw != 0.0 {
                bound / raw
            } else {
                0.0
            }
        }
    }
}

/// Weighted sum of the normalized criterion values for one laptop.
pub fn score_laptop(laptop: &Laptop, weights: &Weights, extrema: &Extrema) -> f64 {
    Criterion::ALL
        .iter()
        .map(|&c| weights.get(c) * normalize(c.direction(), raw_value(laptop, c), extrema.bound(c)))
        .sum()
}

/// Rounds to 4 decimal digits, half away from zero.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Scores every laptop and returns them best-to-worst. Equal scores keep
/// the order the laptops were retrieved in.
pub fn rank_laptops(
    weights: &Weights,
    laptops: &[Laptop],
    extrema: &Extrema,
) -> Result<Vec<RankedLaptop>, RankingError> {
    if laptops.is_empty() {
        return Err(RankingError::NotFound);
    }

    let mut ranked = Vec::with_capacity(laptops.len());
    for laptop in laptops {
        let skor = score_laptop(laptop, weights, extrema);
        if !skor.is_finite() {
            return Err(RankingError::Computation(format!(
                "skor tidak valid untuk {}",
                laptop.nama_laptop
            )));
        }
        ranked.push(RankedLaptop {
            nama_laptop: laptop.nama_laptop.clone(),
            skor: round4(skor),
        });
    }

    ranked.sort_by(|a, b| b.skor.partial_cmp(&a.skor).unwrap_or(std::cmp::Ordering::Equal));
    Ok(ranked)
}

fn raw_value(laptop: &Laptop, criterion: Criterion) -> f64 {
    match criterion {
        Criterion::Harga => laptop.harga,
        Criterion::Ram => laptop.ram,
        Criterion::Prosesor => laptop.skor_prosesor,
        Criterion::Gpu => laptop.skor_gpu,
        Criterion::Ssd => laptop.ssd,
        Criterion::Berat => laptop.berat,
    }
}
