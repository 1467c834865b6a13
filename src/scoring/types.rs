use serde::{Deserialize, Serialize};

use crate::domain::laptop::{HitungRequest, WeightValue};
use crate::error::RankingError;

/// Whether a higher or a lower raw value is preferable for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Benefit,
    Cost,
}

/// The six scoring criteria. The benefit/cost classification is fixed and
/// not configurable per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Harga,
    Ram,
    Prosesor,
    Gpu,
    Ssd,
    Berat,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Harga,
        Criterion::Ram,
        Criterion::Prosesor,
        Criterion::Gpu,
        Criterion::Ssd,
        Criterion::Berat,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Criterion::Harga | Criterion::Berat => Direction::Cost,
            Criterion::Ram | Criterion::Prosesor | Criterion::Gpu | Criterion::Ssd => {
                Direction::Benefit
            }
        }
    }
}

/// Validated per-request weight vector. Weights are not required to sum
/// to 1; scores are only comparable within a single request.
#[derive(Debug, Clone)]
pub struct Weights {
    pub harga: f64,
    pub ram: f64,
    pub prosesor: f64,
    pub gpu: f64,
    pub ssd: f64,
    pub berat: f64,
}

impl Weights {
    /// Builds the weight vector from the wire payload. Fails with a
    /// validation error naming the first absent field, without touching
    /// any candidate data.
    pub fn from_request(req: &HitungRequest) -> Result<Self, RankingError> {
        Ok(Self {
            harga: required(&req.w_harga, "w_harga")?,
            ram: required(&req.w_ram, "w_ram")?,
            prosesor: required(&req.w_prosesor, "w_prosesor")?,
            gpu: required(&req.w_gpu, "w_gpu")?,
            ssd: required(&req.w_ssd, "w_ssd")?,
            berat: required(&req.w_berat, "w_berat")?,
        })
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Harga => self.harga,
            Criterion::Ram => self.ram,
            Criterion::Prosesor => self.prosesor,
            Criterion::Gpu => self.gpu,
            Criterion::Ssd => self.ssd,
            Criterion::Berat => self.berat,
        }
    }
}

fn required(value: &Option<WeightValue>, key: &str) -> Result<f64, RankingError> {
    value
        .as_ref()
        .ok_or_else(|| RankingError::Validation(key.to_string()))?
        .as_f64()
}

/// Per-criterion normalization bounds computed over the full candidate
/// set: MIN for cost criteria, MAX for benefit criteria. Must come from
/// the same candidate set being scored.
#[derive(Debug, Clone)]
pub struct Extrema {
    pub min_harga: f64,
    pub max_ram: f64,
    pub max_prosesor: f64,
    pub max_gpu: f64,
    pub max_ssd: f64,
    pub min_berat: f64,
}

impl Extrema {
    pub fn bound(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Harga => self.min_harga,
            Criterion::Ram => self.max_ram,
            Criterion::Prosesor => self.max_prosesor,
            Criterion::Gpu => self.max_gpu,
            Criterion::Ssd => self.max_ssd,
            Criterion::Berat => self.min_berat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLaptop {
    pub nama_laptop: String,
    pub skor: f64,
}
