use serde::{Deserialize, Serialize};

use crate::error::RankingError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laptop {
    pub nama_laptop: String,
    pub harga: f64,
    pub ram: f64,
    pub skor_prosesor: f64,
    pub skor_gpu: f64,
    pub ssd: f64,
    pub berat: f64,
}

/// Weight value as it arrives on the wire. Existing clients send either a
/// JSON number or a numeric string, so both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightValue {
    Number(f64),
    Text(String),
}

impl WeightValue {
    pub fn as_f64(&self) -> Result<f64, RankingError> {
        match self {
            WeightValue::Number(v) => Ok(*v),
            WeightValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                RankingError::Computation(format!("bobot bukan angka: {s:?}"))
            }),
        }
    }
}

/// Request body of POST /api/hitung. All six fields must be present;
/// completeness is checked when converting to scoring weights, before any
/// candidate data is read. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HitungRequest {
    pub w_harga: Option<WeightValue>,
    pub w_ram: Option<WeightValue>,
    pub w_prosesor: Option<WeightValue>,
    pub w_gpu: Option<WeightValue>,
    pub w_ssd: Option<WeightValue>,
    pub w_berat: Option<WeightValue>,
}
