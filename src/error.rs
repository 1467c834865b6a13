use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("incomplete weight specification: missing {0}")]
    Validation(String),
    #[error("no candidates available")]
    NotFound,
    #[error("data source failure: {0}")]
    DataSource(anyhow::Error),
    #[error("computation fault: {0}")]
    Computation(String),
}

impl RankingError {
    pub fn status(&self) -> StatusCode {
        match self {
            RankingError::Validation(_) => StatusCode::BAD_REQUEST,
            RankingError::NotFound => StatusCode::NOT_FOUND,
            RankingError::DataSource(_) | RankingError::Computation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing text for the `message` field of the JSON error body.
    pub fn message(&self) -> String {
        match self {
            RankingError::Validation(_) => "Data bobot tidak lengkap".to_string(),
            RankingError::NotFound => "Data laptop di database kosong".to_string(),
            RankingError::DataSource(e) => format!("Koneksi database gagal: {e}"),
            RankingError::Computation(detail) => format!("Terjadi kesalahan server: {detail}"),
        }
    }
}
