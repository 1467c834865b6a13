use crate::domain::laptop::HitungRequest;
use crate::error::RankingError;
use crate::repo::laptops_repo::LaptopsRepo;
use crate::scoring::engine::rank_laptops;
use crate::scoring::types::{RankedLaptop, Weights};

#[derive(Clone)]
pub struct RankingService {
    pub laptops_repo: LaptopsRepo,
}

impl RankingService {
    /// Validates the weight vector, loads candidates and their extrema
    /// from the store, and ranks them. Extrema and candidates are read
    /// within the same request, over the same table.
    pub async fn hitung(&self, req: HitungRequest) -> Result<Vec<RankedLaptop>, RankingError> {
        let weights = Weights::from_request(&req)?;

        let laptops = self
            .laptops_repo
            .fetch_all()
            .await
            .map_err(RankingError::DataSource)?;
        if laptops.is_empty() {
            return Err(RankingError::NotFound);
        }

        let extrema = self
            .laptops_repo
            .fetch_extrema()
            .await
            .map_err(RankingError::DataSource)?
            .ok_or(RankingError::NotFound)?;

        rank_laptops(&weights, &laptops, &extrema)
    }
}
