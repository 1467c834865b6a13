use crate::domain::laptop::Laptop;
use crate::scoring::types::Extrema;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct LaptopsRepo {
    pub pool: PgPool,
}

impl LaptopsRepo {
    /// All candidate rows, in insertion order. Equal-score ties downstream
    /// preserve this order.
    pub async fn fetch_all(&self) -> anyhow::Result<Vec<Laptop>> {
        let rows = sqlx::query(
            "SELECT nama_laptop, harga, ram, skor_prosesor, skor_gpu, ssd, berat FROM laptops ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Laptop {
                nama_laptop: r.get("nama_laptop"),
                harga: r.get("harga"),
                ram: r.get("ram"),
                skor_prosesor: r.get("skor_prosesor"),
                skor_gpu: r.get("skor_gpu"),
                ssd: r.get("ssd"),
                berat: r.get("berat"),
            })
            .collect())
    }

    /// Normalization bounds over the whole table in one aggregate row.
    /// Returns None when the table is empty (all aggregates NULL).
    pub async fn fetch_extrema(&self) -> anyhow::Result<Option<Extrema>> {
        let row = sqlx::query(
            "SELECT MIN(harga) AS min_harga, MAX(ram) AS max_ram, \
             MAX(skor_prosesor) AS max_prosesor, MAX(skor_gpu) AS max_gpu, \
             MAX(ssd) AS max_ssd, MIN(berat) AS min_berat FROM laptops",
        )
        .fetch_one(&self.pool)
        .await?;

        let min_harga: Option<f64> = row.get("min_harga");
        let max_ram: Option<f64> = row.get("max_ram");
        let max_prosesor: Option<f64> = row.get("max_prosesor");
        let max_gpu: Option<f64> = row.get("max_gpu");
        let max_ssd: Option<f64> = row.get("max_ssd");
        let min_berat: Option<f64> = row.get("min_berat");

        match (min_harga, max_ram, max_prosesor, max_gpu, max_ssd, min_berat) {
            (
                Some(min_harga),
                Some(max_ram),
                Some(max_prosesor),
                Some(max_gpu),
                Some(max_ssd),
                Some(min_berat),
            ) => Ok(Some(Extrema {
                min_harga,
                max_ram,
                max_prosesor,
                max_gpu,
                max_ssd,
                min_berat,
            })),
            _ => Ok(None),
        }
    }
}
