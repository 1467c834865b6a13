use axum::routing::{get, post};
use axum::Router;
use spk_laptop::config::AppConfig;
use spk_laptop::repo::laptops_repo::LaptopsRepo;
use spk_laptop::service::ranking_service::RankingService;
use spk_laptop::AppState;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let laptops_repo = LaptopsRepo { pool: pool.clone() };
    let ranking_service = RankingService { laptops_repo };

    let state = AppState {
        ranking_service,
        pool,
    };

    let app = Router::new()
        .route("/", get(spk_laptop::http::handlers::home::home))
        .route("/api/hitung", post(spk_laptop::http::handlers::ranking::hitung_saw))
        .route("/ops/readiness", get(spk_laptop::http::handlers::ops::readiness))
        .route("/ops/liveness", get(spk_laptop::http::handlers::ops::liveness))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
