pub mod config;
pub mod domain {
    pub mod laptop;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod home;
        pub mod ops;
        pub mod ranking;
    }
}
pub mod repo {
    pub mod laptops_repo;
}
pub mod scoring {
    pub mod engine;
    pub mod types;
}
pub mod service {
    pub mod ranking_service;
}

#[derive(Clone)]
pub struct AppState {
    pub ranking_service: service::ranking_service::RankingService,
    pub pool: sqlx::PgPool,
}
