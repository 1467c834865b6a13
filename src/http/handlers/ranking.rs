use crate::domain::laptop::HitungRequest;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn hitung_saw(
    State(state): State<AppState>,
    Json(req): Json<HitungRequest>,
) -> impl IntoResponse {
    match state.ranking_service.hitung(req).await {
        Ok(hasil) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({
                "message": "Perhitungan SAW berhasil",
                "hasil": hasil,
            })),
        )
            .into_response(),
        Err(e) => {
            let status = e.status();
            if status == axum::http::StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!("saw ranking failed: {e}");
            }
            (status, Json(serde_json::json!({ "message": e.message() }))).into_response()
        }
    }
}
