use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness probe
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        model: state.summarizer.model().to_string(),
    })
}
