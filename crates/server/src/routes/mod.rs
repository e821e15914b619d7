pub mod page;
pub mod summarize;
pub mod system;

use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};
use chatdigest_common::ChatDigestError;

use crate::types::ErrorResponse;

/// Register every route. Shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse {
            error: format!("Invalid request: {}", err),
            kind: "invalid_request".to_string(),
        };
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .service(page::index)
    .service(
        web::scope("/api")
            .service(summarize::summarize)
            .service(system::health),
    );
}

/// Render an error as JSON with its user-facing message
pub fn error_response(err: &ChatDigestError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
        kind: err.kind().to_string(),
    })
}
