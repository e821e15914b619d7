//! ChatDigest HTTP Server
//!
//! Actix-web server for the digest page and its JSON API

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chatdigest_common::{AppConfig, Result};
use chatdigest_llm::SummaryProvider;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use routes::configure;
pub use state::AppState;

/// Bind and run the server until it is stopped
///
/// Takes an already loaded configuration, so the credential check has
/// happened before any route exists.
pub async fn start_server(config: AppConfig, provider: Arc<dyn SummaryProvider>) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(AppState::new(config, provider));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run();

    info!("Server listening on http://{}", bind_addr);

    server.await?;

    info!("Server stopped");
    Ok(())
}
