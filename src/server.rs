//! # Server Setup
//!
//! Router assembly and HTTP server startup. The bootstrap is deliberately
//! linear: initialize logging, fire off the database connection in the
//! background, build the middleware chain, bind, serve. Database
//! availability is not a precondition for serving HTTP traffic.

use std::sync::{Arc, OnceLock};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::database::{self, DbHandle};
use crate::error::Result;
use crate::{handlers, middleware};

/// Application state shared across all routes.
///
/// The database handle is filled in by the background connect task; no
/// current handler reads it, but it is held here for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub db: DbHandle,
}

/// Initialize and start the HTTP server.
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing();

    let db: DbHandle = Arc::new(OnceLock::new());
    database::spawn_connect(config.mongo_uri.clone(), Arc::clone(&db));

    let state = AppState { db };
    let app = create_router(state);

    // Bind failure is not handled here; it propagates out of main.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with the middleware chain in registration
/// order: CORS outermost, then JSON body decoding, then routing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::probe)
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::parse_json_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
