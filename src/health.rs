//! Liveness endpoints served alongside the bot.
//!
//! `/health` aggregates the transport ready flag, listings-API
//! reachability, and a persistence probe; `/ready` only reports whether the
//! gateway has finished connecting.

use crate::database;
use crate::services::listings::ListingClient;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

pub struct HealthState {
    pub transport_ready: Arc<AtomicBool>,
    pub db: PgPool,
    pub listings: Arc<ListingClient>,
}

#[derive(Serialize)]
struct ServicesStatus {
    transport: bool,
    listings_api: bool,
    database: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    services: ServicesStatus,
}

pub async fn serve(state: Arc<HealthState>, port: u16) -> std::io::Result<()> {
    let app = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "health check server listening");
    axum::serve(listener, app).await
}

async fn health(State(state): State<Arc<HealthState>>) -> (StatusCode, Json<HealthResponse>) {
    let transport = state.transport_ready.load(Ordering::SeqCst);

    let listings_api = match state.listings.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "listings API health check failed");
            false
        }
    };

    let database = match database::users::list_active(&state.db).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "database health check failed");
            false
        }
    };

    let healthy = transport && listings_api && database;
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        timestamp: Utc::now(),
        services: ServicesStatus {
            transport,
            listings_api,
            database,
        },
    };
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}

async fn ready(State(state): State<Arc<HealthState>>) -> (StatusCode, &'static str) {
    if state.transport_ready.load(Ordering::SeqCst) {
        (StatusCode::OK, "Ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Bot not ready")
    }
}
