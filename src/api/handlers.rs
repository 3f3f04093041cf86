//! API request handlers

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use super::routes::AppState;
use crate::error::{Error, Result};

// Response types

#[derive(Debug, Serialize)]
pub struct AckResponse {
    /// Always `"success"`
    pub status: String,
    /// Always `"Readings received"`
    pub message: String,
    /// Wall-clock time at acknowledgment, float seconds since epoch
    pub timestamp: f64,
    /// Number of readings in the batch
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Server version
    pub version: String,
}

fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

// Handlers

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Accept a batch of readings and acknowledge receipt
///
/// The batch is an untyped JSON document; only the length of its `readings`
/// array is inspected. Readings themselves are opaque and discarded.
pub async fn receive_readings(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AckResponse>> {
    tracing::info!("Received readings: {}", payload);

    // Simulate downstream processing latency
    tokio::time::sleep(state.config.ack_delay).await;

    let count = payload
        .get("readings")
        .ok_or(Error::MissingReadings)?
        .as_array()
        .ok_or(Error::ReadingsNotAnArray)?
        .len();

    Ok(Json(AckResponse {
        status: "success".into(),
        message: "Readings received".into(),
        timestamp: epoch_seconds(),
        count,
    }))
}
