//! # Metrics Presenter
//!
//! Thin HTTP surface over the device query layer: `/metrics` triggers a fresh
//! battery and photovoltaic exchange and renders the readings as plain-text
//! lines; `/healthcheck` answers without touching any device. Nothing is
//! cached — every request is a live round trip.
//!
//! Both device queries bind the same well-known UDP receive port, so whole
//! battery+PV exchange pairs are serialized behind one mutex; a second
//! concurrent `/metrics` request waits instead of failing its bind.

use crate::echonet::device::{self, BatteryMetrics, PvMetrics};
use crate::error::EchonetError;
use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fixed `/metrics` failure body. Error kinds are logged, not exposed.
pub const METRICS_FAILURE_BODY: &str = "Failed to fetch metrics from ECHONET-Lite devices";

/// Supplier of device readings. The production implementation talks
/// ECHONET-Lite; tests substitute stubs.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn battery(&self) -> Result<BatteryMetrics, EchonetError>;
    async fn photovoltaic(&self) -> Result<PvMetrics, EchonetError>;
}

/// Production source: one live exchange per call via the device query layer.
pub struct EchonetSource;

#[async_trait]
impl MetricsSource for EchonetSource {
    async fn battery(&self) -> Result<BatteryMetrics, EchonetError> {
        device::query_battery().await
    }

    async fn photovoltaic(&self) -> Result<PvMetrics, EchonetError> {
        device::query_photovoltaic().await
    }
}

/// Shared handler state: the reading source plus the exchange serializer.
pub struct AppState {
    source: Box<dyn MetricsSource>,
    exchange_lock: Mutex<()>,
}

impl AppState {
    pub fn new(source: impl MetricsSource + 'static) -> Arc<Self> {
        Arc::new(AppState {
            source: Box::new(source),
            exchange_lock: Mutex::new(()),
        })
    }
}

/// Builds the exporter router: `/healthcheck`, `/metrics`, and a `404`
/// fallback for everything else.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .with_state(state)
}

async fn healthcheck() -> &'static str {
    "ok"
}

async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    let _guard = state.exchange_lock.lock().await;

    match fetch_readings(state.source.as_ref()).await {
        Ok((battery, photovoltaic)) => {
            (StatusCode::OK, render_metrics(&battery, &photovoltaic)).into_response()
        }
        Err(err) => {
            log::error!("metrics query failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, METRICS_FAILURE_BODY).into_response()
        }
    }
}

/// Battery first, photovoltaic second; the first failure fails the request as
/// a unit and the second device is not queried.
async fn fetch_readings(
    source: &dyn MetricsSource,
) -> Result<(BatteryMetrics, PvMetrics), EchonetError> {
    let battery = source.battery().await?;
    let photovoltaic = source.photovoltaic().await?;
    Ok((battery, photovoltaic))
}

fn render_metrics(battery: &BatteryMetrics, photovoltaic: &PvMetrics) -> String {
    format!(
        "battery_state_of_charge {}\nbattery_electricity_flow {}\npv_generated_electricity {}\n",
        battery.state_of_charge, battery.electricity_flow, photovoltaic.generated_electricity,
    )
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404")
}
