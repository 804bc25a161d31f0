//! Operational endpoints: liveness and counters.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub charts: usize,
}

/// Liveness only: the upstream is not probed.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", charts: state.charts.len() })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
