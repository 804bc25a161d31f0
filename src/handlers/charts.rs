//! Chart configuration endpoints.
//! Used by: server.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::charts::{ChartConfig, ChartKind};
use crate::error::{Error, Result};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ChartSummary {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub renderer: &'static str,
}

/// Props for the frontend chart component.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    #[serde(rename = "type")]
    pub renderer: &'static str,
    pub data_format: &'static str,
    pub data_source: ChartConfig,
}

pub async fn index(State(state): State<AppState>) -> Json<Vec<ChartSummary>> {
    let charts = state
        .charts
        .iter()
        .map(|(kind, _)| ChartSummary { name: kind.name(), renderer: kind.renderer_type() })
        .collect();
    Json(charts)
}

pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ChartDescriptor>> {
    let kind: ChartKind = name.parse()?;
    let config = state
        .charts
        .get(kind)
        .cloned()
        .ok_or_else(|| Error::UnknownChart(name.clone()))?;
    state.metrics.record_chart_served();
    Ok(Json(ChartDescriptor {
        renderer: kind.renderer_type(),
        data_format: "json",
        data_source: config,
    }))
}
