//! Typed chart configurations served to the dashboard frontend.
//! Used by: handlers::charts, state.

pub mod catalog;
pub mod color;
pub mod encoding;
pub mod options;
pub mod samples;
pub mod series;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use series::{BubblePoint, DataPoint, MultiSeriesChart, SingleSeriesChart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKind {
    Bar,
    Bubble,
    Doughnut,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Bubble,
        ChartKind::Doughnut,
        ChartKind::Line,
        ChartKind::Pie,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Bubble => "bubble",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    /// Chart type understood by the rendering library.
    pub fn renderer_type(self) -> &'static str {
        match self {
            ChartKind::Bar => "stackedcolumn2d",
            ChartKind::Bubble => "bubble",
            ChartKind::Doughnut => "doughnut2d",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie2d",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "bubble" => Ok(ChartKind::Bubble),
            "doughnut" | "donut" => Ok(ChartKind::Doughnut),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(Error::UnknownChart(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartConfig {
    Single(SingleSeriesChart),
    MultiSeries(MultiSeriesChart<DataPoint>),
    Bubble(MultiSeriesChart<BubblePoint>),
}

impl ChartConfig {
    /// Parses `json` with the shape `kind` renders.
    pub fn from_json(kind: ChartKind, json: &str) -> serde_json::Result<Self> {
        Ok(match kind {
            ChartKind::Bar => ChartConfig::MultiSeries(serde_json::from_str(json)?),
            ChartKind::Bubble => ChartConfig::Bubble(serde_json::from_str(json)?),
            ChartKind::Doughnut | ChartKind::Line | ChartKind::Pie => {
                ChartConfig::Single(serde_json::from_str(json)?)
            }
        })
    }
}
