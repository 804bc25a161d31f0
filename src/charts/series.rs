//! Data points, categories and datasets.

use serde::{Deserialize, Serialize};

use crate::charts::color::Color;
use crate::charts::encoding::{flag, number, opt_number};
use crate::charts::options::ChartOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(with = "number")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Plain JSON number, unlike the string-typed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { label: None, value, tool_text: None, color: None, border_width: None }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn tool_text(mut self, template: impl Into<String>) -> Self {
        self.tool_text = Some(template.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BubblePoint {
    #[serde(with = "number")]
    pub x: f64,
    #[serde(with = "number")]
    pub y: f64,
    #[serde(with = "number")]
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub x: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Categories {
    pub category: Vec<Category>,
}

impl Categories {
    pub fn labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            category: labels
                .into_iter()
                .map(|label| Category { label: label.to_owned(), x: None })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dataset<P> {
    #[serde(
        rename = "seriesname",
        alias = "seriesName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub series_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub data: Vec<P>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorBand {
    #[serde(with = "number")]
    pub minvalue: f64,
    #[serde(with = "number")]
    pub maxvalue: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorRange {
    #[serde(with = "number")]
    pub minvalue: f64,
    pub code: Color,
    #[serde(with = "flag")]
    pub gradient: bool,
    pub color: Vec<ColorBand>,
}

/// One series of points: pie, doughnut and line charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleSeriesChart {
    pub chart: ChartOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorrange: Option<ColorRange>,
    pub data: Vec<DataPoint>,
}

/// Shared categories with one or more datasets: column and bubble charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiSeriesChart<P> {
    pub chart: ChartOptions,
    pub categories: Vec<Categories>,
    #[serde(alias = "dataSet")]
    pub dataset: Vec<Dataset<P>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::color::palette;
    use serde_json::json;

    #[test]
    fn data_point_wire_shape() -> serde_json::Result<()> {
        let point = DataPoint::new(4.0)
            .tool_text("Danger $dataValue")
            .border_width(40)
            .color(palette::DANGER);
        assert_eq!(
            serde_json::to_value(&point)?,
            json!({
                "value": "4",
                "toolText": "Danger $dataValue",
                "color": "#F5365C",
                "borderWidth": 40
            })
        );
        Ok(())
    }

    #[test]
    fn data_point_requires_value() {
        let result: serde_json::Result<DataPoint> = serde_json::from_value(json!({"label": "May"}));
        assert!(result.is_err());
    }

    #[test]
    fn dataset_key_alias_accepted() -> serde_json::Result<()> {
        let chart: MultiSeriesChart<DataPoint> = serde_json::from_value(json!({
            "chart": {"showSum": "1"},
            "categories": [{"category": [{"label": "January"}]}],
            "dataSet": [{"data": [{"value": "22", "color": "#F5365C"}]}]
        }))?;
        assert_eq!(chart.dataset.len(), 1);
        assert_eq!(chart.dataset[0].data[0].color, Some(palette::DANGER));
        Ok(())
    }

    #[test]
    fn dataset_series_name_uses_renderer_key() -> serde_json::Result<()> {
        let dataset: Dataset<DataPoint> = serde_json::from_value(json!({
            "seriesname": "Revenue",
            "data": [{"value": "1"}]
        }))?;
        assert_eq!(dataset.series_name.as_deref(), Some("Revenue"));
        assert_eq!(serde_json::to_value(&dataset)?["seriesname"], json!("Revenue"));

        let camel: Dataset<DataPoint> = serde_json::from_value(json!({
            "seriesName": "Cost",
            "data": []
        }))?;
        assert_eq!(camel.series_name.as_deref(), Some("Cost"));
        Ok(())
    }

    #[test]
    fn category_x_is_string_number() -> serde_json::Result<()> {
        let category = Category { label: "Jun".into(), x: Some(20.0) };
        assert_eq!(serde_json::to_value(&category)?, json!({"label": "Jun", "x": "20"}));
        Ok(())
    }

    #[test]
    fn bubble_point_rejects_value_field() {
        let result: serde_json::Result<BubblePoint> =
            serde_json::from_value(json!({"x": "1", "y": "2", "z": "3", "value": "4"}));
        assert!(result.is_err());
    }
}
