//! Recognized `chart` options of the renderer's JSON data format.

use serde::{Deserialize, Serialize};

use crate::charts::encoding::{opt_flag, opt_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Fusion,
    Candy,
    Gammel,
    Zune,
    Ocean,
    Carbon,
    Umber,
}

/// Display options for one chart. Unset options fall back to the renderer's
/// defaults and are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_tooltext: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_sum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_border: Option<bool>,
    #[serde(
        rename = "use3DLighting",
        default,
        skip_serializing_if = "Option::is_none",
        with = "opt_flag"
    )]
    pub use_3d_lighting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_shadow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub enable_smart_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_percent_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub legend_shadow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub center_label_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub show_tooltip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub subcaption_font_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_flag")]
    pub use_data_plot_color_for_labels: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub starting_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub legend_border_alpha: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub caption_font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub subcaption_font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_number")]
    pub base_font_size: Option<u32>,
}
