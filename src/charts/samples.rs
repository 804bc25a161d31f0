//! Bundled sample charts shown on the dashboard.

use crate::charts::color::{palette, Color};
use crate::charts::options::{ChartOptions, Theme};
use crate::charts::series::{
    BubblePoint, Categories, Category, ColorBand, ColorRange, DataPoint, Dataset,
    MultiSeriesChart, SingleSeriesChart,
};
use crate::charts::{ChartConfig, ChartKind};

const MONTHS_H1: [&str; 7] = ["January", "February", "March", "April", "May", "June", "July"];
const MONTHS_H2: [&str; 8] = ["May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Status slices shared by the pie and doughnut charts.
const STATUS_SLICES: [(&str, Color); 5] = [
    ("Danger", palette::DANGER),
    ("Warning", palette::WARNING),
    ("Success", palette::SUCCESS),
    ("Primary", palette::PRIMARY),
    ("Info", palette::INFO),
];

pub fn sample(kind: ChartKind) -> ChartConfig {
    match kind {
        ChartKind::Bar => ChartConfig::MultiSeries(bar()),
        ChartKind::Bubble => ChartConfig::Bubble(bubble()),
        ChartKind::Doughnut => ChartConfig::Single(doughnut()),
        ChartKind::Line => ChartConfig::Single(line()),
        ChartKind::Pie => ChartConfig::Single(pie()),
    }
}

pub fn bar() -> MultiSeriesChart<DataPoint> {
    let series = |values: [f64; 7], color: Color| Dataset {
        series_name: None,
        color: None,
        data: values.into_iter().map(|v| DataPoint::new(v).color(color)).collect(),
    };

    MultiSeriesChart {
        chart: ChartOptions {
            show_sum: Some(true),
            theme: Some(Theme::Fusion),
            ..ChartOptions::default()
        },
        categories: vec![Categories::labels(MONTHS_H1)],
        dataset: vec![
            series([22.0, 49.0, 32.0, 27.0, 20.0, 89.0, 17.0], palette::DANGER),
            series([33.0, 25.0, 93.0, 37.0, 22.0, 10.0, 73.0], palette::PRIMARY),
            series([86.0, 82.0, 9.0, 87.0, 20.0, 19.0, 57.0], palette::SUCCESS),
        ],
    }
}

pub fn bubble() -> MultiSeriesChart<BubblePoint> {
    let ticks = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 130.0];
    let category = MONTHS_H2
        .iter()
        .zip(ticks)
        .map(|(label, x)| Category { label: (*label).to_owned(), x: Some(x) })
        .collect();

    let points = [
        (10.0, 10.0, 1.0),
        (20.0, 18.0, 2.0),
        (40.0, 28.0, 3.0),
        (60.0, 23.0, 4.0),
        (80.0, 28.0, 5.0),
        (100.0, 40.0, 6.0),
        (120.0, 36.0, 7.0),
    ];

    MultiSeriesChart {
        chart: ChartOptions {
            theme: Some(Theme::Fusion),
            plot_tooltext: Some("Performance : $yvalue".into()),
            ..ChartOptions::default()
        },
        categories: vec![Categories { category }],
        dataset: vec![Dataset {
            series_name: None,
            color: Some(palette::SKY),
            data: points
                .into_iter()
                .map(|(x, y, z)| BubblePoint { x, y, z, color: Some(palette::PRIMARY), tool_text: None })
                .collect(),
        }],
    }
}

fn radial_options() -> ChartOptions {
    ChartOptions {
        theme: Some(Theme::Fusion),
        use_3d_lighting: Some(false),
        show_shadow: Some(false),
        enable_smart_labels: Some(false),
        starting_angle: Some(310.0),
        show_labels: Some(false),
        show_percent_values: Some(true),
        show_legend: Some(true),
        legend_shadow: Some(false),
        legend_border_alpha: Some(0),
        center_label_bold: Some(true),
        show_tooltip: Some(true),
        decimals: Some(0),
        caption_font_size: Some(14),
        subcaption_font_size: Some(14),
        subcaption_font_bold: Some(false),
        use_data_plot_color_for_labels: Some(true),
        base_font_size: Some(13),
        ..ChartOptions::default()
    }
}

fn status_slices(values: [f64; 5]) -> impl Iterator<Item = DataPoint> {
    STATUS_SLICES.into_iter().zip(values).map(|((name, color), value)| {
        DataPoint::new(value)
            .tool_text(format!("{name} $dataValue"))
            .color(color)
    })
}

pub fn doughnut() -> SingleSeriesChart {
    SingleSeriesChart {
        chart: radial_options(),
        colorrange: None,
        data: status_slices([4.0, 94.0, 37.0, 17.0, 39.0])
            .map(|point| point.border_width(40))
            .collect(),
    }
}

pub fn pie() -> SingleSeriesChart {
    SingleSeriesChart {
        chart: ChartOptions {
            show_border: Some(false),
            border_width: Some(10),
            ..radial_options()
        },
        colorrange: None,
        data: status_slices([27.0, 2.0, 25.0, 78.0, 44.0]).collect(),
    }
}

pub fn line() -> SingleSeriesChart {
    let values = [0.0, 20.0, 10.0, 30.0, 15.0, 40.0, 20.0, 60.0];
    SingleSeriesChart {
        chart: ChartOptions {
            show_values: Some(false),
            theme: Some(Theme::Fusion),
            ..ChartOptions::default()
        },
        colorrange: Some(ColorRange {
            minvalue: 0.0,
            code: palette::PRIMARY,
            gradient: true,
            color: vec![ColorBand { minvalue: 0.0, maxvalue: 70.0, color: palette::PRIMARY }],
        }),
        data: MONTHS_H2
            .iter()
            .zip(values)
            .map(|(month, value)| DataPoint::new(value).label(*month))
            .collect(),
    }
}
