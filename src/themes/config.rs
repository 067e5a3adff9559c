//! Typed Vega-Lite `config` sections.
//!
//! Every theme fills the same structs, so all themes share one shape. Fields
//! typed `Option<T>` without `skip_serializing_if` always serialize and emit
//! `null` when unset, which the chart library reads as "disabled".

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StyleResult;
use crate::palette::FONT;
use crate::types::Color;

/// Reads a present `null` as `Some(None)`; an absent key stays `None` via `default`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Complete chart configuration for one theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub text: TextConfig,
    pub view: ViewConfig,
    pub range: RangeConfig,
    pub bar: MarkConfig,
    pub line: MarkConfig,
    pub rule: MarkConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<MarkConfig>,
    pub point: MarkConfig,
    pub geoshape: MarkConfig,
    pub rect: MarkConfig,
    pub axis: AxisConfig,
    pub axis_x_discrete: AxisOverrides,
    pub axis_y_discrete: AxisOverrides,
    pub axis_x_temporal: AxisOverrides,
    pub axis_x_quantitative: AxisOverrides,
    pub axis_y_quantitative: AxisOverrides,
    pub title: TitleConfig,
    pub legend: LegendConfig,
}

impl ThemeConfig {
    /// The theme as a chart-library theme document: `{"config": {...}}`.
    pub fn to_value(&self) -> StyleResult<serde_json::Value> {
        Ok(serde_json::json!({ "config": serde_json::to_value(self)? }))
    }

    /// Only the `config` object.
    pub fn config_value(&self) -> StyleResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Defaults for `text` marks (annotations).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    pub color: Color,
    pub align: String,
    pub baseline: String,
    pub dx: i32,
    pub dy: i32,
    pub font_size: u32,
}

impl TextConfig {
    /// Left-aligned labels sitting just right of their anchor point.
    pub fn annotation(color: Color, font_size: u32) -> Self {
        Self {
            color,
            align: "left".to_string(),
            baseline: "middle".to_string(),
            dx: 7,
            dy: 0,
            font_size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub stroke: Option<Color>,
    pub continuous_width: u32,
    pub continuous_height: u32,
    pub discrete_width: u32,
    pub discrete_height: u32,
}

impl ViewConfig {
    /// Frameless view of the given size.
    pub fn frameless(width: u32, height: u32) -> Self {
        Self {
            stroke: None,
            continuous_width: width,
            continuous_height: height,
            discrete_width: width,
            discrete_height: height,
        }
    }
}

/// Colour schemes for categorical and continuous scales.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub category: Vec<Color>,
    pub diverging: Vec<Color>,
    pub heatmap: Vec<Color>,
    pub ordinal: Vec<Color>,
}

fn colors(values: &[&str]) -> Vec<Color> {
    values.iter().map(|v| Color::from(*v)).collect()
}

impl RangeConfig {
    /// House schemes shared by every theme.
    pub fn eco() -> Self {
        Self {
            category: colors(&[
                "#36B7B4", "#E6224B", "#F4C245", "#0063AF", "#00A767", "#179FDB", "#EB5C2E",
            ]),
            diverging: colors(&["#E6224B", "#E54753", "#C9C9C9", "#179FDB", "#122B39"]),
            heatmap: colors(&["#C9C9C9", "#179FDB", "#0063AF", "#122B39"]),
            ordinal: colors(&["#00A767", "#36B7B4", "#179FDB", "#0063AF", "#243B5A"]),
        }
    }
}

/// Defaults for one mark type. Unset properties are left to the chart library.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl MarkConfig {
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    /// Filled scatter points.
    pub fn point(color: Color) -> Self {
        Self {
            color: Some(color),
            filled: Some(true),
            size: Some(80.0),
            opacity: Some(0.95),
            ..Default::default()
        }
    }

    /// Thin white borders between map regions.
    pub fn geoshape() -> Self {
        Self {
            stroke: Some(Color::from("white")),
            stroke_width: Some(0.3),
            ..Default::default()
        }
    }

    /// Pale shading used for highlighted periods.
    pub fn shading() -> Self {
        Self {
            fill: Some(Color::from("#d6d4d4")),
            opacity: Some(0.3),
            ..Default::default()
        }
    }
}

/// Settings shared by all axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_color: Color,
    pub label_font_size: u32,
    pub label_font: String,
    pub label_opacity: f64,
    pub tick_color: Color,
    pub tick_opacity: f64,
    pub domain_color: Color,
    pub domain_opacity: f64,
    pub grid_color: Color,
    pub grid_dash: Vec<u32>,
    pub grid_opacity: f64,
    pub title: Option<String>,
    pub title_color: Color,
    pub title_opacity: f64,
    pub tick_size: u32,
}

impl AxisConfig {
    /// Semi-transparent axes drawn in `color`, untitled.
    pub fn muted(color: Color, label_font_size: u32) -> Self {
        Self {
            label_color: color.clone(),
            label_font_size,
            label_font: FONT.to_string(),
            label_opacity: 0.7,
            tick_color: color.clone(),
            tick_opacity: 0.5,
            domain_color: color.clone(),
            domain_opacity: 0.5,
            grid_color: color.clone(),
            grid_dash: vec![2, 2],
            grid_opacity: 0.5,
            title: None,
            title_color: color,
            title_opacity: 0.8,
            tick_size: 4,
        }
    }
}

/// Per-orientation / per-scale-type axis adjustments.
///
/// `title: Some(None)` serializes as an explicit `null`, hiding the title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_dash: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_opacity: Option<f64>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_angle: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_baseline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_y: Option<i32>,
}

/// Axis adjustments common to every theme.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSet {
    pub x_discrete: AxisOverrides,
    pub y_discrete: AxisOverrides,
    pub x_temporal: AxisOverrides,
    pub x_quantitative: AxisOverrides,
    pub y_quantitative: AxisOverrides,
}

impl AxisSet {
    /// Horizontal-only gridlines; the y-axis title sits above the axis, left-aligned.
    pub fn standard(grid_color: Color, y_tick_count: u32) -> Self {
        Self {
            x_discrete: AxisOverrides {
                grid: Some(false),
                label_angle: Some(0),
                tick_count: Some(10),
                tick_opacity: Some(0.5),
                title: Some(None),
                ..Default::default()
            },
            y_discrete: AxisOverrides {
                ticks: Some(false),
                label_padding: Some(5),
                ..Default::default()
            },
            x_temporal: AxisOverrides {
                grid: Some(false),
                ticks: Some(true),
                ..Default::default()
            },
            x_quantitative: AxisOverrides {
                grid: Some(true),
                ..Default::default()
            },
            y_quantitative: AxisOverrides {
                grid_color: Some(grid_color),
                grid_dash: Some(vec![1, 5]),
                grid_opacity: Some(0.5),
                ticks: Some(false),
                label_padding: Some(5),
                tick_count: Some(y_tick_count),
                title_angle: Some(0),
                title_align: Some("left".to_string()),
                title_baseline: Some("bottom".to_string()),
                title_x: Some(0),
                title_y: Some(-5),
                ..Default::default()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    pub color: Color,
    pub subtitle_color: Color,
    pub font: String,
    pub subtitle_font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    pub anchor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx: Option<i32>,
    pub font_size: u32,
    pub subtitle_font_size: u32,
    pub subtitle_padding: u32,
    pub offset: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub title_color: Color,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Option<String>>,
    pub label_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<u32>,
}
