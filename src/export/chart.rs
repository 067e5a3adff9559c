//! Chart documents and the small edits applied to them before export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{StyleError, StyleResult};
use crate::palette::DOMAIN_GREY;
use crate::types::{Color, Table};

/// A Vega-Lite chart specification. Always a JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ChartSpec(Map<String, Value>);

impl TryFrom<Value> for ChartSpec {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(StyleError::InvalidChart),
        }
    }
}

impl From<ChartSpec> for Value {
    fn from(chart: ChartSpec) -> Self {
        Value::Object(chart.0)
    }
}

impl ChartSpec {
    pub fn new(value: Value) -> StyleResult<Self> {
        Self::try_from(value)
    }

    pub fn from_json_str(source: &str) -> StyleResult<Self> {
        Self::new(serde_json::from_str(source)?)
    }

    /// Layer several charts on top of each other.
    pub fn layer(charts: impl IntoIterator<Item = ChartSpec>) -> Self {
        let layers: Vec<Value> = charts.into_iter().map(Value::from).collect();
        let mut map = Map::new();
        map.insert("layer".to_string(), Value::Array(layers));
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Compact JSON with no whitespace between tokens.
    pub fn to_json_minified(&self) -> StyleResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Inline `table` as the chart's data.
    pub fn with_data(mut self, table: &Table) -> StyleResult<Self> {
        self.0
            .insert("data".to_string(), json!({ "values": serde_json::to_value(table)? }));
        Ok(self)
    }

    /// Set width and height. `None` or zero leaves the dimension alone, so
    /// faceted and concatenated charts can opt out.
    pub fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(width) = width.filter(|w| *w > 0) {
            self.0.insert("width".to_string(), json!(width));
        }
        if let Some(height) = height.filter(|h| *h > 0) {
            self.0.insert("height".to_string(), json!(height));
        }
        self
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.0.insert(
            "title".to_string(),
            json!({ "text": title, "subtitle": subtitle }),
        );
        self
    }

    /// Put a source line under the chart.
    ///
    /// The source replaces any existing title, so this is meant for untitled charts.
    pub fn with_source(mut self, source: &str) -> Self {
        self.0.insert(
            "title".to_string(),
            json!({
                "text": source_text(source),
                "orient": "bottom",
                "fontStyle": "italic",
                "fontSize": 10,
                "color": Color::from(DOMAIN_GREY).with_alpha_hex("80"),
                "fontWeight": "normal",
                "frame": "group",
                "dx": 0,
                "offset": 7,
            }),
        );
        self
    }

    /// Title the y-axis: the top-level y encoding if there is one, otherwise the
    /// first layer that encodes y.
    pub fn update_y_axis_title(mut self, title: &str) -> Self {
        if set_y_axis_title(&mut self.0, title) {
            return self;
        }
        if let Some(Value::Array(layers)) = self.0.get_mut("layer") {
            for layer in layers.iter_mut() {
                if let Value::Object(layer) = layer {
                    if set_y_axis_title(layer, title) {
                        return self;
                    }
                }
            }
        }
        log::warn!("y-axis not found in chart, title '{}' not applied", title);
        self
    }

    /// The two display variants of a chart: one with a title and subtitle, one
    /// with the y-axis titled instead.
    pub fn title_variants(&self, title: &str, subtitle: &str, y_title: &str) -> (Self, Self) {
        (
            self.clone().with_title(title, subtitle),
            self.clone().update_y_axis_title(y_title),
        )
    }
}

fn set_y_axis_title(spec: &mut Map<String, Value>, title: &str) -> bool {
    let Some(Value::Object(y)) = spec
        .get_mut("encoding")
        .and_then(|encoding| encoding.get_mut("y"))
    else {
        return false;
    };
    let axis = y
        .entry("axis")
        .or_insert_with(|| Value::Object(Map::new()));
    if !axis.is_object() {
        *axis = Value::Object(Map::new());
    }
    if let Value::Object(axis) = axis {
        axis.insert("title".to_string(), json!(title));
    }
    true
}

/// Prefix a source line with `Source: ` unless it already reads as a source or note.
pub fn source_text(source: &str) -> String {
    if source.starts_with("Source:") || source.starts_with("Note:") {
        source.to_string()
    } else {
        format!("Source: {}", source)
    }
}

/// A translucent band between two dates, for layering over time series.
pub fn shaded_area(start: NaiveDate, end: NaiveDate) -> ChartSpec {
    let mut map = Map::new();
    map.insert(
        "data".to_string(),
        json!({ "values": [{
            "start": start.format("%Y-%m-%d").to_string(),
            "end": end.format("%Y-%m-%d").to_string(),
        }] }),
    );
    map.insert("mark".to_string(), json!({ "type": "rect", "opacity": 0.5 }));
    map.insert(
        "encoding".to_string(),
        json!({
            "x": { "field": "start", "type": "temporal" },
            "x2": { "field": "end" },
        }),
    );
    ChartSpec(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point_chart() -> ChartSpec {
        ChartSpec::new(json!({
            "mark": "point",
            "encoding": {
                "x": { "field": "x", "type": "quantitative" },
                "y": { "field": "y", "type": "quantitative" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(ChartSpec::new(json!([1, 2])), Err(StyleError::InvalidChart)));
    }

    #[test]
    fn test_update_y_axis_title() {
        let chart = point_chart().update_y_axis_title("New Y Title");
        assert_eq!(chart.to_value()["encoding"]["y"]["axis"]["title"], "New Y Title");
    }

    #[test]
    fn test_update_y_axis_title_in_layer() {
        let rule = ChartSpec::new(json!({ "mark": "rule" })).unwrap();
        let chart = ChartSpec::layer([rule, point_chart()]).update_y_axis_title("GDP");
        let value = chart.to_value();
        assert_eq!(value["layer"][1]["encoding"]["y"]["axis"]["title"], "GDP");
        assert!(value["layer"][0].get("encoding").is_none());
    }

    #[test]
    fn test_update_y_axis_title_without_y() {
        let chart = ChartSpec::new(json!({ "mark": "text" })).unwrap();
        assert_eq!(chart.clone().update_y_axis_title("x"), chart);
    }

    #[test]
    fn test_dimensions_skip_missing_or_zero() {
        let chart = point_chart().with_dimensions(Some(350), Some(0));
        assert_eq!(chart.get("width"), Some(&json!(350)));
        assert!(chart.get("height").is_none());

        let untouched = point_chart().with_dimensions(None, None);
        assert_eq!(untouched, point_chart());
    }

    #[test]
    fn test_source_prefix() {
        assert_eq!(source_text("ONS"), "Source: ONS");
        assert_eq!(source_text("Source: ONS"), "Source: ONS");
        assert_eq!(source_text("Note: provisional"), "Note: provisional");
    }

    #[test]
    fn test_with_source_title() {
        let title = point_chart().with_source("OECD").to_value()["title"].clone();
        assert_eq!(title["text"], "Source: OECD");
        assert_eq!(title["orient"], "bottom");
        assert_eq!(title["color"], "#676A8680");
        assert_eq!(title["offset"], 7);
    }

    #[test]
    fn test_title_variants() {
        let (titled, y_titled) = point_chart().title_variants("GDP", "Annual", "£bn");
        assert_eq!(titled.to_value()["title"]["subtitle"], "Annual");
        assert!(titled.to_value()["encoding"]["y"].get("axis").is_none());
        assert_eq!(y_titled.to_value()["encoding"]["y"]["axis"]["title"], "£bn");
        assert!(y_titled.get("title").is_none());
    }

    #[test]
    fn test_shaded_area() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let value = shaded_area(start, end).to_value();
        assert_eq!(value["mark"]["type"], "rect");
        assert_eq!(value["data"]["values"][0]["end"], "2020-12-31");
        assert_eq!(value["encoding"]["x2"]["field"], "end");
    }

    #[test]
    fn test_minified_json_has_no_spaces() {
        let json = point_chart().to_json_minified().unwrap();
        assert!(!json.contains(' '));
        assert!(!json.contains('\n'));
    }
}
