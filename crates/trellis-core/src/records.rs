//! Server-shaped statistical aggregates, one record family per payload shape

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// LABEL DESERIALIZERS
// ============================================================================

/// Category labels arrive as strings, numbers or null
fn value_to_label(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(crate::normalize_label(value_to_label(value).as_deref()))
}

fn opt_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_label(Value::deserialize(deserializer)?))
}

fn opt_labels<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Option<String>>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(value_to_label).collect())
}

// ============================================================================
// BOX PLOT
// ============================================================================

/// One box of a box plot bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotEntry {
    #[serde(deserialize_with = "label")]
    pub x: String,
    #[serde(default)]
    pub xrank: f64,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub upper_quartile: Option<f64>,
    #[serde(default)]
    pub lower_quartile: Option<f64>,
    #[serde(default)]
    pub upper_whisker: Option<f64>,
    #[serde(default)]
    pub lower_whisker: Option<f64>,
    #[serde(default)]
    pub outliers: Vec<Outlier>,
    #[serde(default)]
    pub event_count: u32,
    #[serde(default)]
    pub subject_count: u32,
}

impl BoxPlotEntry {
    pub fn new(x: impl Into<String>, xrank: f64) -> Self {
        Self {
            x: x.into(),
            xrank,
            median: None,
            upper_quartile: None,
            lower_quartile: None,
            upper_whisker: None,
            lower_whisker: None,
            outliers: Vec::new(),
            event_count: 0,
            subject_count: 0,
        }
    }

    /// Set whiskers, quartiles and median in one go
    pub fn with_stats(mut self, low: f64, q1: f64, median: f64, q3: f64, high: f64) -> Self {
        self.lower_whisker = Some(low);
        self.lower_quartile = Some(q1);
        self.median = Some(median);
        self.upper_quartile = Some(q3);
        self.upper_whisker = Some(high);
        self
    }

    pub fn with_counts(mut self, event_count: u32, subject_count: u32) -> Self {
        self.event_count = event_count;
        self.subject_count = subject_count;
        self
    }

    pub fn with_outlier(mut self, outlier: Outlier) -> Self {
        self.outliers.push(outlier);
        self
    }
}

/// Single subject value outside the whiskers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlier {
    #[serde(deserialize_with = "label")]
    pub x: String,
    pub outlier_value: f64,
    #[serde(default)]
    pub subject_id: String,
}

impl Outlier {
    pub fn new(x: impl Into<String>, outlier_value: f64, subject_id: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            outlier_value,
            subject_id: subject_id.into(),
        }
    }
}

// ============================================================================
// BAR / LINE COUNTS
// ============================================================================

/// Series of per-category counts (stacked, grouped and line count charts)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSeries {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "opt_labels")]
    pub categories: Vec<Option<String>>,
    #[serde(default)]
    pub series: Vec<BarEntry>,
}

impl BarChartSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(|c| Some(c.into())).collect();
        self
    }

    pub fn with_entry(mut self, entry: BarEntry) -> Self {
        self.series.push(entry);
        self
    }
}

/// Count for one category of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarEntry {
    #[serde(default, deserialize_with = "opt_label")]
    pub category: Option<String>,
    #[serde(default)]
    pub rank: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub total_subjects: u32,
}

impl BarEntry {
    pub fn new(category: impl Into<String>, rank: f64, value: f64) -> Self {
        Self {
            category: Some(category.into()),
            rank,
            value,
            total_subjects: 0,
        }
    }
}

/// Bars with overlay lines sharing the category axis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarLineData {
    #[serde(default)]
    pub bars: Vec<BarChartSeries>,
    #[serde(default)]
    pub lines: Vec<BarChartSeries>,
}

// ============================================================================
// RANGE STATISTICS
// ============================================================================

/// Series of mean/min/max statistics per x bin
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSeries {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub data: Vec<RangeEntry>,
}

impl RangeSeries {
    pub fn new(name: impl Into<String>, data: Vec<RangeEntry>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeEntry {
    #[serde(deserialize_with = "label")]
    pub x: String,
    #[serde(default)]
    pub xrank: f64,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub std_dev: Option<f64>,
    #[serde(default)]
    pub std_err: Option<f64>,
    #[serde(default)]
    pub data_points: u32,
    #[serde(default)]
    pub name: Option<String>,
}

impl RangeEntry {
    pub fn new(x: impl Into<String>, xrank: f64, y: Option<f64>) -> Self {
        Self {
            x: x.into(),
            xrank,
            y,
            min: None,
            max: None,
            std_dev: None,
            std_err: None,
            data_points: 0,
            name: None,
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

// ============================================================================
// SCATTER / SIMPLE LINES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub data: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub subject_id: Option<String>,
}

impl ScatterPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            subject_id: None,
        }
    }
}

/// Per-subject (or per-mutation) line over continuous x
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLineSeries {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub data: Vec<SimpleLinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLinePoint {
    pub x: f64,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub subject_id: Option<String>,
}

impl SimpleLinePoint {
    pub fn new(x: f64, y: Option<f64>) -> Self {
        Self {
            x,
            y,
            subject_id: None,
        }
    }
}

// ============================================================================
// HEATMAP / WATERFALL / COLUMN RANGE / CHORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    #[serde(default)]
    pub x_categories: Vec<String>,
    #[serde(default)]
    pub y_categories: Vec<String>,
    #[serde(default)]
    pub entries: Vec<HeatmapEntry>,
}

/// Cell addressed by category indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapEntry {
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub value: Option<f64>,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub bars: Vec<WaterfallBar>,
}

/// Percent change of one subject, coloured by response category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallBar {
    #[serde(deserialize_with = "label")]
    pub x: String,
    pub y: f64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRangeData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub ranges: Vec<ColumnRangeEntry>,
    #[serde(default)]
    pub markers: Vec<DateMarker>,
}

/// Exposure interval of one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRangeEntry {
    #[serde(deserialize_with = "label")]
    pub x: String,
    pub low: f64,
    pub high: f64,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub therapy: Option<String>,
    #[serde(default)]
    pub therapy_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateMarkerKind {
    Death,
    Discontinuation,
    Progression,
    Ongoing,
}

impl DateMarkerKind {
    pub fn all() -> &'static [Self] {
        &[
            Self::Death,
            Self::Discontinuation,
            Self::Progression,
            Self::Ongoing,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Death => "Death",
            Self::Discontinuation => "Treatment discontinuation",
            Self::Progression => "Disease progression",
            Self::Ongoing => "Ongoing treatment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMarker {
    #[serde(deserialize_with = "label")]
    pub x: String,
    pub y: f64,
    pub kind: DateMarkerKind,
}

/// Co-occurrence link between two nodes of a chord diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordLink {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub value: f64,
}

impl ChordLink {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_box_entry_numeric_x() {
        let entry: BoxPlotEntry = serde_json::from_value(json!({
            "x": 2.0, "xrank": 2, "median": 5.0, "eventCount": 3,
            "outliers": [{"x": "2.0", "outlierValue": 40.0, "subjectId": "S-1"}]
        }))
        .unwrap();
        assert_eq!(entry.x, "2.0");
        assert_eq!(entry.event_count, 3);
        assert_eq!(entry.outliers[0].subject_id, "S-1");
        assert_eq!(entry.upper_whisker, None);
    }

    #[test]
    fn test_null_x_becomes_empty_label() {
        let entry: RangeEntry = serde_json::from_value(json!({"x": null, "y": 1.5})).unwrap();
        assert_eq!(entry.x, crate::EMPTY_LABEL);
    }

    #[test]
    fn test_bar_series_null_categories() {
        let series: BarChartSeries = serde_json::from_value(json!({
            "categories": ["A", null],
            "series": [{"category": null, "rank": 2, "value": 4, "totalSubjects": 10}]
        }))
        .unwrap();
        assert_eq!(series.categories, vec![Some("A".to_string()), None]);
        assert_eq!(series.series[0].category, None);
        assert_eq!(series.name, None);
    }
}
