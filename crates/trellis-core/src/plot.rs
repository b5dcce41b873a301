//! Plot types and the plot value object

use crate::records::*;
use crate::{Result, TrellisError, TrellisOption, Trellises};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// PLOT TYPES
// ============================================================================

/// Chart family of a plot, selects splitter and zoom/legend strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlotType {
    BoxPlot,
    StackedBarPlot,
    GroupedBarPlot,
    LinePlot,
    RangePlot,
    JoinedRangePlot,
    ScatterPlot,
    BarLinePlot,
    SimpleLinePlot,
    Heatmap,
    Waterfall,
    ColumnRange,
    ChordDiagram,
    #[serde(other)]
    Unknown,
}

impl PlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoxPlot => "BOX_PLOT",
            Self::StackedBarPlot => "STACKED_BAR_PLOT",
            Self::GroupedBarPlot => "GROUPED_BAR_PLOT",
            Self::LinePlot => "LINE_PLOT",
            Self::RangePlot => "RANGE_PLOT",
            Self::JoinedRangePlot => "JOINED_RANGE_PLOT",
            Self::ScatterPlot => "SCATTER_PLOT",
            Self::BarLinePlot => "BAR_LINE_PLOT",
            Self::SimpleLinePlot => "SIMPLE_LINE_PLOT",
            Self::Heatmap => "HEATMAP",
            Self::Waterfall => "WATERFALL",
            Self::ColumnRange => "COLUMN_RANGE",
            Self::ChordDiagram => "CHORD_DIAGRAM",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Every plot type with a dedicated strategy
    pub fn all() -> &'static [Self] {
        &[
            Self::BoxPlot,
            Self::StackedBarPlot,
            Self::GroupedBarPlot,
            Self::LinePlot,
            Self::RangePlot,
            Self::JoinedRangePlot,
            Self::ScatterPlot,
            Self::BarLinePlot,
            Self::SimpleLinePlot,
            Self::Heatmap,
            Self::Waterfall,
            Self::ColumnRange,
            Self::ChordDiagram,
        ]
    }
}

impl std::fmt::Display for PlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

/// Plot-type-specific server payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotData {
    BoxPlot(Vec<BoxPlotEntry>),
    Bars(Vec<BarChartSeries>),
    Ranges(Vec<RangeSeries>),
    Scatter(Vec<ScatterSeries>),
    BarLine(BarLineData),
    SimpleLines(Vec<SimpleLineSeries>),
    Heatmap(HeatmapData),
    Waterfall(WaterfallData),
    ColumnRange(ColumnRangeData),
    Chord(Vec<ChordLink>),
}

fn parse<T: serde::de::DeserializeOwned>(plot_type: PlotType, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| {
        tracing::warn!("Payload does not match {}: {}", plot_type, source);
        TrellisError::Payload { plot_type, source }
    })
}

impl PlotData {
    /// Read the raw server payload for a plot type.
    ///
    /// Unknown plot types keep the permissive fallback: their payload is read as bar series.
    pub fn from_json(plot_type: PlotType, value: Value) -> Result<Self> {
        let data = match plot_type {
            PlotType::BoxPlot => Self::BoxPlot(parse(plot_type, value)?),
            PlotType::StackedBarPlot
            | PlotType::GroupedBarPlot
            | PlotType::LinePlot
            | PlotType::Unknown => Self::Bars(parse(plot_type, value)?),
            PlotType::RangePlot | PlotType::JoinedRangePlot => Self::Ranges(parse(plot_type, value)?),
            PlotType::ScatterPlot => Self::Scatter(parse(plot_type, value)?),
            PlotType::BarLinePlot => Self::BarLine(parse(plot_type, value)?),
            PlotType::SimpleLinePlot => Self::SimpleLines(parse(plot_type, value)?),
            PlotType::Heatmap => Self::Heatmap(parse(plot_type, value)?),
            PlotType::Waterfall => Self::Waterfall(parse(plot_type, value)?),
            PlotType::ColumnRange => Self::ColumnRange(parse(plot_type, value)?),
            PlotType::ChordDiagram => Self::Chord(parse(plot_type, value)?),
        };
        Ok(data)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::BoxPlot(entries) => entries.is_empty(),
            Self::Bars(series) => series.is_empty(),
            Self::Ranges(series) => series.is_empty(),
            Self::Scatter(series) => series.is_empty(),
            Self::BarLine(data) => data.bars.is_empty() && data.lines.is_empty(),
            Self::SimpleLines(series) => series.is_empty(),
            Self::Heatmap(data) => data.entries.is_empty(),
            Self::Waterfall(data) => data.bars.is_empty(),
            Self::ColumnRange(data) => data.ranges.is_empty() && data.markers.is_empty(),
            Self::Chord(links) => links.is_empty(),
        }
    }
}

// ============================================================================
// PLOT
// ============================================================================

/// One trellised chart: its option binding plus the (possibly not yet fetched) data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPlot")]
pub struct Plot {
    pub plot_type: PlotType,
    #[serde(default)]
    pub trellising: Vec<TrellisOption>,
    #[serde(default)]
    pub series: Vec<Trellises>,
    pub data: Option<PlotData>,
}

/// Wire form of a plot before its payload is typed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlot {
    plot_type: PlotType,
    #[serde(default)]
    trellising: Vec<TrellisOption>,
    #[serde(default)]
    series: Vec<Trellises>,
    #[serde(default)]
    data: Option<Value>,
}

impl TryFrom<RawPlot> for Plot {
    type Error = TrellisError;

    fn try_from(raw: RawPlot) -> Result<Self> {
        let data = match raw.data {
            Some(Value::Null) | None => None,
            Some(value) => Some(PlotData::from_json(raw.plot_type, value)?),
        };
        Ok(Self {
            plot_type: raw.plot_type,
            trellising: raw.trellising,
            series: raw.series,
            data,
        })
    }
}

impl Plot {
    /// Empty plot waiting for its data
    pub fn new(plot_type: PlotType) -> Self {
        Self {
            plot_type,
            trellising: Vec::new(),
            series: Vec::new(),
            data: None,
        }
    }

    pub fn with_trellising(mut self, trellising: Vec<TrellisOption>) -> Self {
        self.trellising = trellising;
        self
    }

    pub fn with_series(mut self, series: Vec<Trellises>) -> Self {
        self.series = series;
        self
    }

    pub fn with_data(mut self, data: PlotData) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach a raw server payload, typed by this plot's type
    pub fn with_server_data(self, value: Value) -> Result<Self> {
        let data = PlotData::from_json(self.plot_type, value)?;
        Ok(self.with_data(data))
    }

    /// Data present and non-empty
    pub fn has_data(&self) -> bool {
        self.data.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Matching key: `(trellisedBy, trellisOption)` pairs, category stripped, sorted
    pub fn trellising_key(&self) -> Vec<(String, String)> {
        trellising_key(&self.trellising)
    }

    // ========================================================================
    // Payload accessors
    // ========================================================================

    pub fn box_entries(&self) -> Option<&[BoxPlotEntry]> {
        match &self.data {
            Some(PlotData::BoxPlot(entries)) => Some(entries),
            _ => None,
        }
    }

    pub fn bar_series(&self) -> Option<&[BarChartSeries]> {
        match &self.data {
            Some(PlotData::Bars(series)) => Some(series),
            _ => None,
        }
    }

    pub fn range_series(&self) -> Option<&[RangeSeries]> {
        match &self.data {
            Some(PlotData::Ranges(series)) => Some(series),
            _ => None,
        }
    }

    pub fn scatter_series(&self) -> Option<&[ScatterSeries]> {
        match &self.data {
            Some(PlotData::Scatter(series)) => Some(series),
            _ => None,
        }
    }

    pub fn bar_line(&self) -> Option<&BarLineData> {
        match &self.data {
            Some(PlotData::BarLine(data)) => Some(data),
            _ => None,
        }
    }

    pub fn simple_lines(&self) -> Option<&[SimpleLineSeries]> {
        match &self.data {
            Some(PlotData::SimpleLines(series)) => Some(series),
            _ => None,
        }
    }

    pub fn heatmap(&self) -> Option<&HeatmapData> {
        match &self.data {
            Some(PlotData::Heatmap(data)) => Some(data),
            _ => None,
        }
    }

    pub fn waterfall(&self) -> Option<&WaterfallData> {
        match &self.data {
            Some(PlotData::Waterfall(data)) => Some(data),
            _ => None,
        }
    }

    pub fn column_range(&self) -> Option<&ColumnRangeData> {
        match &self.data {
            Some(PlotData::ColumnRange(data)) => Some(data),
            _ => None,
        }
    }

    pub fn chord_links(&self) -> Option<&[ChordLink]> {
        match &self.data {
            Some(PlotData::Chord(links)) => Some(links),
            _ => None,
        }
    }
}

/// Sorted, category-stripped key of a trellising
pub fn trellising_key(trellising: &[TrellisOption]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = trellising
        .iter()
        .map(|t| (t.trellised_by.clone(), t.trellis_option.clone()))
        .collect();
    key.sort();
    key
}
