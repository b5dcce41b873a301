//! Box plot splitter: boxes, outliers and event count annotations

use super::{parse_x, sort_by_rank, ServerDataSplitter};
use serde::Serialize;
use trellis_core::BoxPlotEntry;

/// Chart-ready box plot series
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotData {
    /// Ordered x categories, present whenever boxes sit at category indices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub boxes: Vec<BoxPoint>,
    pub outliers: Vec<OutlierPoint>,
    pub event_counts: Vec<EventCountPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPoint {
    pub x: f64,
    pub low: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub high: Option<f64>,
    pub event_count: u32,
    pub subject_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierPoint {
    pub x: f64,
    pub y: f64,
    pub subject_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCountPoint {
    pub x: f64,
    pub y: u32,
}

/// Splits box plot bins
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxPlotSplitter;

/// Box plot categories: bin labels in `xrank` order
pub fn box_plot_categories(entries: &[BoxPlotEntry]) -> Vec<String> {
    let mut sorted: Vec<&BoxPlotEntry> = entries.iter().collect();
    sort_by_rank(&mut sorted, |e| e.xrank);
    sorted.into_iter().map(|e| e.x.clone()).collect()
}

impl ServerDataSplitter for BoxPlotSplitter {
    type Entry = BoxPlotEntry;
    type Output = BoxPlotData;

    fn split_server_data(&self, entries: &[BoxPlotEntry], categorical: bool) -> BoxPlotData {
        tracing::trace!("Splitting {} box plot entries (categorical: {})", entries.len(), categorical);

        let categories = box_plot_categories(entries);
        // Non-numeric bins sit at their category index, as on the zoom slider
        let by_index = categorical || entries.iter().any(|e| parse_x(&e.x).is_none());
        if by_index && !categorical {
            tracing::warn!("Non-numeric box plot bins on a continuous axis, using category indices");
        }
        let position = |x: &str| -> Option<f64> {
            if by_index {
                categories.iter().position(|c| c == x).map(|i| i as f64)
            } else {
                parse_x(x)
            }
        };

        let boxes = entries
            .iter()
            .filter(|e| e.event_count > 0)
            .filter_map(|e| {
                position(&e.x).map(|x| BoxPoint {
                    x,
                    low: e.lower_whisker,
                    q1: e.lower_quartile,
                    median: e.median,
                    q3: e.upper_quartile,
                    high: e.upper_whisker,
                    event_count: e.event_count,
                    subject_count: e.subject_count,
                })
            })
            .collect();

        let outliers = entries
            .iter()
            .flat_map(|e| e.outliers.iter())
            .filter_map(|o| match position(&o.x) {
                Some(x) => Some(OutlierPoint {
                    x,
                    y: o.outlier_value,
                    subject_id: o.subject_id.clone(),
                }),
                None => {
                    tracing::warn!("Dropping outlier of {} at unknown x '{}'", o.subject_id, o.x);
                    None
                }
            })
            .collect();

        let event_counts = entries
            .iter()
            .filter_map(|e| position(&e.x).map(|x| EventCountPoint { x, y: e.event_count }))
            .collect();

        BoxPlotData {
            categories: by_index.then_some(categories),
            boxes,
            outliers,
            event_counts,
        }
    }
}
