//! Line (counts over time) splitter with a shared, zero-filled category axis

use super::{sort_by_rank, ServerDataSplitter};
use serde::Serialize;
use trellis_core::{normalize_label, series_name, BarChartSeries};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LinePlotData {
    pub categories: Vec<String>,
    pub series: Vec<LineSeriesData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeriesData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<LinePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Union of `(category, rank)` pairs across series, in rank order
pub fn line_categories(series: &[BarChartSeries]) -> Vec<(String, f64)> {
    let mut pairs: Vec<(String, f64)> = Vec::new();
    for entry in series.iter().flat_map(|s| s.series.iter()) {
        let pair = (normalize_label(entry.category.as_deref()), entry.rank);
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }
    sort_by_rank(&mut pairs, |(_, rank)| *rank);
    pairs
}

/// Splits line series so every series covers every category.
///
/// A category missing from a series becomes `y = 0`: these are counts, and an
/// absent count is a zero count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePlotSplitter;

impl ServerDataSplitter for LinePlotSplitter {
    type Entry = BarChartSeries;
    type Output = LinePlotData;

    fn split_server_data(&self, entries: &[BarChartSeries], _categorical: bool) -> LinePlotData {
        tracing::trace!("Splitting {} line series", entries.len());

        let axis = line_categories(entries);

        let series = entries
            .iter()
            .map(|s| {
                let data = axis
                    .iter()
                    .enumerate()
                    .map(|(i, (category, rank))| {
                        let y = s
                            .series
                            .iter()
                            .find(|e| {
                                e.rank == *rank && normalize_label(e.category.as_deref()) == *category
                            })
                            .map_or(0.0, |e| e.value);
                        LinePoint { x: i as f64, y }
                    })
                    .collect();

                LineSeriesData {
                    name: series_name(s.name.as_deref()),
                    color: s.color.clone(),
                    data,
                }
            })
            .collect();

        LinePlotData {
            categories: axis.into_iter().map(|(category, _)| category).collect(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::BarEntry;

    fn sample_series() -> Vec<BarChartSeries> {
        vec![
            BarChartSeries::new("first")
                .with_entry(BarEntry::new("1", 1.0, 1.0))
                .with_entry(BarEntry::new("3", 3.0, 1.0)),
            BarChartSeries::new("second")
                .with_entry(BarEntry::new("1", 1.0, 2.0))
                .with_entry(BarEntry::new("2", 2.0, 1.0)),
        ]
    }

    #[test]
    fn test_category_union() {
        let data = LinePlotSplitter.split_server_data(&sample_series(), true);
        assert_eq!(data.categories, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_categories_zero_filled() {
        let data = LinePlotSplitter.split_server_data(&sample_series(), true);

        assert_eq!(
            data.series[0].data,
            vec![
                LinePoint { x: 0.0, y: 1.0 },
                LinePoint { x: 1.0, y: 0.0 },
                LinePoint { x: 2.0, y: 1.0 },
            ]
        );
        assert_eq!(data.series[1].data[2], LinePoint { x: 2.0, y: 0.0 });
        assert_eq!(data.series[1].data[0], LinePoint { x: 0.0, y: 2.0 });
    }

    #[test]
    fn test_split_is_idempotent() {
        let series = sample_series();
        assert_eq!(
            LinePlotSplitter.split_server_data(&series, true),
            LinePlotSplitter.split_server_data(&series, true)
        );
    }
}
