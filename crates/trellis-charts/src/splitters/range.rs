//! Range (mean with min/max) splitters, plain and joined

use super::{parse_x, sort_by_rank, ServerDataSplitter};
use serde::Serialize;
use trellis_core::{series_name, RangeEntry, RangeSeries};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RangePlotData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub series: Vec<RangeSeriesData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSeriesData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub ranges: Vec<RangeBand>,
    pub averages: Vec<AveragePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeBand {
    pub x: f64,
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePoint {
    pub x: f64,
    pub y: f64,
    pub std_dev: Option<f64>,
    pub std_err: Option<f64>,
    pub data_points: u32,
}

/// Distinct x labels of all series in `xrank` order
pub fn range_categories(series: &[RangeSeries]) -> Vec<String> {
    let mut points: Vec<&RangeEntry> = series.iter().flat_map(|s| s.data.iter()).collect();
    sort_by_rank(&mut points, |p| p.xrank);

    let mut categories: Vec<String> = Vec::new();
    for point in points {
        if !categories.contains(&point.x) {
            categories.push(point.x.clone());
        }
    }
    categories
}

/// Push the band and average of a point with a known y; unknown y is skipped
fn push_point(x: f64, point: &RangeEntry, out: &mut RangeSeriesData) {
    let Some(y) = point.y else {
        return;
    };
    let (low, high) = match (point.min, point.max) {
        (Some(min), Some(max)) => (min, max),
        _ => (y, y),
    };
    out.ranges.push(RangeBand { x, low, high });
    out.averages.push(AveragePoint {
        x,
        y,
        std_dev: point.std_dev,
        std_err: point.std_err,
        data_points: point.data_points,
    });
}

/// Splits range series.
///
/// Points without a y value are left out rather than drawn at zero: a missing
/// mean is not a zero mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangePlotSplitter;

impl ServerDataSplitter for RangePlotSplitter {
    type Entry = RangeSeries;
    type Output = RangePlotData;

    fn split_server_data(&self, entries: &[RangeSeries], categorical: bool) -> RangePlotData {
        tracing::trace!("Splitting {} range series (categorical: {})", entries.len(), categorical);

        let categories = categorical.then(|| range_categories(entries));

        let series = entries
            .iter()
            .map(|s| {
                let mut out = RangeSeriesData {
                    name: series_name(s.name.as_deref()),
                    color: s.color.clone(),
                    ranges: Vec::new(),
                    averages: Vec::new(),
                };

                match &categories {
                    Some(categories) => {
                        for (i, category) in categories.iter().enumerate() {
                            if let Some(point) = s.data.iter().find(|p| p.x == *category) {
                                push_point(i as f64, point, &mut out);
                            }
                        }
                    }
                    None => {
                        let mut points: Vec<&RangeEntry> = s.data.iter().collect();
                        sort_by_rank(&mut points, |p| p.xrank);
                        let mut seen: Vec<f64> = Vec::new();
                        for point in points {
                            let Some(x) = parse_x(&point.x) else {
                                continue;
                            };
                            if seen.contains(&x) {
                                continue;
                            }
                            seen.push(x);
                            push_point(x, point, &mut out);
                        }
                    }
                }
                out
            })
            .collect();

        RangePlotData { categories, series }
    }
}

// ============================================================================
// JOINED RANGE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JoinedRangePlotData {
    #[serde(flatten)]
    pub range: RangePlotData,
    pub lines: Vec<JoinedLine>,
}

/// Averages of one series joined in x order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<[f64; 2]>,
}

/// Range splitter whose averages are also joined into one line per series
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinedRangePlotSplitter;

impl ServerDataSplitter for JoinedRangePlotSplitter {
    type Entry = RangeSeries;
    type Output = JoinedRangePlotData;

    fn split_server_data(&self, entries: &[RangeSeries], categorical: bool) -> JoinedRangePlotData {
        let range = RangePlotSplitter.split_server_data(entries, categorical);

        let lines = range
            .series
            .iter()
            .map(|s| {
                let mut points: Vec<[f64; 2]> = s.averages.iter().map(|a| [a.x, a.y]).collect();
                sort_by_rank(&mut points, |p| p[0]);
                JoinedLine {
                    name: s.name.clone(),
                    color: s.color.clone(),
                    points,
                }
            })
            .collect();

        JoinedRangePlotData { range, lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Vec<RangeSeries> {
        vec![
            RangeSeries::new(
                "Placebo",
                vec![
                    RangeEntry::new("Week 2", 2.0, Some(5.0)).with_bounds(4.0, 6.0),
                    RangeEntry::new("Week 1", 1.0, Some(3.0)),
                    RangeEntry::new("Week 4", 4.0, None),
                ],
            ),
            RangeSeries::new(
                "Drug",
                vec![RangeEntry::new("Week 3", 3.0, Some(7.0)).with_bounds(6.5, 9.0)],
            ),
        ]
    }

    #[test]
    fn test_categorical_categories() {
        let data = RangePlotSplitter.split_server_data(&sample_series(), true);
        assert_eq!(
            data.categories,
            Some(vec![
                "Week 1".into(),
                "Week 2".into(),
                "Week 3".into(),
                "Week 4".into()
            ])
        );
    }

    #[test]
    fn test_categorical_ranges_indexed() {
        let data = RangePlotSplitter.split_server_data(&sample_series(), true);
        let placebo = &data.series[0];

        assert_eq!(
            placebo.ranges,
            vec![
                RangeBand { x: 0.0, low: 3.0, high: 3.0 },
                RangeBand { x: 1.0, low: 4.0, high: 6.0 },
            ]
        );
        assert_eq!(placebo.averages.len(), 2);
        assert_eq!(data.series[1].ranges, vec![RangeBand { x: 2.0, low: 6.5, high: 9.0 }]);
    }

    #[test]
    fn test_continuous_skips_missing_y() {
        let series = vec![RangeSeries::new(
            "All",
            vec![
                RangeEntry::new("10", 10.0, Some(1.0)),
                RangeEntry::new("2.5", 2.5, Some(2.0)),
                RangeEntry::new("20", 20.0, None),
            ],
        )];

        let data = RangePlotSplitter.split_server_data(&series, false);
        assert_eq!(data.categories, None);
        let xs: Vec<f64> = data.series[0].averages.iter().map(|a| a.x).collect();
        assert_eq!(xs, vec![2.5, 10.0]);
    }

    #[test]
    fn test_joined_lines_follow_x() {
        let data = JoinedRangePlotSplitter.split_server_data(&sample_series(), true);
        assert_eq!(data.lines[0].points, vec![[0.0, 3.0], [1.0, 5.0]]);
        assert_eq!(data.lines[1].name, "Drug");
        assert_eq!(data.range.series.len(), 2);
    }
}
