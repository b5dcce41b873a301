//! Grouped (and stacked) bar splitter

use super::{sort_by_rank, ServerDataSplitter};
use serde::Serialize;
use trellis_core::{normalize_label, series_name, BarChartSeries};

/// Chart-ready bar series over a shared category axis
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BarChartPlotData {
    pub categories: Vec<String>,
    pub series: Vec<BarSeriesData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeriesData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPoint {
    pub x: f64,
    pub y: f64,
    pub rank: f64,
    pub total_subjects: u32,
}

/// Category axis of a bar payload.
///
/// Taken from the first series' `categories`; when the server omitted them the
/// entries' own categories are used in rank order.
pub fn bar_categories(series: &[BarChartSeries]) -> Vec<String> {
    let Some(first) = series.first() else {
        return Vec::new();
    };

    if !first.categories.is_empty() {
        return first
            .categories
            .iter()
            .map(|c| normalize_label(c.as_deref()))
            .collect();
    }

    let mut entries: Vec<_> = series.iter().flat_map(|s| s.series.iter()).collect();
    sort_by_rank(&mut entries, |e| e.rank);

    let mut categories: Vec<String> = Vec::new();
    for entry in entries {
        let category = normalize_label(entry.category.as_deref());
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Splits grouped bar series; bars sit at `rank - 1`
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedBarPlotSplitter;

impl ServerDataSplitter for GroupedBarPlotSplitter {
    type Entry = BarChartSeries;
    type Output = BarChartPlotData;

    fn split_server_data(&self, entries: &[BarChartSeries], _categorical: bool) -> BarChartPlotData {
        tracing::trace!("Splitting {} bar series", entries.len());

        let series = entries
            .iter()
            .map(|s| BarSeriesData {
                name: series_name(s.name.as_deref()),
                color: s.color.clone(),
                data: s
                    .series
                    .iter()
                    .map(|e| BarPoint {
                        x: e.rank - 1.0,
                        y: e.value,
                        rank: e.rank,
                        total_subjects: e.total_subjects,
                    })
                    .collect(),
            })
            .collect();

        BarChartPlotData {
            categories: bar_categories(entries),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{BarEntry, EMPTY_LABEL};

    #[test]
    fn test_split_grouped_bars() {
        let mut first = BarChartSeries::new("Grade 1")
            .with_color("#FF0000")
            .with_entry(BarEntry::new("Placebo", 1.0, 4.0))
            .with_entry(BarEntry::new("Drug", 2.0, 6.0));
        first.categories = vec![Some("Placebo".into()), None];
        let second = BarChartSeries {
            name: None,
            ..BarChartSeries::default()
        }
        .with_entry(BarEntry::new("Drug", 2.0, 1.0));

        let data = GroupedBarPlotSplitter.split_server_data(&[first, second], true);

        assert_eq!(data.categories, vec!["Placebo".to_string(), EMPTY_LABEL.to_string()]);
        assert_eq!(data.series[0].name, "Grade 1");
        assert_eq!(data.series[0].color.as_deref(), Some("#FF0000"));
        assert_eq!(data.series[0].data[1].x, 1.0);
        assert_eq!(data.series[0].data[1].y, 6.0);
        assert_eq!(data.series[1].name, "All");
        assert_eq!(data.series[1].color, None);
    }

    #[test]
    fn test_categories_from_entries_when_absent() {
        let series = vec![
            BarChartSeries::new("A")
                .with_entry(BarEntry::new("Week 2", 2.0, 1.0))
                .with_entry(BarEntry::new("Week 1", 1.0, 1.0)),
            BarChartSeries::new("B").with_entry(BarEntry::new("Week 3", 3.0, 1.0)),
        ];
        assert_eq!(bar_categories(&series), vec!["Week 1", "Week 2", "Week 3"]);
    }

    #[test]
    fn test_empty_payload() {
        let data = GroupedBarPlotSplitter.split_server_data(&[], true);
        assert!(data.categories.is_empty());
        assert!(data.series.is_empty());
    }
}
