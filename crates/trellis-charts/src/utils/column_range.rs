//! Therapy exposure (column range) zoom and its three legends

use super::{series_legend_title, PlotUtils};
use crate::ChartsConfig;
use trellis_core::{
    colors, compare_numeric_aware, dedup_entries, uniq_by_label, AxisRange, DateMarkerKind, Legend,
    LegendEntry, LegendSymbol, Plot, TabId, TrellisDesign, Trellises, ZoomRanges,
};

/// Entry pinned first in the main legend
pub const SUMMARY_LABEL: &str = "Summary";
pub const THERAPY_LEGEND_TITLE: &str = "Therapy description";
pub const DATE_MARKER_LEGEND_TITLE: &str = "Event dates";

fn marker_entry(kind: DateMarkerKind) -> LegendEntry {
    let (color, symbol) = match kind {
        DateMarkerKind::Death => (colors::DEATH, LegendSymbol::Cross),
        DateMarkerKind::Discontinuation => (colors::DISCONTINUATION, LegendSymbol::Triangle),
        DateMarkerKind::Progression => (colors::PROGRESSION, LegendSymbol::Diamond),
        DateMarkerKind::Ongoing => (colors::ONGOING, LegendSymbol::Line),
    };
    LegendEntry::new(kind.label(), color, symbol)
}

#[derive(Debug, Clone, Default)]
pub struct ColumnRangePlotUtils {
    config: ChartsConfig,
}

impl ColumnRangePlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for ColumnRangePlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        let data: Vec<_> = plots
            .iter()
            .filter(|p| p.has_data())
            .filter_map(Plot::column_range)
            .collect();

        let count = data.iter().map(|d| d.categories.len()).max().unwrap_or(0);

        let y = data
            .iter()
            .flat_map(|d| d.ranges.iter().flat_map(|r| [r.low, r.high]))
            .chain(data.iter().flat_map(|d| d.markers.iter().map(|m| m.y)))
            .fold(AxisRange::SENTINEL, AxisRange::include);
        let y = if y.is_sentinel() {
            AxisRange::ZERO
        } else {
            y.pad_degenerate(self.config.degenerate_padding)
        };

        let ranges = ZoomRanges::new(AxisRange::categorical(count), y);
        tracing::debug!("Column range zoom for {:?} on {:?}: {:?}", design, tab, ranges);
        ranges
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let data: Vec<_> = plots.iter().filter_map(Plot::column_range).collect();
        if data.iter().all(|d| d.ranges.is_empty() && d.markers.is_empty()) {
            return Vec::new();
        }

        let ranges = || data.iter().flat_map(|d| d.ranges.iter());
        let mut legends = Vec::new();

        let mut main = dedup_entries(
            ranges()
                .map(|r| LegendEntry::circle(r.name.clone(), r.color.clone()))
                .collect(),
        );
        // Stable: "Summary" ends up first, the rest in numeric-aware order
        main.sort_by(|a, b| {
            (b.label == SUMMARY_LABEL)
                .cmp(&(a.label == SUMMARY_LABEL))
                .then_with(|| compare_numeric_aware(&a.label, &b.label))
        });
        if !main.is_empty() {
            legends.push(Legend::new(series_legend_title(trellises, tab), main));
        }

        let therapies = uniq_by_label(
            ranges()
                .filter_map(|r| {
                    r.therapy.as_ref().map(|therapy| {
                        LegendEntry::new(
                            therapy.clone(),
                            r.therapy_color.as_deref().unwrap_or(colors::THERAPY),
                            LegendSymbol::Square,
                        )
                    })
                })
                .collect(),
        );
        if !therapies.is_empty() {
            legends.push(Legend::new(Some(THERAPY_LEGEND_TITLE.to_string()), therapies));
        }

        legends.push(Legend::new(
            Some(DATE_MARKER_LEGEND_TITLE.to_string()),
            DateMarkerKind::all().iter().copied().map(marker_entry).collect(),
        ));
        legends
    }
}
