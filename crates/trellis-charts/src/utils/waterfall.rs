//! Waterfall zoom: percent change always spans the response thresholds

use super::{series_legend_title, PlotUtils};
use crate::ChartsConfig;
use trellis_core::{
    compare_numeric_aware, dedup_entries, AxisRange, Legend, LegendEntry, Plot, TabId,
    TrellisDesign, Trellises, ZoomRanges,
};

/// Fallback legend title of the response colouring
pub const BEST_RESPONSE_TITLE: &str = "Best overall response";

#[derive(Debug, Clone, Default)]
pub struct WaterfallPlotUtils {
    config: ChartsConfig,
}

impl WaterfallPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for WaterfallPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        let bound = self.config.waterfall_bound;
        let data: Vec<_> = plots
            .iter()
            .filter(|p| p.has_data())
            .filter_map(Plot::waterfall)
            .collect();

        let count = data
            .iter()
            .map(|d| d.categories.len().max(d.bars.len()))
            .max()
            .unwrap_or(0);
        let y = data
            .iter()
            .flat_map(|d| d.bars.iter())
            .fold(AxisRange::new(-bound, bound), |acc, b| acc.include(b.y));

        let ranges = ZoomRanges::new(AxisRange::categorical(count), y);
        tracing::debug!("Waterfall zoom for {:?} on {:?}: {:?}", design, tab, ranges);
        ranges
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let entries = plots
            .iter()
            .filter_map(Plot::waterfall)
            .flat_map(|d| d.bars.iter())
            .map(|b| LegendEntry::circle(b.name.clone(), b.color.clone()))
            .collect();

        let mut entries = dedup_entries(entries);
        entries.sort_by(|a, b| compare_numeric_aware(&a.label, &b.label));
        if entries.is_empty() {
            return Vec::new();
        }

        let title = series_legend_title(trellises, tab).unwrap_or_else(|| BEST_RESPONSE_TITLE.to_string());
        vec![Legend::new(Some(title), entries)]
    }
}
