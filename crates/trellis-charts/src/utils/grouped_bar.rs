//! Grouped bar zoom: tallest single bar plus selection headroom

use super::stacked_bar::bar_legend_entries;
use super::{round2, series_legend, PlotUtils};
use crate::splitters::bar_categories;
use crate::ChartsConfig;
use trellis_core::{Legend, Plot, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct GroupedBarPlotUtils {
    config: ChartsConfig,
}

impl GroupedBarPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for GroupedBarPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.bar_series().map_or(0, |s| bar_categories(s).len())
    }

    fn categorical_y_max(&self, plots: &[Plot]) -> f64 {
        let tallest = plots
            .iter()
            .filter_map(Plot::bar_series)
            .flatten()
            .flat_map(|s| s.series.iter())
            .map(|e| e.value)
            .fold(0.0, f64::max);
        round2(tallest * self.config.grouped_bar_headroom)
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        series_legend(bar_legend_entries(plots), tab, trellises, false)
    }
}
