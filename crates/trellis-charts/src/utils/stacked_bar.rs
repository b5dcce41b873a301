//! Stacked bar zoom and legend: bars stack per category across every plot

use super::{series_entry, series_legend, PlotUtils};
use crate::splitters::bar_categories;
use crate::ChartsConfig;
use std::collections::HashMap;
use trellis_core::{normalize_label, BarChartSeries, Legend, Plot, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct StackedBarPlotUtils {
    config: ChartsConfig,
}

impl StackedBarPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

/// Tallest per-category sum over a set of series
pub fn max_stacked_total<'a>(series: impl IntoIterator<Item = &'a BarChartSeries>) -> f64 {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for entry in series.into_iter().flat_map(|s| s.series.iter()) {
        *totals
            .entry(normalize_label(entry.category.as_deref()))
            .or_insert(0.0) += entry.value;
    }
    totals.into_values().fold(0.0, f64::max)
}

/// Legend entries of bar-shaped payloads, in plot then series order
pub(crate) fn bar_legend_entries(plots: &[Plot]) -> Vec<trellis_core::LegendEntry> {
    plots
        .iter()
        .filter_map(Plot::bar_series)
        .flatten()
        .map(|s| series_entry(s.name.as_deref(), s.color.as_deref()))
        .collect()
}

impl PlotUtils for StackedBarPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.bar_series().map_or(0, |s| bar_categories(s).len())
    }

    fn categorical_y_max(&self, plots: &[Plot]) -> f64 {
        max_stacked_total(plots.iter().filter_map(Plot::bar_series).flatten())
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        series_legend(bar_legend_entries(plots), tab, trellises, true)
    }
}
