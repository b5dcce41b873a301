//! Bars with overlay lines: the y axis must fit both

use super::stacked_bar::max_stacked_total;
use super::{series_entry, series_legend, PlotUtils};
use crate::splitters::{bar_categories, line_categories};
use crate::ChartsConfig;
use trellis_core::{colors, series_name, LegendEntry, LegendSymbol, Legend, Plot, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct BarLinePlotUtils {
    config: ChartsConfig,
}

impl BarLinePlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for BarLinePlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.bar_line().map_or(0, |d| {
            bar_categories(&d.bars).len().max(line_categories(&d.lines).len())
        })
    }

    fn categorical_y_max(&self, plots: &[Plot]) -> f64 {
        let data: Vec<_> = plots.iter().filter_map(Plot::bar_line).collect();

        let bars = max_stacked_total(data.iter().flat_map(|d| d.bars.iter()));
        let lines = data
            .iter()
            .flat_map(|d| d.lines.iter())
            .flat_map(|s| s.series.iter())
            .map(|e| e.value)
            .fold(0.0, f64::max);
        bars.max(lines)
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let mut entries = Vec::new();
        for data in plots.iter().filter_map(Plot::bar_line) {
            entries.extend(
                data.bars
                    .iter()
                    .map(|s| series_entry(s.name.as_deref(), s.color.as_deref())),
            );
            entries.extend(data.lines.iter().map(|s| {
                LegendEntry::new(
                    series_name(s.name.as_deref()),
                    s.color.as_deref().unwrap_or(colors::BLACK),
                    LegendSymbol::Line,
                )
            }));
        }
        series_legend(entries, tab, trellises, false)
    }
}
