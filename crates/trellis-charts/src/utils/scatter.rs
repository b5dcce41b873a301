//! Scatter zoom over both axes, with the Hy's law quadrant floor

use super::{series_entry, series_legend, PlotUtils};
use crate::ChartsConfig;
use trellis_core::{AxisRange, Legend, Plot, ScatterPoint, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct ScatterPlotUtils {
    config: ChartsConfig,
}

impl ScatterPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

fn points(plot: &Plot) -> impl Iterator<Item = &ScatterPoint> {
    plot.scatter_series()
        .into_iter()
        .flatten()
        .flat_map(|s| s.data.iter())
}

impl PlotUtils for ScatterPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn x_zoom(&self, acc: AxisRange, plot: &Plot) -> AxisRange {
        points(plot).fold(acc, |acc, p| acc.include(p.x))
    }

    fn y_zoom(&self, acc: AxisRange, plot: &Plot) -> AxisRange {
        points(plot).fold(acc, |acc, p| acc.include(p.y))
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let entries = plots
            .iter()
            .filter_map(Plot::scatter_series)
            .flatten()
            .map(|s| series_entry(s.name.as_deref(), s.color.as_deref()))
            .collect();
        series_legend(entries, tab, trellises, false)
    }
}
