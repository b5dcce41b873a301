//! Box plot zoom: continuous x widened by the box width

use super::PlotUtils;
use crate::splitters::{box_plot_categories, parse_x};
use crate::ChartsConfig;
use trellis_core::{AxisRange, Plot};

#[derive(Debug, Clone, Default)]
pub struct BoxPlotUtils {
    config: ChartsConfig,
}

impl BoxPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for BoxPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn continuous_x_zoom(&self, acc: AxisRange, plot: &Plot) -> AxisRange {
        let Some(entries) = plot.box_entries() else {
            return acc;
        };

        let xs: Vec<f64> = entries.iter().filter_map(|e| parse_x(&e.x)).collect();
        if xs.len() == entries.len() {
            xs.into_iter().fold(acc, AxisRange::include)
        } else {
            // Non-numeric bins sit at their category index
            acc.union(AxisRange::categorical(entries.len()))
        }
    }

    fn finish_continuous_x(&self, range: AxisRange) -> AxisRange {
        if range.is_degenerate() {
            range.pad(self.config.box_single_point_half_width)
        } else {
            range.pad(self.config.box_half_width)
        }
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.box_entries().map_or(0, |e| box_plot_categories(e).len())
    }
}
