//! Counts-over-time line zoom and legend

use super::stacked_bar::bar_legend_entries;
use super::{series_legend, PlotUtils};
use crate::splitters::line_categories;
use crate::ChartsConfig;
use trellis_core::{AxisRange, Legend, Plot, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct LinePlotUtils {
    config: ChartsConfig,
}

impl LinePlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for LinePlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    /// Points sit at `rank - 1`, like the bars they summarize
    fn continuous_x_zoom(&self, acc: AxisRange, plot: &Plot) -> AxisRange {
        plot.bar_series()
            .into_iter()
            .flatten()
            .flat_map(|s| s.series.iter())
            .fold(acc, |acc, e| acc.include(e.rank - 1.0))
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.bar_series().map_or(0, |s| line_categories(s).len())
    }

    fn categorical_y_max(&self, plots: &[Plot]) -> f64 {
        plots
            .iter()
            .filter_map(Plot::bar_series)
            .flatten()
            .flat_map(|s| s.series.iter())
            .map(|e| e.value)
            .fold(0.0, f64::max)
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        series_legend(bar_legend_entries(plots), tab, trellises, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{BarChartSeries, BarEntry, PlotData, PlotType, TrellisDesign};

    fn line_plot() -> Plot {
        Plot::new(PlotType::LinePlot).with_data(PlotData::Bars(vec![
            BarChartSeries::new("first")
                .with_entry(BarEntry::new("1", 1.0, 4.0))
                .with_entry(BarEntry::new("3", 3.0, 9.0)),
            BarChartSeries::new("second").with_entry(BarEntry::new("2", 2.0, 6.0)),
        ]))
    }

    #[test]
    fn test_counts_zoom() {
        let ranges = LinePlotUtils::default().calculate_zoom_ranges(
            &[line_plot()],
            TrellisDesign::CategoricalCountsAndPercentages,
            TabId::AesOverTime,
        );
        assert_eq!(ranges.x, AxisRange::new(0.0, 2.0));
        assert_eq!(ranges.y, AxisRange::new(0.0, 9.0));
    }

    #[test]
    fn test_continuous_zoom_on_ranks() {
        let ranges = LinePlotUtils::default().calculate_zoom_ranges(
            &[line_plot()],
            TrellisDesign::ContinuousOverTime,
            TabId::AesOverTime,
        );
        assert_eq!(ranges.x, AxisRange::new(0.0, 2.0));
    }

    #[test]
    fn test_legend_keeps_series_order() {
        let legends = LinePlotUtils::default().extract_legend(&[line_plot()], TabId::AesOverTime, &[]);
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(legends[0].title, None);
    }
}
