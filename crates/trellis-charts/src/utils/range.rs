//! Range plot zoom and legend, shared by plain and joined range plots

use super::{series_entry, series_legend, PlotUtils};
use crate::splitters::{parse_x, range_categories};
use crate::ChartsConfig;
use trellis_core::{AxisRange, Legend, Plot, TabId, Trellises};

#[derive(Debug, Clone, Default)]
pub struct RangePlotUtils {
    config: ChartsConfig,
}

impl RangePlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for RangePlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    /// Only points with a mean are drawn, so only they widen x
    fn continuous_x_zoom(&self, acc: AxisRange, plot: &Plot) -> AxisRange {
        plot.range_series()
            .into_iter()
            .flatten()
            .flat_map(|s| s.data.iter())
            .filter(|p| p.y.is_some())
            .filter_map(|p| parse_x(&p.x))
            .fold(acc, AxisRange::include)
    }

    fn categorical_x_count(&self, plot: &Plot) -> usize {
        plot.range_series().map_or(0, |s| range_categories(s).len())
    }

    fn categorical_y_max(&self, plots: &[Plot]) -> f64 {
        plots
            .iter()
            .filter_map(Plot::range_series)
            .flatten()
            .flat_map(|s| s.data.iter())
            .filter_map(|p| p.max.or(p.y))
            .fold(0.0, f64::max)
    }

    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let entries = plots
            .iter()
            .filter_map(Plot::range_series)
            .flatten()
            .map(|s| series_entry(s.name.as_deref(), s.color.as_deref()))
            .collect();
        series_legend(entries, tab, trellises, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{PlotData, PlotType, RangeEntry, RangeSeries, TrellisDesign};

    fn range_plot(points: Vec<RangeEntry>) -> Plot {
        Plot::new(PlotType::RangePlot).with_data(PlotData::Ranges(vec![RangeSeries::new("All", points)]))
    }

    #[test]
    fn test_points_without_mean_ignored() {
        let plots = vec![range_plot(vec![
            RangeEntry::new("-7", 1.0, Some(1.0)),
            RangeEntry::new("28", 2.0, Some(2.0)),
            RangeEntry::new("56", 3.0, None),
        ])];
        let ranges = RangePlotUtils::default().calculate_zoom_ranges(
            &plots,
            TrellisDesign::ContinuousOverTime,
            TabId::LabLineplot,
        );
        assert_eq!(ranges.x, AxisRange::new(-7.0, 28.0));
        assert_eq!(ranges.y, AxisRange::PERCENT);
    }

    #[test]
    fn test_single_x_padded() {
        let plots = vec![range_plot(vec![RangeEntry::new("14", 1.0, Some(3.0))])];
        let ranges = RangePlotUtils::default().calculate_zoom_ranges(
            &plots,
            TrellisDesign::ContinuousOverTime,
            TabId::VitalsLineplot,
        );
        assert_eq!(ranges.x, AxisRange::new(13.0, 15.0));
    }

    #[test]
    fn test_no_mean_anywhere_is_zero() {
        let plots = vec![range_plot(vec![RangeEntry::new("14", 1.0, None)])];
        let ranges = RangePlotUtils::default().calculate_zoom_ranges(
            &plots,
            TrellisDesign::ContinuousOverTime,
            TabId::VitalsLineplot,
        );
        assert_eq!(ranges.x, AxisRange::ZERO);
    }
}
