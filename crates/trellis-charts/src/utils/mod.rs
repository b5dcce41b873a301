//! # utils
//!
//! Zoom range and legend strategies, one per plot type.
//!
//! [`PlotUtils::calculate_zoom_ranges`] dispatches on the trellis design and
//! calls back into small per-type hooks (continuous x reducer, categorical x
//! count, categorical y maximum, scatter x/y reducers). Plot types whose axes do
//! not fit the shared regimes override `calculate_zoom_ranges` instead.

mod bar_line;
mod box_plot;
mod chord;
mod column_range;
mod grouped_bar;
mod heatmap;
mod line;
mod range;
mod scatter;
mod simple_line;
mod stacked_bar;
mod waterfall;

pub use bar_line::*;
pub use box_plot::*;
pub use chord::*;
pub use column_range::*;
pub use grouped_bar::*;
pub use heatmap::*;
pub use line::*;
pub use range::*;
pub use scatter::*;
pub use simple_line::*;
pub use stacked_bar::*;
pub use waterfall::*;

use crate::ChartsConfig;
use trellis_core::{
    colors, dedup_entries, is_severity_dimension, series_name, series_trellises, sort_intervals,
    trellis_display_name, AxisRange, Legend, LegendEntry, Plot, TabId, TrellisDesign, Trellises,
    ZoomRanges,
};

// ============================================================================
// STRATEGY PATTERN: Plot Utils
// ============================================================================

/// Strategy trait computing zoom ranges and legends for one plot type.
///
/// Every hook defaults to "contributes nothing", so the base strategy is the
/// permissive fallback for unknown plot types.
pub trait PlotUtils: Send + Sync {
    fn config(&self) -> &ChartsConfig;

    /// Zoom window of a plot collection under a trellis design
    fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        regime_zoom_ranges(self, plots, design, tab)
    }

    /// Fold one plot into the continuous x accumulator
    fn continuous_x_zoom(&self, acc: AxisRange, _plot: &Plot) -> AxisRange {
        acc
    }

    /// Final touch on a non-empty continuous x range
    fn finish_continuous_x(&self, range: AxisRange) -> AxisRange {
        range.pad_degenerate(self.config().degenerate_padding)
    }

    /// Number of categories on the x axis of one plot
    fn categorical_x_count(&self, _plot: &Plot) -> usize {
        0
    }

    /// Tallest value on the y axis across the plot collection
    fn categorical_y_max(&self, _plots: &[Plot]) -> f64 {
        0.0
    }

    /// Fold one plot into the scatter x accumulator
    fn x_zoom(&self, acc: AxisRange, _plot: &Plot) -> AxisRange {
        acc
    }

    /// Fold one plot into the scatter y accumulator
    fn y_zoom(&self, acc: AxisRange, _plot: &Plot) -> AxisRange {
        acc
    }

    /// Legend panels for the plot collection
    fn extract_legend(&self, _plots: &[Plot], _tab: TabId, _trellises: &[Trellises]) -> Vec<Legend> {
        Vec::new()
    }
}

/// Strategy with no plot-type knowledge
#[derive(Debug, Clone, Default)]
pub struct BaseChartUtils {
    config: ChartsConfig,
}

impl BaseChartUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for BaseChartUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }
}

// ============================================================================
// REGIME DISPATCH
// ============================================================================

/// Shared zoom computation, keyed purely on the trellis design
pub fn regime_zoom_ranges<U: PlotUtils + ?Sized>(
    utils: &U,
    plots: &[Plot],
    design: TrellisDesign,
    tab: TabId,
) -> ZoomRanges {
    let ranges = match design {
        TrellisDesign::ContinuousOverTime => {
            ZoomRanges::new(continuous_x_range(utils, plots), AxisRange::PERCENT)
        }
        TrellisDesign::CategoricalCountsAndPercentages => {
            let count = plots
                .iter()
                .filter(|p| p.has_data())
                .map(|p| utils.categorical_x_count(p))
                .max()
                .unwrap_or(0);
            let y_max = utils.categorical_y_max(plots);
            ZoomRanges::new(AxisRange::categorical(count), AxisRange::new(0.0, y_max))
        }
        TrellisDesign::VariableYConstX => scatter_ranges(utils, plots, tab),
        TrellisDesign::CategoricalOverTime
        | TrellisDesign::VariableYVariableX
        | TrellisDesign::NoAxis => ZoomRanges::percent(),
    };

    tracing::debug!("Zoom ranges for {:?} on {:?}: {:?}", design, tab, ranges);
    ranges
}

/// Continuous x over all plots with data, `{0, 0}` when there is none
pub fn continuous_x_range<U: PlotUtils + ?Sized>(utils: &U, plots: &[Plot]) -> AxisRange {
    let acc = plots
        .iter()
        .filter(|p| p.has_data())
        .fold(AxisRange::SENTINEL, |acc, p| utils.continuous_x_zoom(acc, p));

    if acc.is_sentinel() {
        AxisRange::ZERO
    } else {
        utils.finish_continuous_x(acc)
    }
}

fn scatter_ranges<U: PlotUtils + ?Sized>(utils: &U, plots: &[Plot], tab: TabId) -> ZoomRanges {
    let with_data = || plots.iter().filter(|p| p.has_data());
    let padding = utils.config().degenerate_padding;

    let x = with_data().fold(AxisRange::SENTINEL, |acc, p| utils.x_zoom(acc, p));
    let y = with_data().fold(AxisRange::SENTINEL, |acc, p| utils.y_zoom(acc, p));

    let finish = |range: AxisRange| {
        if range.is_sentinel() {
            AxisRange::ZERO
        } else {
            range.pad_degenerate(padding)
        }
    };
    let (mut x, mut y) = (finish(x), finish(y));

    if tab.is_hys_law() {
        let extent = utils.config().hys_law_min_extent;
        x = AxisRange::new(0.0, x.max.max(extent));
        y = AxisRange::new(0.0, y.max.max(extent));
    }

    ZoomRanges::new(x, y)
}

// ============================================================================
// LEGEND HELPERS
// ============================================================================

/// Legend title from the series dimensions, `", "`-joined
pub fn series_legend_title(trellises: &[Trellises], tab: TabId) -> Option<String> {
    let names: Vec<String> = series_trellises(trellises)
        .map(|t| trellis_display_name(&t.trellised_by, tab).into_owned())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// `trellisedBy` of the first series dimension
pub fn series_dimension(trellises: &[Trellises]) -> Option<&str> {
    series_trellises(trellises)
        .next()
        .map(|t| t.trellised_by.as_str())
}

/// Circle entry for a named, optionally coloured series
pub fn series_entry(name: Option<&str>, color: Option<&str>) -> LegendEntry {
    LegendEntry::circle(series_name(name), color.unwrap_or(colors::DEFAULT_SERIES))
}

/// One legend from series entries: de-duplicated, interval-sorted for numeric
/// groupings and optionally reversed for severity groupings
pub fn series_legend(
    entries: Vec<LegendEntry>,
    tab: TabId,
    trellises: &[Trellises],
    reverse_severity: bool,
) -> Vec<Legend> {
    let dimension = series_dimension(trellises).unwrap_or_default();

    let mut entries = sort_intervals(dedup_entries(entries), dimension);
    if reverse_severity && is_severity_dimension(dimension) {
        entries.reverse();
    }

    if entries.is_empty() {
        return Vec::new();
    }
    vec![Legend::new(series_legend_title(trellises, tab), entries)]
}

/// Round to two decimals
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{PlotType, TrellisCategory};

    fn series(trellised_by: &[&str]) -> Vec<Trellises> {
        trellised_by
            .iter()
            .map(|t| Trellises::new(TrellisCategory::NonMandatorySeries, *t, ["a", "b"]))
            .chain([Trellises::new(TrellisCategory::MandatoryTrellis, "MEASUREMENT", ["ALT"])])
            .collect()
    }

    #[test]
    fn test_base_fixed_regimes() {
        let base = BaseChartUtils::default();
        let plots = vec![Plot::new(PlotType::Unknown)];

        for design in [
            TrellisDesign::CategoricalOverTime,
            TrellisDesign::VariableYVariableX,
            TrellisDesign::NoAxis,
        ] {
            assert_eq!(
                base.calculate_zoom_ranges(&plots, design, TabId::Other),
                ZoomRanges::percent()
            );
        }
    }

    #[test]
    fn test_base_without_data() {
        let base = BaseChartUtils::default();
        let plots = vec![Plot::new(PlotType::Unknown)];

        let continuous =
            base.calculate_zoom_ranges(&plots, TrellisDesign::ContinuousOverTime, TabId::Other);
        assert_eq!(continuous.x, AxisRange::ZERO);
        assert_eq!(continuous.y, AxisRange::PERCENT);

        let counts = base.calculate_zoom_ranges(
            &plots,
            TrellisDesign::CategoricalCountsAndPercentages,
            TabId::Other,
        );
        assert_eq!(counts, ZoomRanges::zero());
        assert!(base.extract_legend(&plots, TabId::Other, &[]).is_empty());
    }

    #[test]
    fn test_base_hys_law_floor_without_data() {
        let base = BaseChartUtils::default();
        let ranges = base.calculate_zoom_ranges(&[], TrellisDesign::VariableYConstX, TabId::LiverFunction);
        assert_eq!(ranges.x, AxisRange::new(0.0, 4.0));
        assert_eq!(ranges.y, AxisRange::new(0.0, 4.0));
    }

    #[test]
    fn test_series_title_joined() {
        let title = series_legend_title(&series(&["MAX_SEVERITY_GRADE", "OUTCOME"]), TabId::AesCountsBarchart);
        assert_eq!(
            title.as_deref(),
            Some("Maximum experienced severity grade, OUTCOME")
        );
        assert_eq!(series_legend_title(&series(&[]), TabId::Other), None);
    }

    #[test]
    fn test_series_legend_reverses_severity() {
        let entries = vec![
            LegendEntry::circle("Grade 1", "#1"),
            LegendEntry::circle("Grade 2", "#2"),
            LegendEntry::circle("Grade 1", "#1"),
        ];
        let legends = series_legend(entries, TabId::AesCountsBarchart, &series(&["MAX_SEVERITY_GRADE"]), true);
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Grade 2", "Grade 1"]);
    }

    #[test]
    fn test_series_legend_sorts_dose_intervals() {
        let entries = vec![
            LegendEntry::circle("total", "#3"),
            LegendEntry::circle("10-20", "#2"),
            LegendEntry::circle("(empty)", "#4"),
            LegendEntry::circle("0-10", "#1"),
        ];
        let legends = series_legend(entries, TabId::Other, &series(&["DOSE"]), false);
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["0-10", "10-20", "(empty)", "total"]);
        assert_eq!(legends[0].title.as_deref(), Some("Dose"));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(30.0 * 1.1), 33.0);
        assert_eq!(round2(7.0 * 1.1), 7.7);
    }
}
