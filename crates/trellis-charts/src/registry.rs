//! Factory selecting the zoom/legend strategy of a plot type

use crate::utils::*;
use crate::ChartsConfig;
use std::collections::HashMap;
use trellis_core::{Legend, Plot, PlotType, TabId, TrellisDesign, Trellises, ZoomRanges};

/// Plot type to strategy table with a permissive fallback.
///
/// Built once and shared; strategies hold only their configuration.
pub struct PlotUtilsRegistry {
    utils: HashMap<PlotType, Box<dyn PlotUtils>>,
    fallback: BaseChartUtils,
}

impl PlotUtilsRegistry {
    pub fn new(config: ChartsConfig) -> Self {
        let mut utils: HashMap<PlotType, Box<dyn PlotUtils>> = HashMap::new();
        utils.insert(PlotType::BoxPlot, Box::new(BoxPlotUtils::new(config)));
        utils.insert(PlotType::StackedBarPlot, Box::new(StackedBarPlotUtils::new(config)));
        utils.insert(PlotType::GroupedBarPlot, Box::new(GroupedBarPlotUtils::new(config)));
        utils.insert(PlotType::LinePlot, Box::new(LinePlotUtils::new(config)));
        utils.insert(PlotType::RangePlot, Box::new(RangePlotUtils::new(config)));
        utils.insert(PlotType::JoinedRangePlot, Box::new(RangePlotUtils::new(config)));
        utils.insert(PlotType::ScatterPlot, Box::new(ScatterPlotUtils::new(config)));
        utils.insert(PlotType::BarLinePlot, Box::new(BarLinePlotUtils::new(config)));
        utils.insert(PlotType::SimpleLinePlot, Box::new(SimpleLinePlotUtils::new(config)));
        utils.insert(PlotType::Heatmap, Box::new(HeatmapPlotUtils::new(config)));
        utils.insert(PlotType::Waterfall, Box::new(WaterfallPlotUtils::new(config)));
        utils.insert(PlotType::ColumnRange, Box::new(ColumnRangePlotUtils::new(config)));
        utils.insert(PlotType::ChordDiagram, Box::new(ChordPlotUtils::new(config)));

        Self {
            utils,
            fallback: BaseChartUtils::new(config),
        }
    }

    /// Strategy for a plot type; unregistered types get the base strategy
    pub fn get(&self, plot_type: PlotType) -> &dyn PlotUtils {
        match self.utils.get(&plot_type) {
            Some(utils) => utils.as_ref(),
            None => {
                tracing::warn!("No plot utils registered for {}, using base strategy", plot_type);
                &self.fallback
            }
        }
    }

    /// Strategy for a plot collection, chosen by its first plot
    pub fn for_plot(&self, plot: Option<&Plot>) -> &dyn PlotUtils {
        match plot {
            Some(plot) => self.get(plot.plot_type),
            None => {
                tracing::warn!("No plot to pick a strategy from, using base strategy");
                &self.fallback
            }
        }
    }

    pub fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        self.for_plot(plots.first())
            .calculate_zoom_ranges(plots, design, tab)
    }

    pub fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        self.for_plot(plots.first())
            .extract_legend(plots, tab, trellises)
    }

    pub fn config(&self) -> &ChartsConfig {
        self.fallback.config()
    }
}

impl Default for PlotUtilsRegistry {
    fn default() -> Self {
        Self::new(ChartsConfig::default())
    }
}
