//! Heatmap zoom over its two category axes

use super::{series_legend_title, PlotUtils};
use crate::ChartsConfig;
use trellis_core::{
    uniq_by_color, AxisRange, Legend, LegendEntry, LegendSymbol, Plot, TabId, TrellisDesign,
    Trellises, ZoomRanges,
};

#[derive(Debug, Clone, Default)]
pub struct HeatmapPlotUtils {
    config: ChartsConfig,
}

impl HeatmapPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for HeatmapPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        let data: Vec<_> = plots
            .iter()
            .filter(|p| p.has_data())
            .filter_map(Plot::heatmap)
            .collect();

        let x = data.iter().map(|d| d.x_categories.len()).max().unwrap_or(0);
        let y = data.iter().map(|d| d.y_categories.len()).max().unwrap_or(0);

        let ranges = ZoomRanges::new(AxisRange::categorical(x), AxisRange::categorical(y));
        tracing::debug!("Heatmap zoom for {:?} on {:?}: {:?}", design, tab, ranges);
        ranges
    }

    /// One entry per cell color; colors encode the value classes
    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let entries: Vec<LegendEntry> = plots
            .iter()
            .filter_map(Plot::heatmap)
            .flat_map(|d| d.entries.iter())
            .map(|e| LegendEntry::new(e.name.clone(), e.color.clone(), LegendSymbol::Square))
            .collect();

        let entries = uniq_by_color(entries);
        if entries.is_empty() {
            return Vec::new();
        }
        vec![Legend::new(series_legend_title(trellises, tab), entries)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{HeatmapData, HeatmapEntry, PlotData, PlotType};

    fn cell(x: usize, y: usize, name: &str, color: &str) -> HeatmapEntry {
        HeatmapEntry {
            x,
            y,
            value: None,
            name: name.into(),
            color: color.into(),
        }
    }

    fn heatmap() -> Plot {
        Plot::new(PlotType::Heatmap).with_data(PlotData::Heatmap(HeatmapData {
            x_categories: vec!["S-1".into(), "S-2".into(), "S-3".into()],
            y_categories: vec!["KRAS".into(), "TP53".into()],
            entries: vec![
                cell(0, 0, "Missense", "#F00"),
                cell(1, 0, "Missense", "#F00"),
                cell(2, 1, "Frameshift", "#00F"),
                cell(1, 1, "Missense variant", "#F00"),
            ],
        }))
    }

    #[test]
    fn test_category_axes() {
        let ranges = HeatmapPlotUtils::default().calculate_zoom_ranges(
            &[heatmap(), Plot::new(PlotType::Heatmap)],
            TrellisDesign::NoAxis,
            TabId::GenomicProfileHeatmap,
        );
        assert_eq!(ranges.x, AxisRange::new(0.0, 2.0));
        assert_eq!(ranges.y, AxisRange::new(0.0, 1.0));
    }

    #[test]
    fn test_legend_unique_by_color() {
        let legends =
            HeatmapPlotUtils::default().extract_legend(&[heatmap()], TabId::GenomicProfileHeatmap, &[]);
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Missense", "Frameshift"]);
    }
}
