//! Chord diagram: no axes, one legend of nodes

use super::{series_legend_title, PlotUtils};
use crate::ChartsConfig;
use std::collections::BTreeSet;
use trellis_core::{colors, Legend, LegendEntry, Plot, TabId, TrellisDesign, Trellises, ZoomRanges};

pub const ADVERSE_EVENT_TITLE: &str = "Adverse event";

#[derive(Debug, Clone, Default)]
pub struct ChordPlotUtils {
    config: ChartsConfig,
}

impl ChordPlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }
}

impl PlotUtils for ChordPlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    fn calculate_zoom_ranges(&self, _plots: &[Plot], _design: TrellisDesign, _tab: TabId) -> ZoomRanges {
        ZoomRanges::percent()
    }

    /// Distinct node names, sorted, coloured by palette position
    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let nodes: BTreeSet<&str> = plots
            .iter()
            .filter_map(Plot::chord_links)
            .flatten()
            .flat_map(|l| [l.from.as_str(), l.to.as_str()])
            .collect();
        if nodes.is_empty() {
            return Vec::new();
        }

        let entries = nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| LegendEntry::circle(node, colors::palette(i)))
            .collect();

        let title = series_legend_title(trellises, tab).or_else(|| {
            (tab == TabId::AesChordDiagram).then(|| ADVERSE_EVENT_TITLE.to_string())
        });
        vec![Legend::new(title, entries)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{ChordLink, PlotData, PlotType};

    fn chord() -> Plot {
        Plot::new(PlotType::ChordDiagram).with_data(PlotData::Chord(vec![
            ChordLink::new("Nausea", "Headache", 3.0),
            ChordLink::new("Headache", "Fatigue", 1.0),
        ]))
    }

    #[test]
    fn test_always_percent() {
        let ranges = ChordPlotUtils::default().calculate_zoom_ranges(
            &[chord()],
            TrellisDesign::CategoricalCountsAndPercentages,
            TabId::AesChordDiagram,
        );
        assert_eq!(ranges, ZoomRanges::percent());
    }

    #[test]
    fn test_node_legend() {
        let legends = ChordPlotUtils::default().extract_legend(&[chord(), chord()], TabId::AesChordDiagram, &[]);
        assert_eq!(legends[0].title.as_deref(), Some(ADVERSE_EVENT_TITLE));
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Fatigue", "Headache", "Nausea"]);
        assert_eq!(legends[0].entries[0].color, colors::palette(0));
    }
}
