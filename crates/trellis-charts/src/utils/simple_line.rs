//! Per-subject line zoom: tab-specific y floors over a continuous x

use super::{regime_zoom_ranges, series_legend_title, PlotUtils};
use crate::ChartsConfig;
use trellis_core::{
    colors, merge_legends, series_name, AxisRange, Legend, LegendEntry, LegendSymbol, Plot,
    SimpleLinePoint, TabId, TrellisDesign, Trellises, ZoomRanges,
};

#[derive(Debug, Clone, Default)]
pub struct SimpleLinePlotUtils {
    config: ChartsConfig,
}

impl SimpleLinePlotUtils {
    pub fn new(config: ChartsConfig) -> Self {
        Self { config }
    }

    /// Log-scale floor: percentages once any value passes 1, fractions otherwise
    fn ctdna_y(&self, y: AxisRange) -> AxisRange {
        let floor = if y.max > 1.0 {
            self.config.ctdna_percent_floor
        } else {
            self.config.ctdna_fraction_floor
        };
        let min = y.min.max(floor);
        AxisRange::new(min, y.max.max(min))
    }
}

fn points(plots: &[Plot]) -> impl Iterator<Item = &SimpleLinePoint> {
    plots
        .iter()
        .filter(|p| p.has_data())
        .filter_map(Plot::simple_lines)
        .flatten()
        .flat_map(|s| s.data.iter())
}

impl PlotUtils for SimpleLinePlotUtils {
    fn config(&self) -> &ChartsConfig {
        &self.config
    }

    /// Tab rules first: ctDNA and tumour lines keep their domain under any design
    fn calculate_zoom_ranges(&self, plots: &[Plot], design: TrellisDesign, tab: TabId) -> ZoomRanges {
        let tab_specific = matches!(tab, TabId::CtdnaPlot | TabId::TumourLineplot);
        let continuous = matches!(
            design,
            TrellisDesign::VariableYConstX | TrellisDesign::ContinuousOverTime
        );
        if !tab_specific && !continuous {
            return regime_zoom_ranges(self, plots, design, tab);
        }

        let x = points(plots).fold(AxisRange::SENTINEL, |acc, p| acc.include(p.x));
        if x.is_sentinel() {
            return ZoomRanges::zero();
        }
        let y = points(plots)
            .filter_map(|p| p.y)
            .fold(AxisRange::SENTINEL, AxisRange::include)
            .or_zero();

        let padding = self.config.degenerate_padding;
        let y = match tab {
            TabId::CtdnaPlot => self.ctdna_y(y),
            TabId::TumourLineplot => y.include(0.0),
            _ => y.pad_degenerate(padding),
        };

        let ranges = ZoomRanges::new(x.pad_degenerate(padding), y);
        tracing::debug!("Simple line zoom on {:?}: {:?}", tab, ranges);
        ranges
    }

    /// One legend per plot, merged by title
    fn extract_legend(&self, plots: &[Plot], tab: TabId, trellises: &[Trellises]) -> Vec<Legend> {
        let title = series_legend_title(trellises, tab);

        let legends = plots
            .iter()
            .filter_map(Plot::simple_lines)
            .map(|lines| {
                let entries = lines
                    .iter()
                    .map(|s| {
                        LegendEntry::new(
                            series_name(s.name.as_deref()),
                            s.color.as_deref().unwrap_or(colors::DEFAULT_SERIES),
                            LegendSymbol::Line,
                        )
                    })
                    .collect();
                Legend::new(title.clone(), entries)
            })
            .filter(|l| !l.is_empty())
            .collect();

        merge_legends(legends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{PlotData, PlotType, SimpleLineSeries, TrellisCategory};

    fn lines(name: &str, points: &[(f64, Option<f64>)]) -> Plot {
        let series = SimpleLineSeries {
            name: Some(name.into()),
            color: None,
            data: points.iter().map(|&(x, y)| SimpleLinePoint::new(x, y)).collect(),
        };
        Plot::new(PlotType::SimpleLinePlot).with_data(PlotData::SimpleLines(vec![series]))
    }

    fn zoom(plots: &[Plot], tab: TabId) -> ZoomRanges {
        SimpleLinePlotUtils::default().calculate_zoom_ranges(plots, TrellisDesign::VariableYConstX, tab)
    }

    #[test]
    fn test_ctdna_fraction_floor() {
        let ranges = zoom(&[lines("KRAS", &[(0.0, Some(0.0)), (28.0, Some(0.4))])], TabId::CtdnaPlot);
        assert_eq!(ranges.y, AxisRange::new(0.001, 0.4));
        assert_eq!(ranges.x, AxisRange::new(0.0, 28.0));
    }

    #[test]
    fn test_ctdna_percent_floor() {
        let ranges = zoom(&[lines("KRAS", &[(0.0, Some(0.05)), (28.0, Some(12.0))])], TabId::CtdnaPlot);
        assert_eq!(ranges.y, AxisRange::new(0.1, 12.0));
    }

    #[test]
    fn test_ctdna_floor_under_any_design() {
        let plots = vec![lines("KRAS", &[(0.0, Some(0.0)), (28.0, Some(0.4))])];
        for design in [
            TrellisDesign::VariableYVariableX,
            TrellisDesign::NoAxis,
            TrellisDesign::CategoricalOverTime,
        ] {
            let ranges =
                SimpleLinePlotUtils::default().calculate_zoom_ranges(&plots, design, TabId::CtdnaPlot);
            assert_eq!(ranges.y, AxisRange::new(0.001, 0.4), "{design:?}");
            assert_eq!(ranges.x, AxisRange::new(0.0, 28.0), "{design:?}");
        }
    }

    #[test]
    fn test_tumour_lines_include_zero_under_any_design() {
        let plots = vec![lines("S-1", &[(1.0, Some(5.0)), (2.0, Some(20.0))])];
        let ranges = SimpleLinePlotUtils::default().calculate_zoom_ranges(
            &plots,
            TrellisDesign::NoAxis,
            TabId::TumourLineplot,
        );
        assert_eq!(ranges.y, AxisRange::new(0.0, 20.0));
    }

    #[test]
    fn test_tumour_lines_include_zero() {
        let ranges = zoom(&[lines("S-1", &[(1.0, Some(-30.0)), (2.0, Some(-10.0))])], TabId::TumourLineplot);
        assert_eq!(ranges.y, AxisRange::new(-30.0, 0.0));
    }

    #[test]
    fn test_missing_y_ignored_and_no_data_zero() {
        let ranges = zoom(&[lines("S-1", &[(1.0, None), (3.0, Some(5.0))])], TabId::Other);
        assert_eq!(ranges.x, AxisRange::new(1.0, 3.0));
        assert_eq!(ranges.y, AxisRange::new(4.0, 6.0));

        assert_eq!(zoom(&[Plot::new(PlotType::SimpleLinePlot)], TabId::Other), ZoomRanges::zero());
    }

    #[test]
    fn test_legends_merged_across_plots() {
        let trellises = vec![Trellises::new(TrellisCategory::NonMandatorySeries, "MUTATION", ["KRAS"])];
        let plots = vec![
            lines("KRAS", &[(0.0, Some(1.0))]),
            lines("KRAS", &[(0.0, Some(2.0))]),
            lines("TP53", &[(0.0, Some(2.0))]),
        ];

        let legends = SimpleLinePlotUtils::default().extract_legend(&plots, TabId::CtdnaPlot, &trellises);
        assert_eq!(legends.len(), 1);
        assert_eq!(legends[0].title.as_deref(), Some("Gene and mutation"));
        let labels: Vec<_> = legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["KRAS", "TP53"]);
    }
}
