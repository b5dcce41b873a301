//! Legends extracted from plot collections

mod common;

use common::{init_tracing, plot_from_json, severity_series};
use serde_json::json;
use trellis_charts::PlotUtilsRegistry;
use trellis_core::{LegendSymbol, PlotType, TabId, TrellisCategory, Trellises};

fn labels(legend: &trellis_core::Legend) -> Vec<&str> {
    legend.entries.iter().map(|e| e.label.as_str()).collect()
}

#[test]
fn test_identical_series_collapse() {
    init_tracing();
    let registry = PlotUtilsRegistry::default();
    let series = json!([
        {"name": "Grade 1", "color": "#1F77B4", "series": []},
        {"name": "Grade 3", "color": "#D62728", "series": []},
        {"name": "Grade 2", "color": "#FF7F0E", "series": []}
    ]);
    let plots = vec![
        plot_from_json(PlotType::StackedBarPlot, "Placebo", series.clone()),
        plot_from_json(PlotType::StackedBarPlot, "Drug", series),
    ];

    let legends = registry.extract_legend(&plots, TabId::AesCountsBarchart, &severity_series());
    assert_eq!(legends.len(), 1);
    assert_eq!(labels(&legends[0]), vec!["Grade 2", "Grade 3", "Grade 1"]);
}

#[test]
fn test_interval_series_ordered() {
    let registry = PlotUtilsRegistry::default();
    let plots = vec![plot_from_json(
        PlotType::GroupedBarPlot,
        "Placebo",
        json!([
            {"name": "total", "series": []},
            {"name": ">=100", "series": []},
            {"name": null, "series": []},
            {"name": "50-100", "series": []},
            {"name": "0-50", "series": []}
        ]),
    )];
    let trellises = vec![Trellises::new(
        TrellisCategory::NonMandatorySeries,
        "WEIGHT",
        ["0-50", "50-100", ">=100"],
    )];

    let legends = registry.extract_legend(&plots, TabId::PopulationBarchart, &trellises);
    assert_eq!(legends[0].title.as_deref(), Some("Weight"));
    assert_eq!(labels(&legends[0]), vec!["0-50", "50-100", ">=100", "All", "total"]);
}

#[test]
fn test_therapy_timeline_legends() {
    let registry = PlotUtilsRegistry::default();
    let plots = vec![plot_from_json(
        PlotType::ColumnRange,
        "Placebo",
        json!({
            "categories": ["S-1"],
            "ranges": [
                {"x": "S-1", "low": 0, "high": 40, "name": "Summary", "color": "#999"},
                {"x": "S-1", "low": 0, "high": 20, "name": "5 mg", "color": "#123",
                 "therapy": "Carboplatin", "therapyColor": "#ABC"}
            ],
            "markers": [{"x": "S-1", "y": 41, "kind": "PROGRESSION"}]
        }),
    )];

    let legends = registry.extract_legend(&plots, TabId::TumourTherapyTimeline, &[]);
    assert_eq!(legends.len(), 3);
    assert_eq!(labels(&legends[0]), vec!["Summary", "5 mg"]);
    assert_eq!(legends[1].entries[0].color, "#ABC");
    assert_eq!(legends[1].entries[0].symbol, LegendSymbol::Square);
    assert_eq!(
        labels(&legends[2]),
        vec![
            "Death",
            "Treatment discontinuation",
            "Disease progression",
            "Ongoing treatment"
        ]
    );
}

#[test]
fn test_box_plots_have_no_legend() {
    let registry = PlotUtilsRegistry::default();
    let plots = vec![plot_from_json(
        PlotType::BoxPlot,
        "Placebo",
        json!([{"x": "1", "xrank": 1, "eventCount": 1, "subjectCount": 1}]),
    )];
    assert!(registry
        .extract_legend(&plots, TabId::LabBoxplot, &severity_series())
        .is_empty());
}
