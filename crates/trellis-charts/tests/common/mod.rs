#![allow(dead_code)]

//! Shared fixtures for the chart scenario tests

use serde_json::json;
use trellis_core::{Plot, PlotType, TrellisCategory, TrellisOption, Trellises};

/// Route `tracing` output to the test harness; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn plot_from_json(plot_type: PlotType, option: &str, data: serde_json::Value) -> Plot {
    let plot: Plot = serde_json::from_value(json!({
        "plotType": plot_type,
        "trellising": [{
            "category": "MANDATORY_TRELLIS",
            "trellisedBy": "ARM",
            "trellisOption": option,
        }],
        "data": data,
    }))
    .expect("fixture plot parses");
    plot
}

pub fn arm_option(option: &str) -> TrellisOption {
    TrellisOption::new(TrellisCategory::MandatoryTrellis, "ARM", option)
}

pub fn severity_series() -> Vec<Trellises> {
    vec![Trellises::new(
        TrellisCategory::NonMandatorySeries,
        "MAX_SEVERITY_GRADE",
        ["Grade 1", "Grade 2", "Grade 3"],
    )]
}
