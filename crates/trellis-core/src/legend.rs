//! Legend value types and de-duplication rules

use crate::sorting::Labelled;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Marker drawn next to a legend label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegendSymbol {
    Circle,
    Square,
    Line,
    Triangle,
    Diamond,
    Cross,
}

/// One row of a legend panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub symbol: LegendSymbol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>, symbol: LegendSymbol) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            symbol,
            class_name: None,
        }
    }

    pub fn circle(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(label, color, LegendSymbol::Circle)
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Labelled for LegendEntry {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Titled legend panel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(title: Option<String>, entries: Vec<LegendEntry>) -> Self {
        Self { title, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drop entries equal (field by field) to an earlier one
pub fn dedup_entries(entries: Vec<LegendEntry>) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

/// Keep the first entry per color
pub fn uniq_by_color(entries: Vec<LegendEntry>) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.color.clone()))
        .collect()
}

/// Keep the first entry per label
pub fn uniq_by_label(entries: Vec<LegendEntry>) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.label.clone()))
        .collect()
}

/// Collapse legends sharing a title into one, keeping first-seen order
pub fn merge_legends(legends: Vec<Legend>) -> Vec<Legend> {
    let mut merged: Vec<Legend> = Vec::new();

    for legend in legends {
        match merged.iter_mut().find(|m| m.title == legend.title) {
            Some(existing) => existing.entries.extend(legend.entries),
            None => merged.push(legend),
        }
    }

    merged
        .into_iter()
        .map(|l| Legend::new(l.title, uniq_by_label(l.entries)))
        .collect()
}
