//! Initial trellis selection of a tab

use trellis_core::{TabId, TrellisCategory, Trellises};

/// Preferred series dimensions per tab, tried in order
pub const DEFAULT_SERIES_RULES: &[(TabId, &[&str])] = &[
    (TabId::AesCountsBarchart, &["MAX_SEVERITY_GRADE", "SEVERITY_GRADE"]),
    (TabId::AesOverTime, &["MAX_SEVERITY_GRADE", "SEVERITY_GRADE"]),
    (TabId::AesChordDiagram, &["SEVERITY_GRADE"]),
    (TabId::CiEventCounts, &["CI_EVENT_TYPE", "ARM"]),
    (TabId::CiEventOverTime, &["CI_EVENT_TYPE", "ARM"]),
    (TabId::CerebrovascularCounts, &["EVENT_TYPE", "ARM"]),
    (TabId::CerebrovascularEventOverTime, &["EVENT_TYPE", "ARM"]),
    (TabId::CvotEndpointsCounts, &["CATEGORY_1", "ARM"]),
    (TabId::CvotEndpointsOverTime, &["CATEGORY_1", "ARM"]),
    (TabId::ConmedsBarchart, &["ARM"]),
    (TabId::CtdnaPlot, &["MUTATION"]),
    (TabId::ExacerbationsCounts, &["EXACERBATION_CLASSIFICATION", "ARM"]),
    (TabId::ExacerbationsOverTime, &["EXACERBATION_CLASSIFICATION", "ARM"]),
    (TabId::LabLineplot, &["ARM"]),
    (TabId::LiverFunction, &["ARM"]),
    (TabId::LungFunctionLineplot, &["ARM"]),
    (TabId::EcgLineplot, &["ARM"]),
    (TabId::VitalsLineplot, &["ARM"]),
    (TabId::PopulationBarchart, &["ARM", "SEX"]),
    (TabId::RenalCkdBarchart, &["ARM"]),
    (TabId::TumourResponseWaterfallPlot, &["BEST_RESPONSE"]),
    (TabId::TumourLineplot, &["BEST_RESPONSE"]),
    (TabId::TumourTherapyTimeline, &["BEST_RESPONSE"]),
];

/// Picks what a tab shows before the user touches the trellis controls
#[derive(Debug, Clone, Copy)]
pub struct InitialTrellisService {
    rules: &'static [(TabId, &'static [&'static str])],
}

impl Default for InitialTrellisService {
    fn default() -> Self {
        Self::new(DEFAULT_SERIES_RULES)
    }
}

impl InitialTrellisService {
    pub fn new(rules: &'static [(TabId, &'static [&'static str])]) -> Self {
        Self { rules }
    }

    /// Preferred series names of a tab, empty when the tab has no rule
    pub fn preferences(&self, tab: TabId) -> &'static [&'static str] {
        self.rules
            .iter()
            .find(|(rule_tab, _)| *rule_tab == tab)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// First preferred series dimension the selection offers
    pub fn default_series<'a>(&self, tab: TabId, trellises: &'a [Trellises]) -> Option<&'a Trellises> {
        self.preferences(tab).iter().find_map(|name| {
            trellises
                .iter()
                .find(|t| t.is_series() && t.trellised_by == *name)
        })
    }

    /// Plot dimensions of the initial selection: every mandatory trellis with
    /// all its options and the first option of every higher-level dimension
    pub fn default_trellising(&self, trellises: &[Trellises]) -> Vec<Trellises> {
        trellises
            .iter()
            .filter_map(|t| match t.category {
                TrellisCategory::MandatoryTrellis => Some(t.clone()),
                TrellisCategory::MandatoryHigherLevel => Some(Trellises::new(
                    t.category,
                    t.trellised_by.clone(),
                    t.trellis_options.first().cloned(),
                )),
                TrellisCategory::NonMandatoryTrellis | TrellisCategory::NonMandatorySeries => None,
            })
            .collect()
    }

    /// Whole initial selection: default trellising plus the default series
    pub fn initial_trellis(&self, tab: TabId, trellises: &[Trellises]) -> Vec<Trellises> {
        let mut selection = self.default_trellising(trellises);
        match self.default_series(tab, trellises) {
            Some(series) => selection.push(series.clone()),
            None => tracing::debug!("No default series for {:?}", tab),
        }
        selection
    }

    /// Nothing explicitly picked out of a non-empty option set means everything
    pub fn is_all<T>(current: &[T], base: &[T]) -> bool {
        current.is_empty() && !base.is_empty()
    }
}
