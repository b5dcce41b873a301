//! Trellis options, trellis designs and dashboard tabs

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// TRELLIS OPTIONS
// ============================================================================

/// Role a trellis dimension plays in the page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrellisCategory {
    MandatoryHigherLevel,
    MandatoryTrellis,
    NonMandatoryTrellis,
    NonMandatorySeries,
}

impl TrellisCategory {
    /// Series dimensions colour the data inside a plot instead of splitting plots
    pub fn is_series(&self) -> bool {
        matches!(self, Self::NonMandatorySeries)
    }
}

/// One concrete axis/series binding of a plot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrellisOption {
    pub category: TrellisCategory,
    pub trellised_by: String,
    pub trellis_option: String,
}

impl TrellisOption {
    pub fn new(
        category: TrellisCategory,
        trellised_by: impl Into<String>,
        trellis_option: impl Into<String>,
    ) -> Self {
        Self {
            category,
            trellised_by: trellised_by.into(),
            trellis_option: trellis_option.into(),
        }
    }
}

/// Full option set of one trellis dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trellises {
    pub category: TrellisCategory,
    pub trellised_by: String,
    #[serde(default)]
    pub trellis_options: Vec<String>,
}

impl Trellises {
    pub fn new<S: Into<String>>(
        category: TrellisCategory,
        trellised_by: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            category,
            trellised_by: trellised_by.into(),
            trellis_options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_series(&self) -> bool {
        self.category.is_series()
    }
}

/// Series dimensions among a trellis selection
pub fn series_trellises(trellises: &[Trellises]) -> impl Iterator<Item = &Trellises> {
    trellises.iter().filter(|t| t.is_series())
}

// ============================================================================
// TRELLIS DESIGN
// ============================================================================

/// Axis regime of a tab, drives zoom range computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrellisDesign {
    ContinuousOverTime,
    CategoricalOverTime,
    CategoricalCountsAndPercentages,
    VariableYConstX,
    VariableYVariableX,
    NoAxis,
}

// ============================================================================
// TABS
// ============================================================================

/// Dashboard tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TabId {
    AesCountsBarchart,
    AesOverTime,
    AesChordDiagram,
    CiEventCounts,
    CiEventOverTime,
    CerebrovascularCounts,
    CerebrovascularEventOverTime,
    CvotEndpointsCounts,
    CvotEndpointsOverTime,
    ConmedsBarchart,
    CtdnaPlot,
    ExacerbationsCounts,
    ExacerbationsOverTime,
    LabBoxplot,
    LabLineplot,
    LiverFunction,
    LungFunctionBoxplot,
    LungFunctionLineplot,
    EcgBoxplot,
    EcgLineplot,
    VitalsBoxplot,
    VitalsLineplot,
    PopulationBarchart,
    RenalCkdBarchart,
    RenalLabsBoxplot,
    TumourResponseWaterfallPlot,
    TumourLineplot,
    TumourTherapyTimeline,
    GenomicProfileHeatmap,
    #[serde(other)]
    Other,
}

impl TabId {
    /// Hy's law scatter: both axes anchored at zero with a 4x ULN floor
    pub fn is_hys_law(&self) -> bool {
        matches!(self, Self::LiverFunction)
    }

    pub fn is_adverse_events(&self) -> bool {
        matches!(
            self,
            Self::AesCountsBarchart | Self::AesOverTime | Self::AesChordDiagram
        )
    }
}

/// Legend/axis label for a trellis dimension name on a tab
pub fn trellis_display_name(trellised_by: &str, tab: TabId) -> Cow<'_, str> {
    let label = match (tab, trellised_by) {
        (t, "MAX_SEVERITY_GRADE") if t.is_adverse_events() => "Maximum experienced severity grade",
        (_, "MAX_SEVERITY_GRADE") => "Maximum severity grade",
        (_, "SEVERITY_GRADE") => "Severity grade",
        (TabId::ExacerbationsCounts | TabId::ExacerbationsOverTime, "EXACERBATION_CLASSIFICATION") => {
            "Exacerbation classification"
        }
        (TabId::TumourResponseWaterfallPlot, "BEST_RESPONSE") => "Best overall response",
        (TabId::CtdnaPlot, "MUTATION") => "Gene and mutation",
        (_, "ARM") => "Arm",
        (_, "DOSE") => "Dose",
        (_, "WEIGHT") => "Weight",
        _ => return Cow::Borrowed(trellised_by),
    };
    Cow::Borrowed(label)
}

/// Severity-style series stack bottom-up, so their legends read in reverse
pub fn is_severity_dimension(trellised_by: &str) -> bool {
    trellised_by.to_ascii_uppercase().contains("SEVERITY")
}
