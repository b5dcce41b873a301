//! Tunables shared by the zoom strategies

use serde::{Deserialize, Serialize};
use trellis_core::{Result, TrellisError};

/// Padding, headroom and floor constants of the zoom computations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartsConfig {
    /// Multiplier on the tallest grouped bar, leaves room for selection
    pub grouped_bar_headroom: f64,
    /// Half-width added around a zero-width continuous range
    pub degenerate_padding: f64,
    /// Half-width of one box on a continuous axis
    pub box_half_width: f64,
    /// Half-width around a box plot with a single x position
    pub box_single_point_half_width: f64,
    /// Lower bound of the upper end of both Hy's law axes
    pub hys_law_min_extent: f64,
    /// Waterfall y always covers `[-bound, bound]`
    pub waterfall_bound: f64,
    /// Log-axis floor for variant allele fractions
    pub ctdna_fraction_floor: f64,
    /// Log-axis floor for variant allele percentages
    pub ctdna_percent_floor: f64,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            grouped_bar_headroom: 1.1,
            degenerate_padding: 1.0,
            box_half_width: 0.5,
            box_single_point_half_width: 999.5,
            hys_law_min_extent: 4.0,
            waterfall_bound: 100.0,
            ctdna_fraction_floor: 0.001,
            ctdna_percent_floor: 0.1,
        }
    }
}

impl ChartsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grouped_bar_headroom(mut self, headroom: f64) -> Self {
        self.grouped_bar_headroom = headroom;
        self
    }

    pub fn degenerate_padding(mut self, padding: f64) -> Self {
        self.degenerate_padding = padding;
        self
    }

    pub fn waterfall_bound(mut self, bound: f64) -> Self {
        self.waterfall_bound = bound;
        self
    }

    /// Read from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.grouped_bar_headroom >= 1.0) {
            return Err(TrellisError::InvalidConfig(format!(
                "groupedBarHeadroom must be at least 1, got {}",
                self.grouped_bar_headroom
            )));
        }

        let extents = [
            ("degeneratePadding", self.degenerate_padding),
            ("boxHalfWidth", self.box_half_width),
            ("boxSinglePointHalfWidth", self.box_single_point_half_width),
            ("hysLawMinExtent", self.hys_law_min_extent),
            ("waterfallBound", self.waterfall_bound),
            ("ctdnaFractionFloor", self.ctdna_fraction_floor),
            ("ctdnaPercentFloor", self.ctdna_percent_floor),
        ];
        for (name, value) in extents {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TrellisError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
