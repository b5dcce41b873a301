//! Zoom ranges consumed by the slider components

use serde::{Deserialize, Serialize};

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const ZERO: AxisRange = AxisRange { min: 0.0, max: 0.0 };

    /// Percentage axis, filled in later by the axis components
    pub const PERCENT: AxisRange = AxisRange {
        min: 0.0,
        max: 100.0,
    };

    /// Fold seed: any real value narrows it
    pub const SENTINEL: AxisRange = AxisRange {
        min: f64::MAX,
        max: f64::MIN,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Zero-based index range over `count` ordered categories
    pub fn categorical(count: usize) -> Self {
        Self::new(0.0, count.saturating_sub(1) as f64)
    }

    /// Still the fold seed (nothing was included)
    pub fn is_sentinel(&self) -> bool {
        self.min > self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Widen to include a value
    pub fn include(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn union(self, other: AxisRange) -> Self {
        if other.is_sentinel() {
            return self;
        }
        self.include(other.min).include(other.max)
    }

    /// Symmetric padding on both ends
    pub fn pad(self, amount: f64) -> Self {
        Self::new(self.min - amount, self.max + amount)
    }

    /// Pad only a zero-width range
    pub fn pad_degenerate(self, amount: f64) -> Self {
        if self.is_degenerate() { self.pad(amount) } else { self }
    }

    /// Sentinel collapses to `{0, 0}`
    pub fn or_zero(self) -> Self {
        if self.is_sentinel() { Self::ZERO } else { self }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::ZERO
    }
}

/// `{x:{min,max}, y:{min,max}}` zoom window of a plot collection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomRanges {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl ZoomRanges {
    pub const fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }

    /// Both axes on the percentage scale
    pub const fn percent() -> Self {
        Self::new(AxisRange::PERCENT, AxisRange::PERCENT)
    }

    pub const fn zero() -> Self {
        Self::new(AxisRange::ZERO, AxisRange::ZERO)
    }
}
