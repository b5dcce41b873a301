//! # trellis-state
//!
//! Trellis page state for the clinical trellising dashboard.
//! Enumerates trellis option combinations, slices them into pages of empty
//! plots, picks the initial selection of a tab and merges fetched data back.

pub mod initial;
pub mod pagination;
pub mod plots;

pub use initial::*;
pub use pagination::*;
pub use plots::*;

use serde::{Deserialize, Serialize};
use trellis_core::{Result, TrellisError};

/// Configuration constants
pub const DEFAULT_PAGE_LIMIT: usize = 10;
pub const FIRST_OFFSET: usize = 1;

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// Page window over the combination rows: `limit` plots starting at the
/// 1-based row `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: FIRST_OFFSET,
        }
    }
}

impl PaginationConfig {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Window of the 1-based `page`
    pub fn page(self, page: usize) -> Self {
        let offset = page.saturating_sub(1) * self.limit + FIRST_OFFSET;
        self.offset(offset)
    }

    /// 1-based page the window starts on
    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            return FIRST_OFFSET;
        }
        self.offset.saturating_sub(1) / self.limit + 1
    }

    /// Read from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(TrellisError::InvalidConfig("limit must be positive".into()));
        }
        if self.offset == 0 {
            return Err(TrellisError::InvalidConfig(
                "offset is 1-based and must be positive".into(),
            ));
        }
        Ok(())
    }
}
