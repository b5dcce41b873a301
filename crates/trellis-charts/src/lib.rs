//! # trellis-charts
//!
//! Chart preparation for the clinical trellising dashboard.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Server data splitting (box, bars, lines, ranges)
//! - Zoom range computation per plot type
//! - Legend extraction per plot type
//!
//! ## Modules
//!
//! - `splitters` - Server payloads to chart-ready series
//! - `utils` - Zoom range and legend strategies
//! - `registry` - Plot type to strategy factory
//! - `config` - Padding, headroom and floor tunables

pub mod config;
pub mod registry;
pub mod splitters;
pub mod utils;

pub use config::*;
pub use registry::*;
pub use splitters::*;
pub use utils::*;

// Re-export colors from trellis-core for convenience
pub use trellis_core::colors;
