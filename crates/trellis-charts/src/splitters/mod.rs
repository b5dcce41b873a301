//! # splitters
//!
//! Turn server-shaped aggregates into chart-ready series.
//! One splitter per chart shape; all share the [`ServerDataSplitter`] contract.

mod box_plot;
mod grouped_bar;
mod line;
mod range;

pub use box_plot::*;
pub use grouped_bar::*;
pub use line::*;
pub use range::*;

// ============================================================================
// STRATEGY PATTERN: Server Data Splitter
// ============================================================================

/// Strategy trait for splitting raw server records into chart series.
///
/// Implementations are pure: the same input always yields equal output.
pub trait ServerDataSplitter: Send + Sync {
    type Entry;
    type Output;

    /// `categorical` selects index positions on the x axis instead of parsed values
    fn split_server_data(&self, entries: &[Self::Entry], categorical: bool) -> Self::Output;
}

/// Parse a category label as a continuous x value
pub(crate) fn parse_x(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Stable sort by a float rank
pub(crate) fn sort_by_rank<T>(items: &mut [T], rank: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| rank(a).total_cmp(&rank(b)));
}
