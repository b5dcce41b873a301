//! # trellis-core
//!
//! Core domain types for the clinical trellising dashboard.
//! Plots, trellis options, server payload records, zoom ranges and legends
//! are all plain value types; every transformation over them is pure.

pub mod error;
pub mod legend;
pub mod plot;
pub mod records;
pub mod sorting;
pub mod trellis;
pub mod zoom;

pub use error::*;
pub use legend::*;
pub use plot::*;
pub use records::*;
pub use sorting::*;
pub use trellis::*;
pub use zoom::*;

// ============================================================================
// TEXT NORMALIZATION
// ============================================================================

/// Display value used for missing categories
pub const EMPTY_LABEL: &str = "(Empty)";

/// Default series name when the server sends none
pub const ALL_SERIES: &str = "All";

/// Is this display value one of the "nothing here" spellings?
pub fn is_empty_label(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("(empty)")
}

/// Canonicalize an optional display value, mapping every empty spelling to [`EMPTY_LABEL`]
pub fn normalize_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !is_empty_label(v) => v.to_string(),
        _ => EMPTY_LABEL.to_string(),
    }
}

/// Series name with the "All" fallback
pub fn series_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => ALL_SERIES.to_string(),
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const DEFAULT_SERIES: &str = "#3987B7";
    pub const THERAPY: &str = "#A0A0A0";
    pub const BLACK: &str = "#000000";
    pub const DEATH: &str = "#000000";
    pub const DISCONTINUATION: &str = "#E32D20";
    pub const PROGRESSION: &str = "#F39C12";
    pub const ONGOING: &str = "#7F7F7F";

    /// Fixed categorical palette, cycled by index
    pub const PALETTE: [&str; 12] = [
        "#3987B7", "#F5A623", "#7ED321", "#D0021B", "#9013FE", "#50E3C2",
        "#B8E986", "#4A4A4A", "#BD10E0", "#8B572A", "#417505", "#F8E71C",
    ];

    /// Deterministic palette color for a position
    pub fn palette(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label(None), EMPTY_LABEL);
        assert_eq!(normalize_label(Some("")), EMPTY_LABEL);
        assert_eq!(normalize_label(Some("null")), EMPTY_LABEL);
        assert_eq!(normalize_label(Some("(empty)")), EMPTY_LABEL);
        assert_eq!(normalize_label(Some("Placebo")), "Placebo");
    }

    #[test]
    fn test_series_name_fallback() {
        assert_eq!(series_name(None), "All");
        assert_eq!(series_name(Some("  ")), "All");
        assert_eq!(series_name(Some("Grade 1")), "Grade 1");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(colors::palette(0), colors::palette(colors::PALETTE.len()));
        assert_ne!(colors::palette(0), colors::palette(1));
    }
}
