//! Error types for the data-fetch boundary and configuration loading

use crate::PlotType;
use thiserror::Error;

/// Result type alias using [`TrellisError`].
pub type Result<T> = std::result::Result<T, TrellisError>;

/// Errors raised where raw JSON enters the trellising core.
///
/// The transformations themselves never fail; these only surface when a
/// payload or a configuration document cannot be read at all.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Server payload does not have the shape the plot type expects
    #[error("invalid {plot_type} payload: {source}")]
    Payload {
        plot_type: PlotType,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration document could not be parsed
    #[error("invalid configuration document: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrellisError::InvalidConfig("limit must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: limit must be positive");
    }

    #[test]
    fn test_payload_error_names_plot_type() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = TrellisError::Payload {
            plot_type: PlotType::BoxPlot,
            source,
        };
        assert!(err.to_string().starts_with("invalid BOX_PLOT payload"));
    }
}
