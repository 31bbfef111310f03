use std::fmt;

/// Errors raised synchronously by the aggregation engine.
///
/// Fetch failures are the backing store's concern and never appear here;
/// "no raw data yet" is a not-ready state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed input from the caller, e.g. a reversed date range.
    InvalidArgument(String),
    /// A chart configuration is missing a required field; aggregation
    /// must not proceed for that chart.
    IncompleteConfig(&'static str),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            EngineError::IncompleteConfig(field) => {
                write!(f, "chart configuration missing required field `{}`", field)
            }
        }
    }
}

impl std::error::Error for EngineError {}
