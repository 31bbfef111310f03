use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Which visual a chart renders as. The engine only carries this through
/// to the presentation layer; bucketing is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn from_token(token: &str) -> Option<ChartKind> {
        match token.trim().to_ascii_lowercase().as_str() {
            "line" => Some(ChartKind::Line),
            "bar" => Some(ChartKind::Bar),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

/// Configuration row for a single chart, fetched once per chart instance
/// and immutable thereafter.
///
/// `table` and `date_column` identify what the backing store fetched;
/// `value_expression` is the column (or SQL expression) producing the
/// numeric value per row; `display_name` labels the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub id: String,
    pub display_name: String,
    pub value_expression: String,
    pub date_column: String,
    pub table: String,
    pub kind: ChartKind,
}

impl ChartConfig {
    /// Reject configurations that cannot be aggregated.
    ///
    /// A chart row missing its table or date column is surfaced to the
    /// presentation layer as "chart unavailable" rather than producing an
    /// empty series.
    pub fn ensure_complete(&self) -> Result<(), EngineError> {
        if self.table.trim().is_empty() {
            return Err(EngineError::IncompleteConfig("table"));
        }
        if self.date_column.trim().is_empty() {
            return Err(EngineError::IncompleteConfig("date_column"));
        }
        if self.value_expression.trim().is_empty() {
            return Err(EngineError::IncompleteConfig("value_expression"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChartConfig {
        ChartConfig {
            id: "signups-daily".to_string(),
            display_name: "Signups".to_string(),
            value_expression: "count".to_string(),
            date_column: "created_at".to_string(),
            table: "signups".to_string(),
            kind: ChartKind::Line,
        }
    }

    #[test]
    fn test_complete_config_passes() {
        assert!(config().ensure_complete().is_ok());
    }

    #[test]
    fn test_missing_table_rejected() {
        let mut c = config();
        c.table = String::new();
        assert_eq!(
            c.ensure_complete(),
            Err(EngineError::IncompleteConfig("table"))
        );
    }

    #[test]
    fn test_missing_date_column_rejected() {
        let mut c = config();
        c.date_column = "  ".to_string();
        assert_eq!(
            c.ensure_complete(),
            Err(EngineError::IncompleteConfig("date_column"))
        );
    }

    #[test]
    fn test_kind_tokens() {
        assert_eq!(ChartKind::from_token("line"), Some(ChartKind::Line));
        assert_eq!(ChartKind::from_token("BAR"), Some(ChartKind::Bar));
        assert_eq!(ChartKind::from_token("pie"), None);
    }
}
