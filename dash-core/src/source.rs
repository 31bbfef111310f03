use crate::chart::ChartConfig;
use chrono::NaiveDate;

/// Lookup of chart configuration rows by id.
pub trait ConfigSource {
    fn fetch_chart_config(&self, chart_id: &str) -> anyhow::Result<Option<ChartConfig>>;
}

/// Fetch of raw `(date, value)` rows for a chart's source table.
///
/// Implementations return rows with `date_column` between `from` and `to`
/// inclusive, ascending by date, at most one row per calendar day. Row
/// dates may carry a time-of-day suffix; consumers trim it down to the
/// calendar-day key.
pub trait SeriesSource {
    fn fetch_raw_series(
        &self,
        table: &str,
        date_column: &str,
        value_expression: &str,
        from: &NaiveDate,
        to: &NaiveDate,
    ) -> anyhow::Result<Vec<(String, f64)>>;
}
