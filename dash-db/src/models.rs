//! Query result model structs for dashboard and chart data.

use serde::{Deserialize, Serialize};

/// A single (date, value) row from a chart's source table.
///
/// `date` is the canonical "YYYY-MM-DD" key; the query layer trims any
/// time-of-day suffix the stored column carried.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValueRow {
    pub date: String,
    pub value: f64,
}

/// Dashboard metadata for the top-level page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardInfo {
    pub name: String,
    pub title: String,
    /// Preset token for the dashboard's initial date range,
    /// e.g. "LAST_30_DAYS".
    pub initial_range: String,
}

/// Chart listing entry for a dashboard, ordered by id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartListing {
    pub id: String,
    pub display_name: String,
}

/// The JSON object stored in the charts table's `date_field` column,
/// naming the source table and its date column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateField {
    pub column: String,
    pub table: String,
}
