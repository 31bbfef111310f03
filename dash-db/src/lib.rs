//! In-memory SQLite backing store for dashboard and chart data.
//!
//! This crate plays the role the hosted database played for the original
//! dashboard: it answers "chart configuration by id" and "raw rows for
//! table T between dates D1/D2". CSV fixtures are loaded into an
//! in-memory SQLite database and exposed through typed query methods; the
//! aggregation engine consumes them through the `dash_core::source`
//! traits.
//!
//! # Usage
//!
//! ```rust
//! use dash_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_dashboards("name,title,initial_range\nacme,Acme KPIs,LAST_30_DAYS\n").unwrap();
//! db.load_charts(concat!(
//!     "id,dashboard_name,display_name,value_expression,date_field,kind\n",
//!     "signups-daily,acme,Signups,count,\"{\"\"column\"\": \"\"created_at\"\", \"\"table\"\": \"\"signups\"\"}\",line\n",
//! )).unwrap();
//! db.load_series("signups", "created_at", "count", "2024-01-01,12\n2024-01-02,9\n").unwrap();
//!
//! let config = db.query_chart_config("signups-daily").unwrap().unwrap();
//! let rows = db.query_raw_rows("signups", "created_at", "count", "2024-01-01", "2024-01-31").unwrap();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(config.display_name, "Signups");
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use chrono::NaiveDate;
use dash_core::chart::ChartConfig;
use dash_core::source::{ConfigSource, SeriesSource};
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding dashboards, chart configurations and
/// the raw series tables the charts point at.
///
/// Cheaply cloneable via `Rc`; the engine and the command layer share one
/// connection in a single-threaded process.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the metadata schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods to
    /// populate it from CSV fixtures.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl ConfigSource for Database {
    fn fetch_chart_config(&self, chart_id: &str) -> anyhow::Result<Option<ChartConfig>> {
        self.query_chart_config(chart_id)
    }
}

impl SeriesSource for Database {
    fn fetch_raw_series(
        &self,
        table: &str,
        date_column: &str,
        value_expression: &str,
        from: &NaiveDate,
        to: &NaiveDate,
    ) -> anyhow::Result<Vec<(String, f64)>> {
        let rows = self.query_raw_rows(
            table,
            date_column,
            value_expression,
            &dash_utils::dates::date_key(from),
            &dash_utils::dates::date_key(to),
        )?;
        Ok(rows.into_iter().map(|r| (r.date, r.value)).collect())
    }
}

/// Table and column names coming out of chart rows are spliced into SQL
/// text, so they are restricted to plain identifiers.
pub(crate) fn ensure_identifier(name: &str) -> anyhow::Result<()> {
    let mut chars = name.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        anyhow::bail!("invalid SQL identifier in chart configuration: {:?}", name)
    }
}
