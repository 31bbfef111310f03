//! CSV loaders for populating the in-memory store.
//!
//! Each loader parses CSV data from a string slice and inserts rows into
//! the corresponding table with `INSERT OR REPLACE` semantics. Malformed
//! rows are skipped and counted rather than failing the whole load.
//!
//! # CSV Formats
//!
//! - **Dashboards** (has headers): `name,title,initial_range`
//! - **Charts** (has headers):
//!   `id,dashboard_name,display_name,value_expression,date_field,kind`
//!   where `date_field` is a JSON object `{"column": ..., "table": ...}`
//! - **Series** (no headers): `date(YYYY-MM-DD),value`

use crate::models::DateField;
use crate::{ensure_identifier, Database};
use rusqlite::params;

impl Database {
    /// Load dashboard metadata from CSV.
    ///
    /// # Example CSV
    /// ```text
    /// name,title,initial_range
    /// acme,Acme KPIs,LAST_30_DAYS
    /// ```
    pub fn load_dashboards(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            let title = r.get(1).unwrap_or("").trim();
            let initial_range = r.get(2).unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            conn.execute(
                "INSERT OR REPLACE INTO dashboards (name, title, initial_range)
                 VALUES (?1, ?2, ?3)",
                params![name, title, initial_range],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} dashboards", count);
        Ok(())
    }

    /// Load chart configuration rows from CSV.
    ///
    /// The `date_field` column must hold a JSON object naming the source
    /// table and date column; rows whose JSON does not parse are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// id,dashboard_name,display_name,value_expression,date_field,kind
    /// signups-daily,acme,Signups,count,"{""column"": ""created_at"", ""table"": ""signups""}",line
    /// ```
    pub fn load_charts(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            let dashboard_name = r.get(1).unwrap_or("").trim();
            let display_name = r.get(2).unwrap_or("").trim();
            let value_expression = r.get(3).unwrap_or("").trim();
            let date_field = r.get(4).unwrap_or("").trim();
            let kind = r.get(5).unwrap_or("").trim();

            if id.is_empty() {
                continue;
            }
            if serde_json::from_str::<DateField>(date_field).is_err() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO charts
                 (id, dashboard_name, display_name, value_expression, date_field, kind)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, dashboard_name, display_name, value_expression, date_field, kind],
            )?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} charts, skipped {} with malformed date_field",
            count,
            skipped
        );
        Ok(())
    }

    /// Load raw series rows into a chart's source table, creating the
    /// table on first use.
    ///
    /// Expected format (no headers): `date(YYYY-MM-DD),value`. Dates may
    /// carry a time-of-day suffix, which is trimmed; rows with
    /// non-numeric values are skipped. One row per calendar day; a
    /// duplicate date replaces the earlier row.
    pub fn load_series(
        &self,
        table: &str,
        date_column: &str,
        value_column: &str,
        csv_data: &str,
    ) -> anyhow::Result<()> {
        ensure_identifier(table)?;
        ensure_identifier(date_column)?;
        ensure_identifier(value_column)?;

        let conn = self.conn.borrow();
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                {date_column} TEXT PRIMARY KEY,
                {value_column} REAL NOT NULL
            );"
        ))?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let insert = format!(
            "INSERT OR REPLACE INTO {table} ({date_column}, {value_column}) VALUES (?1, ?2)"
        );
        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let date = dash_utils::dates::trim_key(r.get(0).unwrap_or("").trim());
            let value_str = r.get(1).unwrap_or("").trim();

            let value: f64 = match value_str.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if date.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(&insert, params![date, value])?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} rows into {}, skipped {}",
            count,
            table,
            skipped
        );
        Ok(())
    }
}
