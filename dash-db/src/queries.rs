//! Typed query methods for dashboard metadata, chart configuration and
//! raw series rows.

use crate::models::{ChartListing, DashboardInfo, DateField, DateValueRow};
use crate::{ensure_identifier, Database};
use dash_core::chart::{ChartConfig, ChartKind};
use rusqlite::params;

impl Database {
    /// Get a dashboard's metadata by name.
    pub fn query_dashboard(&self, name: &str) -> anyhow::Result<Option<DashboardInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, title, initial_range FROM dashboards WHERE name = ?1",
        )?;
        let rows = stmt
            .query_map(params![name], |row| {
                Ok(DashboardInfo {
                    name: row.get(0)?,
                    title: row.get(1)?,
                    initial_range: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().next())
    }

    /// List a dashboard's charts, ordered by id.
    pub fn query_dashboard_charts(&self, dashboard: &str) -> anyhow::Result<Vec<ChartListing>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, display_name FROM charts
             WHERE dashboard_name = ?1
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![dashboard], |row| {
                Ok(ChartListing {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: {} charts for dashboard {}",
            rows.len(),
            dashboard
        );
        Ok(rows)
    }

    /// Get a single chart's configuration by id.
    ///
    /// The stored `date_field` JSON is expanded into the config's
    /// `table`/`date_column` fields here; a chart with an unknown kind is
    /// a data error, not a missing chart.
    pub fn query_chart_config(&self, chart_id: &str) -> anyhow::Result<Option<ChartConfig>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, display_name, value_expression, date_field, kind
             FROM charts WHERE id = ?1",
        )?;
        let rows = stmt
            .query_map(params![chart_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let Some((id, display_name, value_expression, date_field, kind)) =
            rows.into_iter().next()
        else {
            return Ok(None);
        };

        let date_field: DateField = serde_json::from_str(&date_field)?;
        let kind = ChartKind::from_token(&kind)
            .ok_or_else(|| anyhow::anyhow!("chart {} has unknown kind {:?}", id, kind))?;

        Ok(Some(ChartConfig {
            id,
            display_name,
            value_expression,
            date_column: date_field.column,
            table: date_field.table,
            kind,
        }))
    }

    /// Get raw (date, value) rows from a chart's source table for an
    /// inclusive date range, ascending by date.
    pub fn query_raw_rows(
        &self,
        table: &str,
        date_column: &str,
        value_expression: &str,
        from_key: &str,
        to_key: &str,
    ) -> anyhow::Result<Vec<DateValueRow>> {
        ensure_identifier(table)?;
        ensure_identifier(date_column)?;
        ensure_identifier(value_expression)?;

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {date_column}, {value_expression} FROM {table}
             WHERE {date_column} >= ?1 AND {date_column} <= ?2
             ORDER BY {date_column}"
        ))?;
        let rows = stmt
            .query_map(params![from_key, to_key], |row| {
                Ok(DateValueRow {
                    date: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: {} raw rows from {} between {} and {}",
            rows.len(),
            table,
            from_key,
            to_key
        );
        Ok(rows)
    }
}
