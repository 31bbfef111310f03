//! SQL schema for the in-memory store.
//!
//! Only the two metadata tables are created up front. Each chart's source
//! table (the one its `date_field` points at) is created on demand by the
//! loader, because its table and column names come from the chart rows.

/// Returns the metadata schema as a single batch string.
///
/// - `dashboards` - dashboard name, title and initial preset range token
/// - `charts` - chart configuration rows; `date_field` holds a JSON object
///   `{"column": ..., "table": ...}` naming where the raw rows live
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS dashboards (
        name TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        initial_range TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS charts (
        id TEXT PRIMARY KEY,
        dashboard_name TEXT NOT NULL,
        display_name TEXT NOT NULL,
        value_expression TEXT NOT NULL,
        date_field TEXT NOT NULL,
        kind TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_charts_dashboard ON charts(dashboard_name);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_metadata_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in &["dashboards", "charts"] {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
